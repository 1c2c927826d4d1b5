//! Contact-point ("edge") labels and the geometry that ties a labelled hit to
//! the top-left anchor of the piece it belongs to.
//!
//! Everything here is a pure function of a label and the effective
//! `(w, h)` of a footprint. Unknown combinations degrade to a neutral answer
//! (`[Middle]` or a zero offset) and log a warning instead of failing.

use core::fmt;
use core::str::FromStr;

/// A contact-point label reported with a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum EdgeLabel {
    TopLeft,
    Top,
    TopRight,
    MiddleLeft,
    Left,
    Middle,
    Right,
    MiddleRight,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl EdgeLabel {
    pub const ALL: [EdgeLabel; 11] = [
        EdgeLabel::TopLeft,
        EdgeLabel::Top,
        EdgeLabel::TopRight,
        EdgeLabel::MiddleLeft,
        EdgeLabel::Left,
        EdgeLabel::Middle,
        EdgeLabel::Right,
        EdgeLabel::MiddleRight,
        EdgeLabel::BottomLeft,
        EdgeLabel::Bottom,
        EdgeLabel::BottomRight,
    ];

    /// The operator-facing string.
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeLabel::TopLeft => "top-left",
            EdgeLabel::Top => "top",
            EdgeLabel::TopRight => "top-right",
            EdgeLabel::MiddleLeft => "middle-left",
            EdgeLabel::Left => "left",
            EdgeLabel::Middle => "middle",
            EdgeLabel::Right => "right",
            EdgeLabel::MiddleRight => "middle-right",
            EdgeLabel::BottomLeft => "bottom-left",
            EdgeLabel::Bottom => "bottom",
            EdgeLabel::BottomRight => "bottom-right",
        }
    }

    fn row_part(self) -> RowPart {
        match self {
            EdgeLabel::TopLeft | EdgeLabel::Top | EdgeLabel::TopRight => RowPart::Top,
            EdgeLabel::BottomLeft | EdgeLabel::Bottom | EdgeLabel::BottomRight => RowPart::Bottom,
            _ => RowPart::Center,
        }
    }

    fn col_part(self) -> ColPart {
        match self {
            EdgeLabel::TopLeft | EdgeLabel::Left | EdgeLabel::BottomLeft => ColPart::Left,
            EdgeLabel::TopRight | EdgeLabel::Right | EdgeLabel::BottomRight => ColPart::Right,
            _ => ColPart::Center,
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a string outside the label vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEdgeLabelError;

impl fmt::Display for ParseEdgeLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown edge label")
    }
}

impl FromStr for EdgeLabel {
    type Err = ParseEdgeLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeLabel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or(ParseEdgeLabelError)
    }
}

#[derive(Clone, Copy)]
enum RowPart {
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy)]
enum ColPart {
    Left,
    Center,
    Right,
}

/// Displacement from a hit cell to the anchor of its piece:
/// `anchor = hit + (d_row, d_col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorOffset {
    pub d_row: isize,
    pub d_col: isize,
    /// Second, equally valid displacement (the two centre cells of a
    /// length-4 rod share the `middle` label).
    pub alternative: Option<(isize, isize)>,
}

impl AnchorOffset {
    const fn single(d_row: isize, d_col: isize) -> Self {
        Self {
            d_row,
            d_col,
            alternative: None,
        }
    }

    /// Primary displacement.
    pub fn primary(&self) -> (isize, isize) {
        (self.d_row, self.d_col)
    }

    /// Primary then alternative displacement.
    pub fn candidates(&self) -> impl Iterator<Item = (isize, isize)> {
        core::iter::once(self.primary()).chain(self.alternative)
    }

    /// Returns `true` when applying any candidate to `hit` lands on `anchor`.
    pub fn matches(&self, hit: (usize, usize), anchor: (usize, usize)) -> bool {
        self.candidates().any(|(dr, dc)| {
            hit.0 as isize + dr == anchor.0 as isize && hit.1 as isize + dc == anchor.1 as isize
        })
    }
}

const ONLY_MIDDLE: &[EdgeLabel] = &[EdgeLabel::Middle];
const HORIZONTAL_2: &[EdgeLabel] = &[EdgeLabel::Left, EdgeLabel::Right];
const HORIZONTAL_3: &[EdgeLabel] = &[EdgeLabel::Left, EdgeLabel::Middle, EdgeLabel::Right];
const VERTICAL_2: &[EdgeLabel] = &[EdgeLabel::Top, EdgeLabel::Bottom];
const VERTICAL_3: &[EdgeLabel] = &[EdgeLabel::Top, EdgeLabel::Middle, EdgeLabel::Bottom];
const CORNERS: &[EdgeLabel] = &[
    EdgeLabel::TopLeft,
    EdgeLabel::TopRight,
    EdgeLabel::BottomLeft,
    EdgeLabel::BottomRight,
];
const SQUARE_3: &[EdgeLabel] = &[
    EdgeLabel::TopLeft,
    EdgeLabel::Top,
    EdgeLabel::TopRight,
    EdgeLabel::Left,
    EdgeLabel::Middle,
    EdgeLabel::Right,
    EdgeLabel::BottomLeft,
    EdgeLabel::Bottom,
    EdgeLabel::BottomRight,
];
const TALL_2X3: &[EdgeLabel] = &[
    EdgeLabel::TopLeft,
    EdgeLabel::TopRight,
    EdgeLabel::MiddleLeft,
    EdgeLabel::MiddleRight,
    EdgeLabel::BottomLeft,
    EdgeLabel::BottomRight,
];

/// Fixed anchor offsets of the 2-wide, 3-tall shape.
const TALL_2X3_OFFSETS: [(EdgeLabel, isize, isize); 6] = [
    (EdgeLabel::TopLeft, 0, 0),
    (EdgeLabel::TopRight, 0, -1),
    (EdgeLabel::MiddleLeft, -1, 0),
    (EdgeLabel::MiddleRight, -1, -1),
    (EdgeLabel::BottomLeft, -2, 0),
    (EdgeLabel::BottomRight, -2, -1),
];

/// Labels the operator may report for a hit on a `w`×`h` footprint, in
/// presentation order.
pub fn valid_edge_labels(w: usize, h: usize) -> &'static [EdgeLabel] {
    match (w, h) {
        (1, 1) => ONLY_MIDDLE,
        (2, 1) => HORIZONTAL_2,
        // both centre cells of a length-4 rod report "middle"
        (3, 1) | (4, 1) => HORIZONTAL_3,
        (1, 2) => VERTICAL_2,
        (1, 3) | (1, 4) => VERTICAL_3,
        (2, 2) => CORNERS,
        (3, 3) => SQUARE_3,
        (2, 3) => TALL_2X3,
        _ => {
            log::warn!("no edge vocabulary for a {w}x{h} footprint, using [middle]");
            ONLY_MIDDLE
        }
    }
}

/// Offset from a hit reported with `label` to the top-left anchor of a
/// `w`×`h` footprint.
pub fn anchor_offset(label: EdgeLabel, w: usize, h: usize) -> AnchorOffset {
    if (w, h) == (2, 3) {
        if let Some(&(_, dr, dc)) = TALL_2X3_OFFSETS.iter().find(|(l, _, _)| *l == label) {
            return AnchorOffset::single(dr, dc);
        }
    }

    if label == EdgeLabel::Middle {
        match (w, h) {
            (4, 1) => {
                return AnchorOffset {
                    d_row: 0,
                    d_col: -1,
                    alternative: Some((0, -2)),
                }
            }
            (1, 4) => {
                return AnchorOffset {
                    d_row: -1,
                    d_col: 0,
                    alternative: Some((-2, 0)),
                }
            }
            _ => {}
        }
    }

    if matches!(label, EdgeLabel::MiddleLeft | EdgeLabel::MiddleRight) {
        log::warn!("edge label {label} has no meaning on a {w}x{h} footprint, using (0, 0)");
        return AnchorOffset::single(0, 0);
    }

    let (w, h) = (w as isize, h as isize);
    let d_row = match label.row_part() {
        RowPart::Top => 0,
        RowPart::Center => -(h / 2),
        RowPart::Bottom => -(h - 1),
    };
    let d_col = match label.col_part() {
        ColPart::Left => 0,
        ColPart::Center => -(w / 2),
        ColPart::Right => -(w - 1),
    };
    AnchorOffset::single(d_row, d_col)
}

/// The label that identifies the cell at `(d_row, d_col)` inside a `w`×`h`
/// footprint, if the vocabulary for that footprint has one.
pub fn label_at(d_row: usize, d_col: usize, w: usize, h: usize) -> Option<EdgeLabel> {
    if d_row >= h || d_col >= w {
        return None;
    }
    let cell = (d_row, d_col);
    valid_edge_labels(w, h)
        .iter()
        .copied()
        .find(|&label| anchor_offset(label, w, h).matches(cell, (0, 0)))
}
