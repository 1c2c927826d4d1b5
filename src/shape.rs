//! Shape definitions and configured piece instances.

use core::fmt;
use core::str::FromStr;

use crate::config::SHAPES;

/// Orientation of a piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[cfg_attr(feature = "std", serde(rename = "H"))]
    Horizontal,
    #[cfg_attr(feature = "std", serde(rename = "V"))]
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Single-letter form used by the operator ("H" / "V").
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "H",
            Orientation::Vertical => "V",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "h" => Ok(Orientation::Horizontal),
            "V" | "v" => Ok(Orientation::Vertical),
            _ => Err(ParseShapeError::Orientation),
        }
    }
}

/// Shape kind. Every kind has its own colour, so the colour doubles as the
/// shape identifier and as the colour reported with a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ShapeColor {
    Yellow,
    Blue,
    Green,
    Orange,
    Purple,
    Red,
}

impl ShapeColor {
    /// All shape kinds in catalog order.
    pub const ALL: [ShapeColor; 6] = [
        ShapeColor::Yellow,
        ShapeColor::Blue,
        ShapeColor::Green,
        ShapeColor::Orange,
        ShapeColor::Purple,
        ShapeColor::Red,
    ];

    /// Catalog entry for this kind.
    pub fn def(self) -> &'static ShapeDef {
        &SHAPES[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeColor::Yellow => "yellow",
            ShapeColor::Blue => "blue",
            ShapeColor::Green => "green",
            ShapeColor::Orange => "orange",
            ShapeColor::Purple => "purple",
            ShapeColor::Red => "red",
        }
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeColor {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeColor::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseShapeError::Color)
    }
}

/// Error returned when parsing a colour or orientation from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseShapeError {
    Color,
    Orientation,
}

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseShapeError::Color => write!(f, "unknown shape colour"),
            ParseShapeError::Orientation => write!(f, "orientation must be H or V"),
        }
    }
}

/// Static description of a shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    color: ShapeColor,
    name: &'static str,
    width: usize,
    height: usize,
    locked: bool,
}

impl ShapeDef {
    /// Create a new shape definition. `width`/`height` describe the H form.
    pub const fn new(
        color: ShapeColor,
        name: &'static str,
        width: usize,
        height: usize,
        locked: bool,
    ) -> Self {
        Self {
            color,
            name,
            width,
            height,
            locked,
        }
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Columns covered in the H orientation.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows covered in the H orientation.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Orientation-locked shapes always use their H form.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Effective `(width, height)` for `orientation`.
    pub fn dims(&self, orientation: Orientation) -> (usize, usize) {
        match orientation {
            Orientation::Vertical if !self.locked => (self.height, self.width),
            _ => (self.width, self.height),
        }
    }
}

/// Identifier of a configured piece, unique within one setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A configured instance of a shape, to be located on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    id: PieceId,
    color: ShapeColor,
    orientation: Orientation,
}

impl Piece {
    /// Create a piece. Locked shapes are normalised to `Horizontal`.
    pub fn new(id: PieceId, color: ShapeColor, orientation: Orientation) -> Self {
        let orientation = if color.def().is_locked() {
            Orientation::Horizontal
        } else {
            orientation
        };
        Self {
            id,
            color,
            orientation,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn def(&self) -> &'static ShapeDef {
        self.color.def()
    }

    /// Effective `(width, height)` of the footprint.
    pub fn dims(&self) -> (usize, usize) {
        self.def().dims(self.orientation)
    }

    /// Flip the orientation; returns `false` (no change) for locked shapes.
    pub fn toggle_orientation(&mut self) -> bool {
        if self.def().is_locked() {
            return false;
        }
        self.orientation = self.orientation.toggled();
        true
    }
}
