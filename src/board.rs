//! Probe grid and the ordered log of recorded hits.

use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;

use crate::common::SessionError;
use crate::edge::EdgeLabel;
use crate::shape::ShapeColor;

/// What the operator reports after probing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    Miss,
    /// Hit, optionally with the colour of the piece and the contact point.
    Hit {
        color: Option<ShapeColor>,
        edge: Option<EdgeLabel>,
    },
}

impl ProbeResult {
    pub fn hit(color: ShapeColor, edge: Option<EdgeLabel>) -> Self {
        ProbeResult::Hit {
            color: Some(color),
            edge,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, ProbeResult::Hit { .. })
    }
}

/// One board cell. `is_hit`, `color` and `edge` only carry meaning once
/// `revealed` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub revealed: bool,
    pub is_hit: bool,
    pub color: Option<ShapeColor>,
    pub edge: Option<EdgeLabel>,
}

impl Cell {
    /// Revealed as a hit of exactly `color`.
    pub fn is_hit_of(&self, color: ShapeColor) -> bool {
        self.revealed && self.is_hit && self.color == Some(color)
    }

    pub fn is_miss(&self) -> bool {
        self.revealed && !self.is_hit
    }
}

/// A recorded hit, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEvent {
    pub row: usize,
    pub col: usize,
    pub color: Option<ShapeColor>,
    pub edge: Option<EdgeLabel>,
}

/// Fixed-size grid of cells plus the hit log.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
    hits: Vec<HitEvent>,
}

impl Board {
    /// Create an all-unrevealed `height`×`width` board.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            cells: Array2::from_elem((height, width), Cell::default()),
            hits: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width()
    }

    /// Signed variant of [`Board::in_bounds`] for anchor arithmetic.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && self.in_bounds(row as usize, col as usize)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get((row, col))
    }

    /// Hits in the order they were recorded.
    pub fn hits(&self) -> &[HitEvent] {
        &self.hits
    }

    /// Row-major iterator over `((row, col), cell)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        self.cells.indexed_iter()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.revealed).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.cells.iter().all(|c| c.revealed)
    }

    /// Reveal a cell with the reported result, logging a hit event.
    pub fn reveal(&mut self, row: usize, col: usize, result: ProbeResult) -> Result<(), SessionError> {
        let cell = self
            .cells
            .get_mut((row, col))
            .ok_or(SessionError::OutOfBounds { row, col })?;
        if cell.revealed {
            return Err(SessionError::AlreadyRevealed { row, col });
        }
        *cell = match result {
            ProbeResult::Miss => Cell {
                revealed: true,
                ..Cell::default()
            },
            ProbeResult::Hit { color, edge } => Cell {
                revealed: true,
                is_hit: true,
                color,
                edge,
            },
        };
        if let ProbeResult::Hit { color, edge } = result {
            self.hits.push(HitEvent {
                row,
                col,
                color,
                edge,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.height(), self.width())?;
        for row in self.cells.rows() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match (cell.revealed, cell.is_hit) {
                    (false, _) => '.',
                    (true, false) => 'o',
                    (true, true) => 'X',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "  hits: {:?}\n}}", self.hits)
    }
}
