//! Common types for the solver: session errors and selection outcomes.

use crate::shape::PieceId;

/// Outcome of selecting a cell as the pending probe target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Cell was already revealed; nothing changed.
    NoChange,
    /// Cell is now pending.
    Selected,
    /// Cell is now pending, replacing an earlier unresolved selection.
    Replaced { row: usize, col: usize },
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, SelectOutcome::NoChange)
    }
}

/// Errors returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A session needs at least one configured piece.
    NoPieces,
    /// Board dimensions outside the accepted range.
    InvalidDimensions { height: usize, width: usize },
    /// Coordinates outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Attempted to reveal a cell twice.
    AlreadyRevealed { row: usize, col: usize },
    /// A result was recorded while no cell was pending.
    NothingPending,
    /// Operation needs a running session.
    NotPlaying,
    /// No configured piece carries this id.
    UnknownPiece(PieceId),
    /// Random layout could not fit every piece.
    UnableToPlace,
}

impl core::fmt::Display for SessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SessionError::NoPieces => write!(f, "At least one piece must be configured"),
            SessionError::InvalidDimensions { height, width } => {
                write!(f, "Board size {}x{} is out of range", height, width)
            }
            SessionError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            SessionError::AlreadyRevealed { row, col } => {
                write!(f, "Cell ({}, {}) is already revealed", row, col)
            }
            SessionError::NothingPending => write!(f, "No cell is selected"),
            SessionError::NotPlaying => write!(f, "No session is running"),
            SessionError::UnknownPiece(id) => write!(f, "Unknown piece {}", id),
            SessionError::UnableToPlace => write!(f, "Unable to place every piece"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}
