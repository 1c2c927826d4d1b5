use alloc::vec::Vec;

use crate::{
    ai::{best_move, calc_scores, ScoreGrid},
    board::{Board, ProbeResult},
    common::{SelectOutcome, SessionError},
    config::valid_dimensions,
    discovery::{discover, DiscoveredPiece, Discovery},
    shape::Piece,
};

/// Found/total counters shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub found: usize,
    pub total: usize,
    pub attempts: usize,
    pub complete: bool,
}

/// Every derived value of a session, computed together from one state.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub discovery: Discovery,
    pub scores: ScoreGrid,
    pub suggestion: Option<(usize, usize)>,
}

/// A running solve: board, hit log, configured pieces and the pending probe.
///
/// Derived values are recomputed from scratch on each query, so they can
/// never go stale after a mutation.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    pieces: Vec<Piece>,
    pending: Option<(usize, usize)>,
    attempts: usize,
}

impl Session {
    /// Start a session on an empty `height`×`width` board.
    pub fn start(height: usize, width: usize, pieces: Vec<Piece>) -> Result<Self, SessionError> {
        if !valid_dimensions(height, width) {
            return Err(SessionError::InvalidDimensions { height, width });
        }
        if pieces.is_empty() {
            return Err(SessionError::NoPieces);
        }
        log::debug!(
            "starting {}x{} session with {} pieces",
            height,
            width,
            pieces.len()
        );
        Ok(Self {
            board: Board::new(height, width),
            pieces,
            pending: None,
            attempts: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Cell waiting for a result, if any.
    pub fn pending(&self) -> Option<(usize, usize)> {
        self.pending
    }

    /// Number of resolved probes, hits and misses alike.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Mark `(row, col)` as the cell about to be probed. Selecting while
    /// another cell is pending replaces that selection.
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<SelectOutcome, SessionError> {
        let cell = self
            .board
            .cell(row, col)
            .ok_or(SessionError::OutOfBounds { row, col })?;
        if cell.revealed {
            return Ok(SelectOutcome::NoChange);
        }
        let outcome = match self.pending.replace((row, col)) {
            Some((r, c)) if (r, c) != (row, col) => {
                log::debug!("selection ({}, {}) replaced by ({}, {})", r, c, row, col);
                SelectOutcome::Replaced { row: r, col: c }
            }
            _ => SelectOutcome::Selected,
        };
        Ok(outcome)
    }

    /// Resolve the pending cell with the reported result.
    pub fn record_result(&mut self, result: ProbeResult) -> Result<(), SessionError> {
        let (row, col) = self.pending.ok_or(SessionError::NothingPending)?;
        self.board.reveal(row, col, result)?;
        self.pending = None;
        self.attempts += 1;
        log::debug!("probe {} at ({}, {}): {:?}", self.attempts, row, col, result);
        Ok(())
    }

    /// Drop the pending selection without recording anything.
    pub fn clear_selection(&mut self) -> Option<(usize, usize)> {
        let dropped = self.pending.take();
        if let Some((row, col)) = dropped {
            log::debug!("selection ({}, {}) cancelled", row, col);
        }
        dropped
    }

    /// Select and resolve a cell in one step.
    pub fn probe(&mut self, row: usize, col: usize, result: ProbeResult) -> Result<(), SessionError> {
        if !self.select_cell(row, col)?.has_update() {
            return Err(SessionError::AlreadyRevealed { row, col });
        }
        self.record_result(result)
    }

    pub fn discovery(&self) -> Discovery {
        discover(&self.board, &self.pieces)
    }

    pub fn discovered_pieces(&self) -> Vec<DiscoveredPiece> {
        self.discovery().into_discovered()
    }

    pub fn score_grid(&self) -> ScoreGrid {
        calc_scores(&self.board, &self.discovery())
    }

    /// Suggested next probe.
    pub fn suggestion(&self) -> Option<(usize, usize)> {
        best_move(&self.board, &self.score_grid())
    }

    /// Discovery, scores and suggestion from a single recomputation.
    pub fn analysis(&self) -> Analysis {
        let discovery = self.discovery();
        let scores = calc_scores(&self.board, &discovery);
        let suggestion = best_move(&self.board, &scores);
        Analysis {
            discovery,
            scores,
            suggestion,
        }
    }

    pub fn progress(&self) -> Progress {
        let found = self.discovery().discovered().len();
        let total = self.pieces.len();
        Progress {
            found,
            total,
            attempts: self.attempts,
            complete: found == total,
        }
    }
}
