//! Hidden layouts and self-play, for exercising the advisor end to end.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::ProbeResult,
    common::SessionError,
    discovery::DiscoveredPiece,
    edge::label_at,
    game::Session,
    shape::Piece,
};

const PLACEMENT_ATTEMPTS: usize = 100;

/// Ground-truth placement of every piece, unknown to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenLayout {
    height: usize,
    width: usize,
    placements: Vec<DiscoveredPiece>,
}

impl HiddenLayout {
    /// Build a layout from explicit placements, checking bounds and overlap.
    pub fn new(
        height: usize,
        width: usize,
        placements: Vec<DiscoveredPiece>,
    ) -> Result<Self, SessionError> {
        let mut layout = HiddenLayout {
            height,
            width,
            placements: Vec::with_capacity(placements.len()),
        };
        for p in placements {
            if !layout.fits(&p) {
                return Err(SessionError::UnableToPlace);
            }
            layout.placements.push(p);
        }
        Ok(layout)
    }

    /// Place `pieces` at random, non-overlapping positions.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        height: usize,
        width: usize,
        pieces: &[Piece],
    ) -> Result<Self, SessionError> {
        let mut layout = HiddenLayout {
            height,
            width,
            placements: Vec::with_capacity(pieces.len()),
        };
        for &piece in pieces {
            let (w, h) = piece.dims();
            if h > height || w > width {
                return Err(SessionError::UnableToPlace);
            }
            let placed = (0..PLACEMENT_ATTEMPTS)
                .map(|_| DiscoveredPiece {
                    piece,
                    row: rng.random_range(0..=height - h),
                    col: rng.random_range(0..=width - w),
                })
                .find(|candidate| layout.fits(candidate))
                .ok_or(SessionError::UnableToPlace)?;
            layout.placements.push(placed);
        }
        Ok(layout)
    }

    pub fn placements(&self) -> &[DiscoveredPiece] {
        &self.placements
    }

    fn fits(&self, candidate: &DiscoveredPiece) -> bool {
        let (w, h) = candidate.piece.dims();
        candidate.row + h <= self.height
            && candidate.col + w <= self.width
            && candidate
                .footprint()
                .all(|(r, c)| !self.placements.iter().any(|p| p.covers(r, c)))
    }

    /// What a truthful operator reports when `(row, col)` is probed.
    pub fn outcome_at(&self, row: usize, col: usize, report_edges: bool) -> ProbeResult {
        match self.placements.iter().find(|p| p.covers(row, col)) {
            None => ProbeResult::Miss,
            Some(p) => {
                let (w, h) = p.piece.dims();
                let edge = if report_edges {
                    label_at(row - p.row, col - p.col, w, h)
                } else {
                    None
                };
                ProbeResult::hit(p.piece.color(), edge)
            }
        }
    }
}

/// Follow the suggestion until every piece is discovered or no cell is left.
/// Returns the number of probes made.
pub fn autoplay(
    session: &mut Session,
    layout: &HiddenLayout,
    report_edges: bool,
) -> Result<usize, SessionError> {
    loop {
        let analysis = session.analysis();
        if analysis.discovery.remaining().is_empty() {
            break;
        }
        let Some((row, col)) = analysis.suggestion else {
            log::warn!("board exhausted with pieces still undiscovered");
            break;
        };
        session.probe(row, col, layout.outcome_at(row, col, report_edges))?;
    }
    Ok(session.attempts())
}
