// Placement-enumeration scoring and next-probe selection.
// Scores are a fixed heuristic, not normalised probabilities.

use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;

use crate::{
    board::Board,
    discovery::{footprint, Discovery},
    edge::anchor_offset,
    shape::Piece,
};

/// Weight every valid placement starts with.
pub const BASE_WEIGHT: u64 = 1;
/// Added per covered hit of the piece's colour.
pub const HIT_WEIGHT: u64 = 100;
/// Added per covered labelled hit whose anchor agrees with the placement.
pub const EDGE_BONUS: u64 = 1000;

/// Accumulated placement weight per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct ScoreGrid {
    scores: Array2<u64>,
}

impl ScoreGrid {
    fn zeros(height: usize, width: usize) -> Self {
        ScoreGrid {
            scores: Array2::zeros((height, width)),
        }
    }

    pub fn height(&self) -> usize {
        self.scores.nrows()
    }

    pub fn width(&self) -> usize {
        self.scores.ncols()
    }

    /// Score at `(row, col)`; zero outside the board.
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.scores.get((row, col)).copied().unwrap_or(0)
    }

    /// Largest score on the grid.
    pub fn max(&self) -> u64 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    /// Row-major iterator over `((row, col), score)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), u64)> + '_ {
        self.scores.indexed_iter().map(|(pos, &v)| (pos, v))
    }

    /// Nested rows, for rendering and serialization.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.scores.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}

impl fmt::Debug for ScoreGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ScoreGrid {}x{}:", self.height(), self.width())?;
        for row in self.scores.rows() {
            for v in row.iter() {
                write!(f, "{:>6}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Weight of `piece` placed at `(row, col)`, or `None` when the placement
/// contradicts the evidence.
fn placement_weight(
    board: &Board,
    occupied: &Array2<bool>,
    piece: Piece,
    row: usize,
    col: usize,
) -> Option<u64> {
    let (w, h) = piece.dims();
    let mut hit_score = 0u64;
    let mut edge_score = 0u64;

    for (r, c) in footprint(piece, row, col) {
        if occupied[(r, c)] {
            return None;
        }
        let cell = board.cell(r, c)?;
        if !cell.revealed {
            continue;
        }
        if !cell.is_hit {
            return None;
        }
        match cell.color {
            Some(color) if color == piece.color() => {
                hit_score += 1;
                if let Some(edge) = cell.edge {
                    if !anchor_offset(edge, w, h).matches((r, c), (row, col)) {
                        return None;
                    }
                    edge_score += EDGE_BONUS;
                }
            }
            Some(_) => return None,
            // colourless hit: neither supports nor rules out
            None => {}
        }
    }

    let mut weight = BASE_WEIGHT;
    if hit_score > 0 {
        weight += HIT_WEIGHT * hit_score;
    }
    Some(weight + edge_score)
}

/// Compute the score grid for every undiscovered piece given the board and
/// the current discovery result.
pub fn calc_scores(board: &Board, discovery: &Discovery) -> ScoreGrid {
    let (height, width) = (board.height(), board.width());
    let occupied = discovery.occupied(height, width);
    let mut grid = ScoreGrid::zeros(height, width);

    for &piece in discovery.remaining() {
        let (w, h) = piece.dims();
        if h > height || w > width {
            continue;
        }
        for r in 0..=height - h {
            for c in 0..=width - w {
                let Some(weight) = placement_weight(board, &occupied, piece, r, c) else {
                    continue;
                };
                log::trace!("{} at ({}, {}) weighs {}", piece.color(), r, c, weight);
                for (rr, cc) in footprint(piece, r, c) {
                    let revealed = board.cell(rr, cc).is_some_and(|cell| cell.revealed);
                    if !revealed {
                        grid.scores[(rr, cc)] += weight;
                    }
                }
            }
        }
    }

    grid
}

/// Pick the unrevealed cell with the highest score, earliest row-major cell
/// on ties. `None` only when every cell is revealed.
pub fn best_move(board: &Board, scores: &ScoreGrid) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), u64)> = None;
    for (pos, cell) in board.iter() {
        if cell.revealed {
            continue;
        }
        let score = scores.get(pos.0, pos.1);
        if best.map_or(true, |(_, max)| score > max) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}
