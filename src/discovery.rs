//! Works out which configured pieces are fully located on the board.
//!
//! Discovery runs in two ordered phases over a fresh state on every call:
//!
//! 1. **Edge-anchored.** Each labelled hit, in probe order, is tied to the
//!    first undiscovered piece of its colour. The label's primary anchor
//!    offset gives one candidate block; if every cell of that block is a hit
//!    of the right colour the piece is discovered there. A failed candidate is
//!    not retried against other pieces or the alternative offset.
//! 2. **Block scan.** Each piece still undiscovered takes the first
//!    row-major block of matching, unconsumed hits.
//!
//! Cells of a discovered piece are consumed and cannot support a later
//! discovery within the same call.

use alloc::vec::Vec;
use ndarray::Array2;

use crate::board::{Board, Cell};
use crate::edge::anchor_offset;
use crate::shape::{Piece, PieceId};

/// A piece together with its resolved top-left anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveredPiece {
    pub piece: Piece,
    pub row: usize,
    pub col: usize,
}

impl DiscoveredPiece {
    /// Cells covered by the piece, row-major.
    pub fn footprint(&self) -> impl Iterator<Item = (usize, usize)> {
        footprint(self.piece, self.row, self.col)
    }

    pub fn covers(&self, row: usize, col: usize) -> bool {
        let (w, h) = self.piece.dims();
        (self.row..self.row + h).contains(&row) && (self.col..self.col + w).contains(&col)
    }
}

/// Result of one discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    discovered: Vec<DiscoveredPiece>,
    remaining: Vec<Piece>,
}

impl Discovery {
    /// Located pieces, phase-1 finds first, each phase in discovery order.
    pub fn discovered(&self) -> &[DiscoveredPiece] {
        &self.discovered
    }

    /// Configured pieces not yet located, in configuration order.
    pub fn remaining(&self) -> &[Piece] {
        &self.remaining
    }

    pub fn is_discovered(&self, id: PieceId) -> bool {
        self.discovered.iter().any(|d| d.piece.id() == id)
    }

    /// Union of every discovered footprint.
    pub fn occupied(&self, height: usize, width: usize) -> Array2<bool> {
        let mut mask = Array2::from_elem((height, width), false);
        for (r, c) in self.discovered.iter().flat_map(DiscoveredPiece::footprint) {
            if let Some(slot) = mask.get_mut((r, c)) {
                *slot = true;
            }
        }
        mask
    }

    pub fn into_discovered(self) -> Vec<DiscoveredPiece> {
        self.discovered
    }
}

pub(crate) fn footprint(piece: Piece, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let (w, h) = piece.dims();
    (row..row + h).flat_map(move |r| (col..col + w).map(move |c| (r, c)))
}

/// Scratch state of one discovery pass.
struct Pass<'a> {
    board: &'a Board,
    consumed: Array2<bool>,
    found: Vec<Option<(usize, usize)>>,
}

impl<'a> Pass<'a> {
    fn new(board: &'a Board, piece_count: usize) -> Self {
        Pass {
            board,
            consumed: Array2::from_elem((board.height(), board.width()), false),
            found: alloc::vec![None; piece_count],
        }
    }

    /// Returns `true` when `piece` fits at `(row, col)` with every covered
    /// cell a hit of its colour. `respect_consumed` also rejects cells
    /// claimed by an earlier discovery.
    fn block_matches(&self, piece: Piece, row: isize, col: isize, respect_consumed: bool) -> bool {
        let (w, h) = piece.dims();
        if !self.board.contains(row, col)
            || !self.board.contains(row + h as isize - 1, col + w as isize - 1)
        {
            return false;
        }
        footprint(piece, row as usize, col as usize).all(|(r, c)| {
            let hit = self
                .board
                .cell(r, c)
                .is_some_and(|cell: &Cell| cell.is_hit_of(piece.color()));
            hit && !(respect_consumed && self.consumed[(r, c)])
        })
    }

    fn claim(&mut self, index: usize, piece: Piece, row: usize, col: usize) {
        for (r, c) in footprint(piece, row, col) {
            self.consumed[(r, c)] = true;
        }
        self.found[index] = Some((row, col));
        log::debug!(
            "discovered {} piece {} at ({}, {})",
            piece.color(),
            piece.id(),
            row,
            col
        );
    }
}

/// Determine every piece whose full footprint is known.
pub fn discover(board: &Board, pieces: &[Piece]) -> Discovery {
    let mut pass = Pass::new(board, pieces.len());
    let mut order = Vec::with_capacity(pieces.len());

    for event in board.hits() {
        if pass.consumed[(event.row, event.col)] {
            continue;
        }
        let (Some(edge), Some(color)) = (event.edge, event.color) else {
            continue;
        };
        let Some(index) = (0..pieces.len())
            .find(|&i| pass.found[i].is_none() && pieces[i].color() == color)
        else {
            continue;
        };
        let piece = pieces[index];
        let (w, h) = piece.dims();
        let (dr, dc) = anchor_offset(edge, w, h).primary();
        let row = event.row as isize + dr;
        let col = event.col as isize + dc;
        if pass.block_matches(piece, row, col, false) {
            pass.claim(index, piece, row as usize, col as usize);
            order.push(index);
        }
    }

    for (index, &piece) in pieces.iter().enumerate() {
        if pass.found[index].is_some() {
            continue;
        }
        let (w, h) = piece.dims();
        if h > board.height() || w > board.width() {
            continue;
        }
        let hit = (0..=board.height() - h)
            .flat_map(|r| (0..=board.width() - w).map(move |c| (r, c)))
            .find(|&(r, c)| pass.block_matches(piece, r as isize, c as isize, true));
        if let Some((r, c)) = hit {
            pass.claim(index, piece, r, c);
            order.push(index);
        }
    }

    let discovered = order
        .iter()
        .filter_map(|&i| {
            pass.found[i].map(|(row, col)| DiscoveredPiece {
                piece: pieces[i],
                row,
                col,
            })
        })
        .collect();
    let remaining = pieces
        .iter()
        .enumerate()
        .filter(|(i, _)| pass.found[*i].is_none())
        .map(|(_, p)| *p)
        .collect();
    Discovery {
        discovered,
        remaining,
    }
}
