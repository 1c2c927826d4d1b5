//! Pre-game configuration and the setup/playing state machine.

use alloc::vec::Vec;

use crate::{
    common::SessionError,
    config::{valid_dimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    game::Session,
    shape::{Orientation, Piece, PieceId, ShapeColor},
};

/// Board size and piece list being configured before a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    height: usize,
    width: usize,
    pieces: Vec<Piece>,
    next_id: u32,
}

impl Default for Setup {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl Setup {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            pieces: Vec::new(),
            next_id: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn set_dimensions(&mut self, height: usize, width: usize) -> Result<(), SessionError> {
        if !valid_dimensions(height, width) {
            return Err(SessionError::InvalidDimensions { height, width });
        }
        self.height = height;
        self.width = width;
        Ok(())
    }

    /// Add a horizontal piece of `color`.
    pub fn add_piece(&mut self, color: ShapeColor) -> PieceId {
        self.add_piece_oriented(color, Orientation::Horizontal)
    }

    pub fn add_piece_oriented(&mut self, color: ShapeColor, orientation: Orientation) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.push(Piece::new(id, color, orientation));
        id
    }

    pub fn remove_piece(&mut self, id: PieceId) -> Result<Piece, SessionError> {
        let index = self.index_of(id)?;
        Ok(self.pieces.remove(index))
    }

    /// Flip a piece's orientation. Locked shapes stay as they are.
    pub fn toggle_orientation(&mut self, id: PieceId) -> Result<Orientation, SessionError> {
        let index = self.index_of(id)?;
        let piece = &mut self.pieces[index];
        if !piece.toggle_orientation() {
            log::debug!("{} piece {} is orientation-locked", piece.color(), id);
        }
        Ok(piece.orientation())
    }

    /// Start a session from this configuration.
    pub fn start(&self) -> Result<Session, SessionError> {
        Session::start(self.height, self.width, self.pieces.clone())
    }

    fn index_of(&self, id: PieceId) -> Result<usize, SessionError> {
        self.pieces
            .iter()
            .position(|p| p.id() == id)
            .ok_or(SessionError::UnknownPiece(id))
    }
}

/// Top-level solver: configuring, or playing a session.
#[derive(Debug, Clone)]
pub enum Solver {
    Setup(Setup),
    Playing { setup: Setup, session: Session },
}

impl Default for Solver {
    fn default() -> Self {
        Solver::Setup(Setup::default())
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration form, only while not playing.
    pub fn setup_mut(&mut self) -> Option<&mut Setup> {
        match self {
            Solver::Setup(setup) => Some(setup),
            Solver::Playing { .. } => None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Solver::Playing { session, .. } => Some(session),
            Solver::Setup(_) => None,
        }
    }

    pub fn session_mut(&mut self) -> Result<&mut Session, SessionError> {
        match self {
            Solver::Playing { session, .. } => Ok(session),
            Solver::Setup(_) => Err(SessionError::NotPlaying),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Solver::Playing { .. })
    }

    /// Move from setup to playing. On failure the solver stays in setup.
    pub fn start(&mut self) -> Result<&mut Session, SessionError> {
        if let Solver::Setup(setup) = self {
            let session = setup.start()?;
            let setup = core::mem::take(setup);
            *self = Solver::Playing { setup, session };
        }
        self.session_mut()
    }

    /// Back to an empty configuration. Board dimensions are kept; pieces,
    /// board and hits are discarded.
    pub fn reset(&mut self) {
        let (height, width) = match self {
            Solver::Setup(setup) | Solver::Playing { setup, .. } => (setup.height, setup.width),
        };
        log::debug!("reset to setup");
        *self = Solver::Setup(Setup::new(height, width));
    }
}
