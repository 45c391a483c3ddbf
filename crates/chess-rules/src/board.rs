//! Mailbox board: an 8x8 grid of cells over an arena of piece records.
//!
//! Pieces are identified by [`PieceId`] so that a particular pawn or king can
//! be named across moves (the en-passant marker and the king references need
//! identity, not just kind and color). Captured pieces stay in the arena,
//! detached from any cell, which lets move simulation restore a position
//! bit-identically.

use chess_core::{Color, PieceKind, Point};
use thiserror::Error;

/// Errors returned by board queries and mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("point {0} is outside the 8x8 board")]
    OutOfBounds(Point),

    #[error("cannot place a piece at {0}")]
    InvalidPlacement(Point),
}

/// A stable handle to a piece in the board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(u32);

/// A piece record: immutable kind and color, board-maintained position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Point,
}

impl Piece {
    /// Returns the piece kind.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the owning side.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the piece's recorded position.
    ///
    /// Only meaningful while the piece occupies a cell; after a capture the
    /// record keeps the square it was taken on.
    #[inline]
    pub const fn position(&self) -> Point {
        self.position
    }
}

/// An 8x8 board of cells, each optionally holding one piece.
///
/// Invariant: while a piece is on the board, its recorded position matches
/// the cell that references it. [`Board::relocate`] maintains this for the
/// moved piece but deliberately performs no capture bookkeeping, so the game
/// layer can reuse it both for real moves and for revert-after-simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceId>; 64],
    pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Board {
            cells: [None; 64],
            pieces: Vec::with_capacity(32),
        }
    }

    /// Returns true if the point lies within the 8x8 grid.
    #[inline]
    pub const fn is_on_board(point: Point) -> bool {
        point.in_bounds()
    }

    #[inline]
    fn index(point: Point) -> usize {
        point.rank as usize * 8 + point.file as usize
    }

    /// Creates a new piece and stores it at `at`.
    ///
    /// Fails with [`BoardError::InvalidPlacement`] if the point is off the
    /// board or the cell is already occupied.
    pub fn place(
        &mut self,
        kind: PieceKind,
        color: Color,
        at: Point,
    ) -> Result<PieceId, BoardError> {
        if !Self::is_on_board(at) || self.cells[Self::index(at)].is_some() {
            return Err(BoardError::InvalidPlacement(at));
        }
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(Piece {
            kind,
            color,
            position: at,
        });
        self.cells[Self::index(at)] = Some(id);
        Ok(id)
    }

    /// Detaches and returns whatever piece occupies `at`.
    ///
    /// Returns `None` for an empty cell or an off-board point. The piece
    /// record stays in the arena.
    pub fn remove_at(&mut self, at: Point) -> Option<PieceId> {
        if !Self::is_on_board(at) {
            return None;
        }
        self.cells[Self::index(at)].take()
    }

    /// Relocates the occupant of `from` to `to`, overwriting any occupant
    /// at `to` without removing it from side lists.
    ///
    /// Both points must be on the board. This is the raw movement primitive:
    /// the overwritten piece record is left untouched so a caller that saved
    /// its id can restore it with [`Board::restore`].
    pub fn relocate(&mut self, from: Point, to: Point) {
        debug_assert!(Self::is_on_board(from) && Self::is_on_board(to));
        let mover = self.cells[Self::index(from)].take();
        if let Some(id) = mover {
            self.pieces[id.0 as usize].position = to;
        }
        self.cells[Self::index(to)] = mover;
    }

    /// Returns the occupant of `at`, or an error for an off-board point.
    pub fn piece_at(&self, at: Point) -> Result<Option<PieceId>, BoardError> {
        if !Self::is_on_board(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        Ok(self.cells[Self::index(at)])
    }

    /// Returns the record for a piece id issued by this board.
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0 as usize]
    }

    /// Infallible occupant lookup; off-board points read as empty.
    pub(crate) fn occupant(&self, at: Point) -> Option<PieceId> {
        if !Self::is_on_board(at) {
            return None;
        }
        self.cells[Self::index(at)]
    }

    /// Re-attaches a saved occupant to `at`, reversing a [`Board::relocate`]
    /// that overwrote it. The saved record still carries this position.
    pub(crate) fn restore(&mut self, at: Point, occupant: Option<PieceId>) {
        debug_assert!(Self::is_on_board(at));
        self.cells[Self::index(at)] = occupant;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn place_and_query() {
        let mut board = Board::new();
        let e4 = Point::new(4, 3);
        let id = board.place(PieceKind::Queen, Color::White, e4).unwrap();
        assert_eq!(board.piece_at(e4).unwrap(), Some(id));
        assert_eq!(board.piece(id).kind(), PieceKind::Queen);
        assert_eq!(board.piece(id).color(), Color::White);
        assert_eq!(board.piece(id).position(), e4);
    }

    #[test]
    fn place_rejects_occupied_and_off_board() {
        let mut board = Board::new();
        let a1 = Point::new(0, 0);
        board.place(PieceKind::Rook, Color::White, a1).unwrap();
        assert_eq!(
            board.place(PieceKind::Rook, Color::Black, a1),
            Err(BoardError::InvalidPlacement(a1))
        );
        let off = Point::new(8, 0);
        assert_eq!(
            board.place(PieceKind::Rook, Color::White, off),
            Err(BoardError::InvalidPlacement(off))
        );
    }

    #[test]
    fn query_rejects_off_board() {
        let board = Board::new();
        let off = Point::new(-1, 4);
        assert_eq!(board.piece_at(off), Err(BoardError::OutOfBounds(off)));
    }

    #[test]
    fn remove_at_detaches() {
        let mut board = Board::new();
        let c3 = Point::new(2, 2);
        let id = board.place(PieceKind::Knight, Color::Black, c3).unwrap();
        assert_eq!(board.remove_at(c3), Some(id));
        assert_eq!(board.piece_at(c3).unwrap(), None);
        assert_eq!(board.remove_at(c3), None);
        assert_eq!(board.remove_at(Point::new(0, 9)), None);
    }

    #[test]
    fn relocate_moves_and_overwrites() {
        let mut board = Board::new();
        let a2 = Point::new(0, 1);
        let a7 = Point::new(0, 6);
        let rook = board.place(PieceKind::Rook, Color::White, a2).unwrap();
        let pawn = board.place(PieceKind::Pawn, Color::Black, a7).unwrap();

        board.relocate(a2, a7);
        assert_eq!(board.piece_at(a2).unwrap(), None);
        assert_eq!(board.piece_at(a7).unwrap(), Some(rook));
        assert_eq!(board.piece(rook).position(), a7);
        // The overwritten record survives in the arena.
        assert_eq!(board.piece(pawn).position(), a7);
    }

    proptest! {
        // Moving a piece out and back, then restoring the overwritten
        // occupant, must reproduce the exact prior board.
        #[test]
        fn relocate_round_trip(
            af in 0i8..8, ar in 0i8..8,
            bf in 0i8..8, br in 0i8..8,
            enemy in any::<bool>(),
        ) {
            let a = Point::new(af, ar);
            let b = Point::new(bf, br);
            prop_assume!(a != b);

            let mut board = Board::new();
            board.place(PieceKind::Rook, Color::White, a).unwrap();
            if enemy {
                board.place(PieceKind::Knight, Color::Black, b).unwrap();
            }
            let before = board.clone();

            let captured = board.occupant(b);
            board.relocate(a, b);
            board.relocate(b, a);
            board.restore(b, captured);

            prop_assert_eq!(board, before);
        }
    }
}
