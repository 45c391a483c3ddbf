//! Game engine: turn order, move legality, check and checkmate, and the
//! special-move bookkeeping for castling, en passant, and promotion.
//!
//! Legality is pseudo-legality plus a self-check filter: a candidate move is
//! played on the live board, the mover's king is tested for attack, and the
//! board is reverted bit-identically. Methods that run this simulation take
//! `&mut self` but always restore the state they found.

use crate::board::{Board, BoardError, PieceId};
use crate::movegen::pseudo_legal_moves;
use chess_core::{Color, PieceKind, Point};
use thiserror::Error;

/// Errors returned by [`Game::make_move`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The (start, finish) pair forms neither a legal ordinary move nor a
    /// castling move. Nothing was mutated.
    #[error("no legal move from {from} to {to}")]
    InvalidMove { from: Point, to: Point },

    /// The promotion chooser selected a kind a pawn cannot promote to.
    /// Nothing was mutated.
    #[error("a pawn cannot promote to {0}")]
    InvalidPromotion(PieceKind),
}

/// Castling availability: four independent flags, long/short per side.
///
/// Flags are monotonic; the engine only ever clears them. Returning a rook
/// or king to its home square does not restore a cleared flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const LONG_WHITE: CastlingRights = CastlingRights(1);
    pub const LONG_BLACK: CastlingRights = CastlingRights(2);
    pub const SHORT_WHITE: CastlingRights = CastlingRights(4);
    pub const SHORT_BLACK: CastlingRights = CastlingRights(8);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Returns the queenside flag for a side.
    #[inline]
    pub const fn long(color: Color) -> Self {
        match color {
            Color::White => Self::LONG_WHITE,
            Color::Black => Self::LONG_BLACK,
        }
    }

    /// Returns the kingside flag for a side.
    #[inline]
    pub const fn short(color: Color) -> Self {
        match color {
            Color::White => Self::SHORT_WHITE,
            Color::Black => Self::SHORT_BLACK,
        }
    }

    /// Returns true if every flag in `other` is still set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        CastlingRights(self.0 | other.0)
    }

    /// Clears the given flags.
    #[inline]
    pub fn clear(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

/// Ranks by file of the standard back-rank setup.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A chess game: board, per-side piece lists, and move-rule state.
///
/// The piece lists drive check and checkmate scans and stay in sync with the
/// board: a captured piece leaves its cell and its side's list in the same
/// operation. Kings sit in the lists too but are additionally referenced
/// directly, since they are never captured.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    pieces: [Vec<PieceId>; 2],
    kings: [PieceId; 2],
    turn: Color,
    castling: CastlingRights,
    /// The pawn, if any, that may be captured en passant. Valid only for the
    /// one move immediately following its double-step advance.
    en_passant: Option<PieceId>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with the standard starting position: all 32 pieces
    /// placed, all castling rights granted, White to move.
    pub fn new() -> Self {
        let mut board = Board::new();
        let mut pieces = [Vec::with_capacity(16), Vec::with_capacity(16)];
        let mut kings = [None, None];

        for color in [Color::White, Color::Black] {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let at = Point::new(file as i8, color.back_rank());
                let id = board
                    .place(kind, color, at)
                    .expect("starting squares are empty");
                if kind == PieceKind::King {
                    kings[color.index()] = Some(id);
                }
                pieces[color.index()].push(id);

                let pawn_at = Point::new(file as i8, color.home_rank());
                let pawn = board
                    .place(PieceKind::Pawn, color, pawn_at)
                    .expect("starting squares are empty");
                pieces[color.index()].push(pawn);
            }
        }

        Game {
            board,
            pieces,
            kings: [
                kings[0].expect("white king placed"),
                kings[1].expect("black king placed"),
            ],
            turn: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
        }
    }

    /// Returns the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the remaining castling rights.
    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the kind and side of the piece on `at`, for rendering.
    pub fn piece_on(&self, at: Point) -> Result<Option<(PieceKind, Color)>, BoardError> {
        let occupant = self.board.piece_at(at)?;
        Ok(occupant.map(|id| {
            let piece = self.board.piece(id);
            (piece.kind(), piece.color())
        }))
    }

    /// Returns the number of pieces a side still has on the board.
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces[color.index()].len()
    }

    /// Plays a move for the side to move.
    ///
    /// The pair is first tried as an ordinary move (pseudo-legal or
    /// en-passant capture, and not leaving the mover's king in check), then
    /// as a castling move expressed as the king travelling toward a rook.
    /// `promotion` is called when a pawn reaches its last rank and must pick
    /// one of queen, rook, bishop, or knight; it runs before any mutation,
    /// so a rejected choice leaves the game untouched. On success the turn
    /// flips; on failure nothing changes.
    pub fn make_move<F>(&mut self, start: Point, finish: Point, promotion: F) -> Result<(), MoveError>
    where
        F: FnOnce(Color) -> PieceKind,
    {
        if let Some(id) = self.legal_mover(start, finish) {
            let piece = self.board.piece(id);
            let kind = piece.kind();
            let color = piece.color();

            let promoted = if kind == PieceKind::Pawn && finish.rank == color.last_rank() {
                let choice = promotion(color);
                if matches!(choice, PieceKind::King | PieceKind::Pawn) {
                    return Err(MoveError::InvalidPromotion(choice));
                }
                Some(choice)
            } else {
                None
            };

            self.make_movement(id, start, finish);
            self.update_castling_rights(kind, color, start);
            if let Some(new_kind) = promoted {
                self.promote(id, new_kind, finish);
            }
        } else if !self.castle(start, finish) {
            return Err(MoveError::InvalidMove {
                from: start,
                to: finish,
            });
        }

        self.turn = self.turn.opposite();
        Ok(())
    }

    /// Returns true if `(start, finish)` is a legal ordinary move for the
    /// side to move. Probes only; the game is left exactly as found.
    pub fn can_move(&mut self, start: Point, finish: Point) -> bool {
        self.legal_mover(start, finish).is_some()
    }

    /// Returns the moves the piece on `at` can really make: its pseudo-legal
    /// set plus any en-passant capture, filtered by the self-check rule.
    /// Empty when the square is empty or holds an opponent piece.
    pub fn possible_moves_on_board(&mut self, at: Point) -> Vec<Point> {
        let Some(id) = self.board.occupant(at) else {
            return Vec::new();
        };

        let mut candidates = self.ordinary_candidates(id);
        candidates.retain(|&finish| self.can_move(at, finish));
        candidates
    }

    /// Returns every destination the piece could name in an ordinary move:
    /// its pseudo-legal set plus, for a pawn, any open en-passant capture.
    /// Not yet filtered by the self-check rule.
    fn ordinary_candidates(&self, id: PieceId) -> Vec<Point> {
        let mut candidates = pseudo_legal_moves(&self.board, id);
        let piece = self.board.piece(id);
        if piece.kind() == PieceKind::Pawn {
            for dx in [-1, 1] {
                let dest = piece.position().relative(piece.color(), dx, 1);
                if self.is_en_passant_capture(id, dest) {
                    candidates.push(dest);
                }
            }
        }
        candidates
    }

    /// Returns the winning side, if the side to move has been checkmated.
    ///
    /// A position with no legal moves but no check is not classified; only
    /// checkmate produces a winner.
    pub fn winner(&mut self) -> Option<Color> {
        if self.is_on_checkmate(Color::White) {
            Some(Color::Black)
        } else if self.is_on_checkmate(Color::Black) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Returns true if `side`'s king square is attacked by any opposing
    /// piece still on the board.
    pub fn is_on_check(&self, side: Color) -> bool {
        let king_square = self.board.piece(self.kings[side.index()]).position();
        self.is_attacked(king_square, side.opposite())
    }

    /// Returns true if `side` is in check and no move of any of its pieces
    /// resolves it. Tries king moves first, then every other piece's moves,
    /// simulating each until one escape is found.
    pub fn is_on_checkmate(&mut self, side: Color) -> bool {
        if !self.is_on_check(side) {
            return false;
        }

        let king = self.kings[side.index()];
        let king_square = self.board.piece(king).position();
        for finish in pseudo_legal_moves(&self.board, king) {
            if !self.leaves_in_check(side, king_square, finish) {
                return false;
            }
        }

        let list = self.pieces[side.index()].clone();
        for id in list {
            let start = self.board.piece(id).position();
            for finish in self.ordinary_candidates(id) {
                if !self.leaves_in_check(side, start, finish) {
                    return false;
                }
            }
        }

        true
    }

    /// Returns the castlings still performable by `side` right now: right
    /// intact, rook on its home square, the squares between king and rook
    /// empty, and no square the king stands on, crosses, or lands on
    /// attacked.
    pub fn possible_castlings(&self, side: Color) -> CastlingRights {
        let rank = side.back_rank();
        let enemy = side.opposite();
        let empty = |file: i8| self.board.occupant(Point::new(file, rank)).is_none();
        let safe = |file: i8| !self.is_attacked(Point::new(file, rank), enemy);

        let mut result = CastlingRights::NONE;
        if self.castling.contains(CastlingRights::long(side))
            && self.rook_at_home(side, 0)
            && [1, 2, 3].into_iter().all(&empty)
            && [4, 3, 2].into_iter().all(&safe)
        {
            result = result.union(CastlingRights::long(side));
        }
        if self.castling.contains(CastlingRights::short(side))
            && self.rook_at_home(side, 7)
            && [5, 6].into_iter().all(&empty)
            && [4, 5, 6].into_iter().all(&safe)
        {
            result = result.union(CastlingRights::short(side));
        }
        result
    }

    /// Finds the mover for a legal ordinary move, or `None` if any legality
    /// condition fails: occupant missing or not the side to move, finish
    /// neither pseudo-legal nor an en-passant capture, or the move leaving
    /// the mover's own king in check.
    fn legal_mover(&mut self, start: Point, finish: Point) -> Option<PieceId> {
        if !Board::is_on_board(start) || !Board::is_on_board(finish) {
            return None;
        }
        let id = self.board.occupant(start)?;
        if self.board.piece(id).color() != self.turn {
            return None;
        }
        let reachable = pseudo_legal_moves(&self.board, id).contains(&finish)
            || self.is_en_passant_capture(id, finish);
        if reachable && !self.leaves_in_check(self.turn, start, finish) {
            Some(id)
        } else {
            None
        }
    }

    /// Plays the move on the live board, answers whether `side`'s king is
    /// then in check, and reverts. The board afterwards is bit-identical to
    /// the board before, including any piece captured by the trial move.
    ///
    /// An en-passant trial also lifts the marker pawn off its cell, since
    /// the capture removes a piece from a square other than `finish`.
    fn leaves_in_check(&mut self, side: Color, start: Point, finish: Point) -> bool {
        let ep_square = self
            .board
            .occupant(start)
            .filter(|&id| self.is_en_passant_capture(id, finish))
            .and_then(|_| self.en_passant)
            .map(|victim| self.board.piece(victim).position());
        let ep_lifted = ep_square.map(|square| (square, self.board.remove_at(square)));

        let captured = self.board.occupant(finish);
        self.board.relocate(start, finish);
        let check = self.is_on_check(side);
        self.board.relocate(finish, start);
        self.board.restore(finish, captured);
        if let Some((square, occupant)) = ep_lifted {
            self.board.restore(square, occupant);
        }
        check
    }

    /// Returns true if any of `by`'s pieces attacks `target`.
    ///
    /// Pawns are tested by their two diagonal-forward squares (their
    /// pseudo-legal set only captures onto occupied squares, which would
    /// hide attacks on empty castling-transit squares); every other kind is
    /// tested by pseudo-legal containment. Pieces whose cell no longer
    /// references them (captured in the surrounding simulation) do not
    /// attack.
    fn is_attacked(&self, target: Point, by: Color) -> bool {
        self.pieces[by.index()].iter().any(|&id| {
            let piece = self.board.piece(id);
            if self.board.occupant(piece.position()) != Some(id) {
                return false;
            }
            match piece.kind() {
                PieceKind::Pawn => {
                    target == piece.position().relative(by, 1, 1)
                        || target == piece.position().relative(by, -1, 1)
                }
                _ => pseudo_legal_moves(&self.board, id).contains(&target),
            }
        })
    }

    /// Returns true if the move is an en-passant capture: the mover is a
    /// pawn stepping diagonally forward onto the square directly behind an
    /// enemy pawn that double-stepped on the previous ply.
    fn is_en_passant_capture(&self, id: PieceId, finish: Point) -> bool {
        let Some(marker) = self.en_passant else {
            return false;
        };
        let mover = self.board.piece(id);
        if mover.kind() != PieceKind::Pawn {
            return false;
        }
        let victim = self.board.piece(marker);
        if victim.color() == mover.color() {
            return false;
        }
        finish == victim.position().relative(victim.color(), 0, -1)
            && (finish == mover.position().relative(mover.color(), 1, 1)
                || finish == mover.position().relative(mover.color(), -1, 1))
    }

    /// Executes a validated ordinary move: capture bookkeeping (en passant
    /// resolved against the previous ply's marker), marker renewal, then the
    /// board relocation.
    fn make_movement(&mut self, id: PieceId, start: Point, finish: Point) {
        let mover = self.board.piece(id);
        let double_step =
            mover.kind() == PieceKind::Pawn && finish == start.relative(mover.color(), 0, 2);

        if self.is_en_passant_capture(id, finish) {
            if let Some(victim) = self.en_passant {
                let square = self.board.piece(victim).position();
                self.board.remove_at(square);
                self.remove_from_list(victim);
            }
        } else if let Some(captured) = self.board.occupant(finish) {
            self.remove_from_list(captured);
        }

        self.en_passant = if double_step { Some(id) } else { None };
        self.board.relocate(start, finish);
    }

    /// Drops a captured piece from its side's list. Its cell is cleared by
    /// the caller in the same operation.
    fn remove_from_list(&mut self, id: PieceId) {
        let color = self.board.piece(id).color();
        self.pieces[color.index()].retain(|&other| other != id);
    }

    /// Revokes castling rights after a king or rook leaves its home file.
    fn update_castling_rights(&mut self, kind: PieceKind, color: Color, start: Point) {
        match kind {
            PieceKind::Rook => {
                if start.file == 0 {
                    self.castling.clear(CastlingRights::long(color));
                }
                if start.file == 7 {
                    self.castling.clear(CastlingRights::short(color));
                }
            }
            PieceKind::King => {
                self.castling.clear(CastlingRights::long(color));
                self.castling.clear(CastlingRights::short(color));
            }
            _ => {}
        }
    }

    /// Replaces a promoted pawn with its chosen piece at `at`. The choice
    /// was validated before any mutation.
    fn promote(&mut self, pawn: PieceId, new_kind: PieceKind, at: Point) {
        let color = self.board.piece(pawn).color();
        self.board.remove_at(at);
        self.remove_from_list(pawn);
        let id = self
            .board
            .place(new_kind, color, at)
            .expect("promotion square was just vacated");
        self.pieces[color.index()].push(id);
    }

    /// Tries `(start, finish)` as a castling move: the occupant of `start`
    /// must be the moving side's king, and `finish` selects the wing (file
    /// <= 2 queenside, file >= 6 kingside). On success king and rook take
    /// their castled squares, the side's rights are spent, the en-passant
    /// window closes, and true is returned; otherwise nothing changes.
    fn castle(&mut self, start: Point, finish: Point) -> bool {
        if !Board::is_on_board(start) || !Board::is_on_board(finish) {
            return false;
        }
        let Some(id) = self.board.occupant(start) else {
            return false;
        };
        let piece = self.board.piece(id);
        if piece.kind() != PieceKind::King || piece.color() != self.turn {
            return false;
        }

        let side = self.turn;
        let rank = side.back_rank();
        let available = self.possible_castlings(side);

        if finish.file <= 2 && available.contains(CastlingRights::long(side)) {
            self.board.relocate(start, Point::new(2, rank));
            self.board.relocate(Point::new(0, rank), Point::new(3, rank));
        } else if finish.file >= 6 && available.contains(CastlingRights::short(side)) {
            self.board.relocate(start, Point::new(6, rank));
            self.board.relocate(Point::new(7, rank), Point::new(5, rank));
        } else {
            return false;
        }

        self.castling.clear(CastlingRights::long(side));
        self.castling.clear(CastlingRights::short(side));
        self.en_passant = None;
        true
    }

    /// Returns true if `side`'s rook stands on its home square on the given
    /// file. A rook captured at home leaves the right formally intact but
    /// the castle unplayable.
    fn rook_at_home(&self, side: Color, file: i8) -> bool {
        self.board
            .occupant(Point::new(file, side.back_rank()))
            .is_some_and(|id| {
                let piece = self.board.piece(id);
                piece.kind() == PieceKind::Rook && piece.color() == side
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(file: i8, rank: i8) -> Point {
        Point::new(file, rank)
    }

    fn no_promotion(_: Color) -> PieceKind {
        unreachable!("move does not promote")
    }

    #[test]
    fn starting_position() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.piece_count(Color::White), 16);
        assert_eq!(game.piece_count(Color::Black), 16);
        assert!(!game.is_on_check(Color::White));
        assert!(!game.is_on_check(Color::Black));
        assert_eq!(game.castling_rights(), CastlingRights::ALL);
        assert_eq!(
            game.piece_on(p(4, 0)).unwrap(),
            Some((PieceKind::King, Color::White))
        );
        assert_eq!(
            game.piece_on(p(3, 7)).unwrap(),
            Some((PieceKind::Queen, Color::Black))
        );
        assert_eq!(game.piece_on(p(4, 4)).unwrap(), None);
    }

    #[test]
    fn no_winner_at_start() {
        let mut game = Game::new();
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn piece_on_rejects_off_board() {
        let game = Game::new();
        let off = p(9, 9);
        assert_eq!(game.piece_on(off), Err(BoardError::OutOfBounds(off)));
    }

    #[test]
    fn accepted_move_flips_turn() {
        let mut game = Game::new();
        game.make_move(p(4, 1), p(4, 3), no_promotion).unwrap();
        assert_eq!(game.turn(), Color::Black);
        game.make_move(p(4, 6), p(4, 4), no_promotion).unwrap();
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn rejected_move_preserves_turn() {
        let mut game = Game::new();
        let err = game.make_move(p(4, 1), p(4, 5), no_promotion).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidMove {
                from: p(4, 1),
                to: p(4, 5)
            }
        );
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn cannot_move_opponent_piece() {
        let mut game = Game::new();
        assert!(game.make_move(p(4, 6), p(4, 4), no_promotion).is_err());
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn cannot_move_empty_square() {
        let mut game = Game::new();
        assert!(game.make_move(p(4, 3), p(4, 4), no_promotion).is_err());
    }

    #[test]
    fn capture_updates_piece_list() {
        let mut game = Game::new();
        // 1.e4 d5 2.exd5
        game.make_move(p(4, 1), p(4, 3), no_promotion).unwrap();
        game.make_move(p(3, 6), p(3, 4), no_promotion).unwrap();
        game.make_move(p(4, 3), p(3, 4), no_promotion).unwrap();
        assert_eq!(game.piece_count(Color::Black), 15);
        assert_eq!(
            game.piece_on(p(3, 4)).unwrap(),
            Some((PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn move_resolving_check_is_required() {
        let mut game = Game::new();
        // 1.e4 d5 2.exd5 Nf6 3.Bb5+ and Black must address the check.
        game.make_move(p(4, 1), p(4, 3), no_promotion).unwrap();
        game.make_move(p(3, 6), p(3, 4), no_promotion).unwrap();
        game.make_move(p(4, 3), p(3, 4), no_promotion).unwrap();
        game.make_move(p(6, 7), p(5, 5), no_promotion).unwrap();
        game.make_move(p(5, 0), p(1, 4), no_promotion).unwrap();
        assert!(game.is_on_check(Color::Black));
        assert!(!game.is_on_checkmate(Color::Black));

        // A knight sortie ignores the check and is rejected.
        assert!(game.make_move(p(5, 5), p(3, 4), no_promotion).is_err());
        // Blocking on c6 is accepted.
        game.make_move(p(1, 7), p(2, 5), no_promotion).unwrap();
        assert!(!game.is_on_check(Color::Black));
    }

    #[test]
    fn possible_moves_of_starting_pawn_and_knight() {
        let mut game = Game::new();
        let mut pawn = game.possible_moves_on_board(p(4, 1));
        pawn.sort_by_key(|m| (m.file, m.rank));
        assert_eq!(pawn, vec![p(4, 2), p(4, 3)]);

        let mut knight = game.possible_moves_on_board(p(1, 0));
        knight.sort_by_key(|m| (m.file, m.rank));
        assert_eq!(knight, vec![p(0, 2), p(2, 2)]);

        // A blocked bishop has nowhere to go; an empty square yields nothing.
        assert!(game.possible_moves_on_board(p(2, 0)).is_empty());
        assert!(game.possible_moves_on_board(p(4, 4)).is_empty());
    }

    #[test]
    fn possible_moves_empty_for_side_not_to_move() {
        let mut game = Game::new();
        assert!(game.possible_moves_on_board(p(4, 6)).is_empty());
    }

    #[test]
    fn probing_legality_leaves_state_untouched() {
        let mut game = Game::new();
        assert!(game.can_move(p(4, 1), p(4, 3)));
        assert!(!game.can_move(p(4, 1), p(4, 5)));
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.piece_count(Color::White), 16);
        assert_eq!(
            game.piece_on(p(4, 1)).unwrap(),
            Some((PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn moving_king_revokes_both_rights() {
        let mut game = Game::new();
        // 1.e4 e5 2.Ke2
        game.make_move(p(4, 1), p(4, 3), no_promotion).unwrap();
        game.make_move(p(4, 6), p(4, 4), no_promotion).unwrap();
        game.make_move(p(4, 0), p(4, 1), no_promotion).unwrap();
        assert!(!game
            .castling_rights()
            .contains(CastlingRights::SHORT_WHITE));
        assert!(!game.castling_rights().contains(CastlingRights::LONG_WHITE));
        assert!(game.castling_rights().contains(CastlingRights::SHORT_BLACK));
        assert!(game.castling_rights().contains(CastlingRights::LONG_BLACK));
    }

    #[test]
    fn moving_rook_revokes_matching_right() {
        let mut game = Game::new();
        // 1.h4 h5 2.Rh3
        game.make_move(p(7, 1), p(7, 3), no_promotion).unwrap();
        game.make_move(p(7, 6), p(7, 4), no_promotion).unwrap();
        game.make_move(p(7, 0), p(7, 2), no_promotion).unwrap();
        assert!(!game
            .castling_rights()
            .contains(CastlingRights::SHORT_WHITE));
        assert!(game.castling_rights().contains(CastlingRights::LONG_WHITE));
    }

    #[test]
    fn rights_are_monotonic() {
        let mut rights = CastlingRights::ALL;
        rights.clear(CastlingRights::SHORT_WHITE);
        assert!(!rights.contains(CastlingRights::SHORT_WHITE));
        assert!(rights.contains(CastlingRights::LONG_WHITE));
        rights.clear(CastlingRights::SHORT_WHITE);
        assert!(!rights.contains(CastlingRights::SHORT_WHITE));
        assert_eq!(
            rights,
            CastlingRights::LONG_WHITE
                .union(CastlingRights::LONG_BLACK)
                .union(CastlingRights::SHORT_BLACK)
        );
    }

    #[test]
    fn no_castlings_available_at_start() {
        let game = Game::new();
        assert_eq!(game.possible_castlings(Color::White), CastlingRights::NONE);
        assert_eq!(game.possible_castlings(Color::Black), CastlingRights::NONE);
    }
}
