//! Pseudo-legal move generation.
//!
//! A pseudo-legal move satisfies a piece's movement geometry and occupancy
//! rules while ignoring whether it leaves the mover's own king in check; the
//! game layer filters for that. Move sets are recomputed on demand since the
//! board changes every ply.
//!
//! Two primitives cover all six kinds: a single [`step`] to an offset square
//! gated by an occupancy rule (pawn, knight, king), and a [`slide`] along
//! rays until blocked (bishop, rook, queen). En-passant captures and castling
//! are not pseudo-legal moves; both are resolved by the game layer, which
//! owns the history they depend on.

use crate::board::{Board, Piece, PieceId};
use chess_core::{PieceKind, Point};

/// Occupancy requirement for a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepRule {
    /// The destination must be empty.
    EmptyOnly,
    /// The destination must hold an enemy piece.
    CaptureOnly,
    /// The destination must be empty or hold an enemy piece.
    EmptyOrCapture,
}

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Computes the pseudo-legal destination squares for the given piece.
pub fn pseudo_legal_moves(board: &Board, id: PieceId) -> Vec<Point> {
    let piece = board.piece(id);
    let mut moves = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, piece, &mut moves),
        PieceKind::Knight => {
            for &(dx, dy) in &KNIGHT_JUMPS {
                step(
                    board,
                    piece,
                    piece.position().offset(dx, dy),
                    StepRule::EmptyOrCapture,
                    &mut moves,
                );
            }
        }
        PieceKind::Bishop => slide(board, piece, &DIAGONALS, &mut moves),
        PieceKind::Rook => slide(board, piece, &ORTHOGONALS, &mut moves),
        PieceKind::Queen => {
            slide(board, piece, &ORTHOGONALS, &mut moves);
            slide(board, piece, &DIAGONALS, &mut moves);
        }
        PieceKind::King => {
            for &(dx, dy) in &KING_STEPS {
                step(
                    board,
                    piece,
                    piece.position().offset(dx, dy),
                    StepRule::EmptyOrCapture,
                    &mut moves,
                );
            }
        }
    }
    moves
}

/// Pawn moves are side-relative: one square forward onto an empty cell, two
/// from the home rank when the single step itself stood, and the two
/// diagonal-forward captures. The en-passant square is deliberately absent.
fn pawn_moves(board: &Board, piece: &Piece, moves: &mut Vec<Point>) {
    let color = piece.color();
    let from = piece.position();

    let single = step(
        board,
        piece,
        from.relative(color, 0, 1),
        StepRule::EmptyOnly,
        moves,
    );
    if single && from.rank == color.home_rank() {
        step(
            board,
            piece,
            from.relative(color, 0, 2),
            StepRule::EmptyOnly,
            moves,
        );
    }

    step(
        board,
        piece,
        from.relative(color, 1, 1),
        StepRule::CaptureOnly,
        moves,
    );
    step(
        board,
        piece,
        from.relative(color, -1, 1),
        StepRule::CaptureOnly,
        moves,
    );
}

/// Validates a single-step destination and records it if it passes.
/// Returns whether the step was valid.
fn step(board: &Board, piece: &Piece, dest: Point, rule: StepRule, moves: &mut Vec<Point>) -> bool {
    if !Board::is_on_board(dest) {
        return false;
    }
    let valid = match board.occupant(dest) {
        None => matches!(rule, StepRule::EmptyOnly | StepRule::EmptyOrCapture),
        Some(other) => {
            board.piece(other).color() != piece.color()
                && matches!(rule, StepRule::CaptureOnly | StepRule::EmptyOrCapture)
        }
    };
    if valid {
        moves.push(dest);
    }
    valid
}

/// Walks each ray from the piece's square: empty squares are included and the
/// walk continues, an enemy square is included and stops it, a friendly
/// square stops it unincluded.
fn slide(board: &Board, piece: &Piece, directions: &[(i8, i8)], moves: &mut Vec<Point>) {
    for &(dx, dy) in directions {
        let mut dest = piece.position().offset(dx, dy);
        while Board::is_on_board(dest) {
            match board.occupant(dest) {
                None => moves.push(dest),
                Some(other) => {
                    if board.piece(other).color() != piece.color() {
                        moves.push(dest);
                    }
                    break;
                }
            }
            dest = dest.offset(dx, dy);
        }
    }
}
