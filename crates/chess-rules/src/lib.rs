//! Chess rules engine with a mailbox board representation.
//!
//! This crate provides:
//! - [`Board`] - an 8x8 grid of cells over an arena of piece records
//! - Pseudo-legal move generation per piece kind ([`pseudo_legal_moves`])
//! - [`Game`] - turn order, move legality, check/checkmate detection, and
//!   the special-move rules (castling, en passant, promotion)
//!
//! # Architecture
//!
//! Move legality is layered: each piece kind computes its pseudo-legal
//! destinations from geometry and occupancy alone, and the game filters
//! those by simulating the move on the live board and rejecting anything
//! that leaves the mover's own king in check. The simulation reuses the
//! board's raw relocation primitive in both directions and restores the
//! position bit-identically.
//!
//! Input parsing and rendering are external collaborators: callers supply
//! board coordinates and query the game for state to display.
//!
//! # Example
//!
//! ```
//! use chess_core::{PieceKind, Point};
//! use chess_rules::Game;
//!
//! let mut game = Game::new();
//! // 1.e4
//! game.make_move(Point::new(4, 1), Point::new(4, 3), |_| PieceKind::Queen)
//!     .unwrap();
//! assert_eq!(game.winner(), None);
//! ```

mod board;
mod game;
pub mod movegen;

pub use board::{Board, BoardError, Piece, PieceId};
pub use game::{CastlingRights, Game, MoveError};
pub use movegen::pseudo_legal_moves;
