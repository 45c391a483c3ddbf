//! Core types for chess.
//!
//! This crate provides the fundamental types shared across the rules engine:
//! - [`Color`] for the two sides
//! - [`PieceKind`] for the six piece types
//! - [`Point`] for board coordinates

mod color;
mod piece;
mod point;

pub use color::Color;
pub use piece::PieceKind;
pub use point::Point;
