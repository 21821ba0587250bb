//! World module
//!
//! The room grid, its cell types, and procedural generation.

pub mod generation;
pub mod grid;
pub mod room;

pub use grid::Grid;
pub use room::{Direction, Passages, Room, RoomType};
