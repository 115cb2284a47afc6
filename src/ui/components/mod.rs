//! UI Components
//!
//! GTK4 widgets for the memory game.
//!
//! # Components
//!
//! - `card_tile.rs` - A single clickable card
//! - `board_grid.rs` - Grid of card tiles; the Controller's renderer

mod board_grid;
mod card_tile;

pub use board_grid::{grid_cell, BoardGrid};
pub use card_tile::{face_class, CardTile, TILE_MARGIN};
