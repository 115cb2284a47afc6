// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Memory Game
//!
//! A colour-matching concentration game with a GTK4 GUI. Cards are dealt
//! face down; reveal two at a time, matching colours stay up, mismatches
//! flip back after a short delay.
//!
//! # Architecture
//!
//! - **`core`:** Game rules (cards, colour pairing, board, selection)
//! - **`config`:** Board size, reveal delay, seed policy, window size
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Playing a turn without the GUI
//!
//! ```
//! use memory_game::core::{Board, SelectOutcome};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let mut board = Board::new(2, 1, &mut rng)?;
//!
//! board.select(0);
//! assert_eq!(board.select(1), SelectOutcome::PairComplete);
//!
//! let resolution = board.resolve_pending().expect("pair is pending");
//! assert!(resolution.is_match());
//! # Ok::<(), memory_game::core::BoardError>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use memory_game::config::GameConfig;
//! use memory_game::ui::App;
//!
//! let app = App::new(GameConfig::default())?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), memory_game::config::ConfigError>(())
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Board, Card, CardState, Rgba};
