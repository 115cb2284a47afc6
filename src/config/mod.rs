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

//! Game configuration
//!
//! Holds the few knobs the game has: board size, reveal delay, seed policy
//! and window size. Board size is a constructor parameter only; the GUI
//! always starts with the defaults.
//!
//! # Seed policy
//!
//! The random generator is built here and handed to the board, never kept
//! in a global. With `seed` set every deal is reproducible; without it the
//! generator is seeded from the operating system.
//!
//! # Example
//!
//! ```
//! use memory_game::config::GameConfig;
//!
//! let config = GameConfig::default().with_seed(1);
//! let board = config.build_board()?;
//! assert_eq!(board.len(), 30);
//! # Ok::<(), memory_game::config::ConfigError>(())
//! ```

mod error;

pub use error::ConfigError;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::board::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::core::Board;

/// Delay between revealing a pair and evaluating it
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1_000;

/// Default window width in logical pixels
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;

/// Default window height in logical pixels
pub const DEFAULT_WINDOW_HEIGHT: i32 = 640;

/// Settings used to deal a board and build the window
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameConfig {
    /// Number of card columns
    pub columns: usize,
    /// Number of card rows
    pub rows: usize,
    /// Milliseconds a revealed pair stays face up before evaluation
    pub reveal_delay_ms: u64,
    /// Fixed seed for a reproducible deal (OS entropy when `None`)
    pub seed: Option<u64>,
    /// Window width
    pub window_width: i32,
    /// Window height
    pub window_height: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            seed: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Default settings with a custom board size
    pub fn with_dimensions(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Returns a copy using a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks board and window dimensions
    ///
    /// # Errors
    ///
    /// * `ConfigError::Board` - empty board or odd cell count
    /// * `ConfigError::InvalidWindowSize` - zero or negative window side
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::check_dimensions(self.columns, self.rows)?;

        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }

        Ok(())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Builds the random generator according to the seed policy
    pub fn build_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Validates the configuration and deals a board
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        self.validate()?;

        let mut rng = self.build_rng();
        Ok(Board::new(self.columns, self.rows, &mut rng)?)
    }
}

#[cfg(test)]
mod tests;
