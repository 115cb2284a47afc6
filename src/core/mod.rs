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

//! src/core/mod.rs
//!
//! Core game logic
//!
//! This module contains the data structures and rules of the game:
//! - Type definitions for cards and colours
//! - Colour pair generation with an injected random generator
//! - The board: dealing, selection and pair evaluation
//!
//! Everything here is free of GTK and timers so it can be unit tested
//! without a display server.

pub mod board;
pub mod palette;
pub mod types;

pub use board::{Board, BoardError, IgnoreReason, Resolution, SelectOutcome, PAIR_SIZE};
pub use types::*;

#[cfg(test)]
mod tests;
