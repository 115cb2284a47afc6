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

//! src/core/types.rs
//!
//! Core type definitions for the memory game
//!
//! - `Rgba`: The identity colour hidden behind a card
//! - `CardState`: Hidden, Revealed or Matched
//! - `Card`: A single grid cell combining both
//!
//! Colours are stored as bytes so they can be hashed and compared exactly,
//! which the pairing invariant (every colour exactly twice) relies on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit RGBA colour
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Creates a fully opaque colour
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    /// Lowercase `rrggbb` hex string (alpha omitted)
    ///
    /// Used for CSS class names and the `deal` listing.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Visible state of a card
///
/// ```text
/// Hidden ──select──▶ Revealed ──mismatch──▶ Hidden
///                       │
///                       └──match──▶ Matched (terminal)
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum CardState {
    /// Face down
    #[default]
    Hidden,
    /// Face up, waiting for evaluation
    Revealed,
    /// Paired with its twin; never changes again
    Matched,
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardState::Hidden => write!(f, "hidden"),
            CardState::Revealed => write!(f, "revealed"),
            CardState::Matched => write!(f, "matched"),
        }
    }
}

/// A single card on the board
///
/// Cards are owned by [`Board`](crate::core::Board) and only mutated
/// through it. Transitions out of `Matched` are ignored.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Card {
    color: Rgba,
    state: CardState,
}

impl Card {
    /// Creates a face-down card with the given identity colour
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            state: CardState::Hidden,
        }
    }

    /// Turns the card face up
    pub fn reveal(&mut self) {
        if !self.is_matched() {
            self.state = CardState::Revealed;
        }
    }

    /// Turns the card face down again
    pub fn hide(&mut self) {
        if !self.is_matched() {
            self.state = CardState::Hidden;
        }
    }

    /// Marks the card as matched (terminal)
    pub fn mark_matched(&mut self) {
        self.state = CardState::Matched;
    }

    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    pub fn is_revealed(&self) -> bool {
        self.state == CardState::Revealed
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// The colour two cards must share to match
    pub fn identity_color(&self) -> Rgba {
        self.color
    }
}
