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

//! Card tile component
//!
//! One clickable cell of the board. The tile only knows its index and
//! identity colour; it forwards clicks through a registered callback and
//! redraws itself when told to.
//!
//! # Styling
//!
//! ```text
//! .card-tile              every tile
//! .face-rrggbb            identity colour (rule generated by BoardGrid)
//! .hidden | .revealed | .matched   current state
//! ```

use gtk4::prelude::*;
use gtk4::Button;

use crate::core::{Card, CardState, Rgba};

/// Margin around each tile, in pixels
pub const TILE_MARGIN: i32 = 4;

const STATE_CLASSES: [&str; 3] = ["hidden", "revealed", "matched"];

/// A single card widget
pub struct CardTile {
    /// Root widget
    widget: Button,
    /// Column-major board index
    index: usize,
}

impl CardTile {
    /// Creates a face-down tile
    ///
    /// # Arguments
    ///
    /// * `index` - Column-major board index reported on click
    /// * `color` - Identity colour, used for the face CSS class
    pub fn new(index: usize, color: Rgba) -> Self {
        let widget = Button::builder()
            .hexpand(true)
            .vexpand(true)
            .margin_start(TILE_MARGIN)
            .margin_end(TILE_MARGIN)
            .margin_top(TILE_MARGIN)
            .margin_bottom(TILE_MARGIN)
            .focus_on_click(false)
            .build();

        widget.add_css_class("card-tile");
        widget.add_css_class(&face_class(color));
        widget.add_css_class("hidden");

        Self { widget, index }
    }

    /// Registers the card-selected callback
    ///
    /// The callback receives this tile's board index.
    pub fn connect_selected<F>(&self, callback: F)
    where
        F: Fn(usize) + 'static,
    {
        let index = self.index;
        self.widget.connect_clicked(move |_| callback(index));
    }

    /// Swaps the state class to match `card`
    ///
    /// Matched tiles become insensitive and stay that way.
    pub fn render(&self, card: &Card) {
        for class in STATE_CLASSES {
            self.widget.remove_css_class(class);
        }
        self.widget.add_css_class(state_class(card.state()));
        self.widget.set_sensitive(!card.is_matched());
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn widget(&self) -> &Button {
        &self.widget
    }
}

/// CSS class naming an identity colour
pub fn face_class(color: Rgba) -> String {
    format!("face-{}", color.to_hex())
}

fn state_class(state: CardState) -> &'static str {
    match state {
        CardState::Hidden => "hidden",
        CardState::Revealed => "revealed",
        CardState::Matched => "matched",
    }
}
