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

//! Board grid component
//!
//! Lays the card tiles out in a homogeneous GTK Grid and acts as the
//! Controller's renderer.
//!
//! # Layout
//!
//! ```text
//! ┌────┬────┬────┬────┬────┬────┐
//! │  0 │  5 │ 10 │ 15 │ 20 │ 25 │
//! ├────┼────┼────┼────┼────┼────┤
//! │  1 │  6 │ 11 │ 16 │ 21 │ 26 │
//! ├────┼────┼────┼────┼────┼────┤
//! │ .. │ .. │ .. │ .. │ .. │ .. │
//! └────┴────┴────┴────┴────┴────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use memory_game::config::GameConfig;
//! use memory_game::ui::{components::BoardGrid, GameController};
//!
//! let controller = GameController::from_config(&GameConfig::default())
//!     .expect("Failed to create controller");
//!
//! let grid = BoardGrid::new(&controller);
//! // vbox.append(grid.widget());
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, CssProvider, Grid};
use std::collections::HashSet;
use std::rc::Rc;

use crate::core::{Card, Rgba};
use crate::ui::components::card_tile::{face_class, CardTile};
use crate::ui::controller::{BoardRenderer, GameController};

/// Grid of card tiles
pub struct BoardGrid {
    /// Root widget
    widget: Grid,
    /// Tiles in column-major order
    tiles: Vec<CardTile>,
    /// Per-colour face rules, kept alive with the grid
    palette: CssProvider,
}

impl BoardGrid {
    /// Builds the grid and attaches it to the Controller as renderer
    ///
    /// Tile clicks go to `controller.handle_selection`. Closures hold a
    /// weak reference so the Controller and the grid don't keep each
    /// other alive.
    pub fn new(controller: &Rc<GameController>) -> Rc<Self> {
        let widget = Grid::builder()
            .row_homogeneous(true)
            .column_homogeneous(true)
            .hexpand(true)
            .vexpand(true)
            .build();
        widget.add_css_class("board");

        let rows = controller.rows();
        let cards = controller.cards();
        let mut tiles = Vec::with_capacity(cards.len());

        for (index, card) in cards.iter().enumerate() {
            let tile = CardTile::new(index, card.identity_color());
            // Tiles stay index-aligned with the board even if one can't be placed
            match grid_cell(index, rows) {
                Some((col, row)) => widget.attach(tile.widget(), col, row, 1, 1),
                None => eprintln!("⚠ Card {} lies outside the grid coordinate range; not shown", index),
            }

            let controller_weak = Rc::downgrade(controller);
            tile.connect_selected(move |selected| {
                if let Some(controller) = controller_weak.upgrade() {
                    controller.handle_selection(selected);
                }
            });

            tiles.push(tile);
        }

        let palette = CssProvider::new();
        palette.load_from_string(&palette_css(&cards));
        if let Some(display) = gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &palette,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION + 1,
            );
        } else {
            eprintln!("⚠ No display available; card faces will not be coloured");
        }

        let grid = Rc::new(Self {
            widget,
            tiles,
            palette,
        });

        controller.attach_renderer(grid.clone());
        grid
    }

    pub fn widget(&self) -> &Grid {
        &self.widget
    }

    /// Stylesheet holding the face colour rules
    pub fn palette(&self) -> &CssProvider {
        &self.palette
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

impl BoardRenderer for BoardGrid {
    fn render_card(&self, index: usize, card: &Card) {
        if let Some(tile) = self.tiles.get(index) {
            tile.render(card);
        }
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.widget.set_can_target(enabled);
    }
}

/// Grid `(column, row)` of a column-major card index
///
/// `None` when `rows` is zero or a coordinate does not fit GTK's `i32`.
pub fn grid_cell(index: usize, rows: usize) -> Option<(i32, i32)> {
    let col = index.checked_div(rows)?;
    let row = index.checked_rem(rows)?;
    Some((i32::try_from(col).ok()?, i32::try_from(row).ok()?))
}

/// One CSS rule per distinct identity colour, applied while revealed
fn palette_css(cards: &[Card]) -> String {
    let colors: HashSet<Rgba> = cards.iter().map(Card::identity_color).collect();

    colors
        .into_iter()
        .map(|color| {
            format!(
                ".card-tile.revealed.{} {{ background-image: none; background-color: {}; }}\n",
                face_class(color),
                color
            )
        })
        .collect()
}
