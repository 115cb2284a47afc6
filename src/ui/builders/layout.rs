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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::ui::{components::BoardGrid, GameController};
use gtk4::{prelude::*, Box as GtkBox, Button, Orientation};
use std::rc::Rc;

/// Minimum size of the padding regions around the board, in pixels
pub const PADDING: i32 = 50;

/// Widgets the app needs after the layout is built
pub struct MainLayout {
    /// Root container for the window
    pub root: GtkBox,
    /// The board (also attached to the Controller as renderer)
    pub board_grid: Rc<BoardGrid>,
    /// "New Game" button in the bottom bar
    pub new_game_button: Button,
}

/// Builds the main application layout
///
/// A border layout:
///
/// ```text
/// ┌──────────────────────────────┐
/// │            top               │
/// ├──────┬────────────────┬──────┤
/// │ left │     board      │ right│
/// ├──────┴────────────────┴──────┤
/// │ [New Game]    bottom         │
/// └──────────────────────────────┘
/// ```
///
/// Top, left and right are empty padding regions.
pub fn build_main_layout(controller: &Rc<GameController>) -> MainLayout {
    let root = GtkBox::new(Orientation::Vertical, 0);

    // TOP: empty padding
    root.append(&padding_region(Orientation::Horizontal));

    // CENTER: left padding, board, right padding
    let center = GtkBox::new(Orientation::Horizontal, 0);
    center.set_vexpand(true);

    center.append(&padding_region(Orientation::Vertical));

    let board_grid = BoardGrid::new(controller);
    center.append(board_grid.widget());

    center.append(&padding_region(Orientation::Vertical));
    root.append(&center);

    // BOTTOM: restart button
    let bottom = padding_region(Orientation::Horizontal);
    let new_game_button = Button::builder()
        .label("New Game")
        .valign(gtk4::Align::Center)
        .build();
    bottom.append(&new_game_button);
    root.append(&bottom);

    MainLayout {
        root,
        board_grid,
        new_game_button,
    }
}

fn padding_region(orientation: Orientation) -> GtkBox {
    let region = GtkBox::new(orientation, 0);
    region.add_css_class("padding");

    match orientation {
        Orientation::Vertical => region.set_size_request(PADDING, -1),
        _ => region.set_size_request(-1, PADDING),
    }

    region
}
