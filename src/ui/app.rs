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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. The board is dealt before the main loop starts, so a
//! bad configuration fails at startup rather than inside the window.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates GameController (deals the board)
//!   ├─ Builds main window (border layout)
//!   └─ Connects the board grid and New Game button to the Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;

use crate::config::{ConfigError, GameConfig};
use crate::ui::builders::build_main_layout;
use crate::ui::GameController;

/// GTK4 Application for the memory game
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<GameController>,
    /// Window settings
    config: GameConfig,
}

impl App {
    /// Creates a new App and deals the board
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - Successfully initialised
    /// * `Err(ConfigError)` - Board cannot be dealt or window size invalid
    ///
    /// # Example
    ///
    /// ```no_run
    /// use memory_game::config::GameConfig;
    /// use memory_game::ui::App;
    ///
    /// let app = App::new(GameConfig::default())?;
    /// # Ok::<(), memory_game::config::ConfigError>(())
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let app = Application::builder()
            .application_id("com.tidynest.memory-game")
            .build();

        let controller = GameController::from_config(&config)?;

        Ok(Self {
            app,
            controller,
            config,
        })
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the window closes.
    pub fn run(self) {
        let controller = self.controller.clone();
        let config = self.config.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, &controller, &config);
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads the static stylesheet
    fn load_css() {
        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => eprintln!("❌ Could not connect to a display"),
        }
    }

    /// Builds the main window UI
    ///
    /// A second launch re-activates this instance; the existing window is
    /// presented instead of building another board view, which would take
    /// the renderer away from the first one.
    fn build_ui(app: &Application, controller: &Rc<GameController>, config: &GameConfig) {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }
        if controller.has_renderer() {
            eprintln!("⚠ Board view already exists; not building another window");
            return;
        }

        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Memory Game")
            .default_width(config.window_width)
            .default_height(config.window_height)
            .resizable(false)
            .build();

        let layout = build_main_layout(controller);

        let controller_for_new_game = controller.clone();
        layout.new_game_button.connect_clicked(move |_| {
            controller_for_new_game.request_new_game();
        });

        window.set_child(Some(&layout.root));

        eprintln!(
            "🃏 Dealt {} cards ({}x{})",
            layout.board_grid.tile_count(),
            controller.columns(),
            controller.rows()
        );

        window.present();
    }
}
