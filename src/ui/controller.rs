//! MVC Controller - Mediates between Model (Board) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Receive card selections from the view
//! - Apply the selection rules through the Board
//! - Schedule the delayed evaluation of a complete pair
//! - Push every card change to the single attached renderer
//!
//! # Architecture
//!
//! The Controller holds the Board but doesn't know about GTK4 widgets.
//! The view implements [`BoardRenderer`]; timers go through a
//! [`DelayScheduler`]. This keeps the game flow testable without a display.
//!
//! ```text
//! CardTile ──clicked──▶ Controller::handle_selection
//!                          │ Board::select
//!                          ├─▶ renderer.render_card
//!                          └─ pair complete ─▶ renderer.set_input_enabled(false)
//!                                              scheduler.schedule_once(delay)
//!                                                 │
//!                          Controller::resolve_selection ◀─┘
//!                          │ Board::resolve_pending
//!                          ├─▶ renderer.render_card (x2)
//!                          └─▶ renderer.set_input_enabled(true)
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::{ConfigError, GameConfig};
use crate::core::{Board, Card, Resolution, SelectOutcome};
use crate::ui::scheduler::{DelayScheduler, GlibScheduler};

/// Receives card changes from the Controller
///
/// Exactly one renderer is attached at a time (the board grid in the app).
pub trait BoardRenderer {
    /// Redraws a single card after its state changed
    fn render_card(&self, index: usize, card: &Card);

    /// Enables or suspends input on the whole board
    fn set_input_enabled(&self, enabled: bool);
}

/// MVC Controller coordinating Board and View
pub struct GameController {
    /// Game state (shared mutable reference)
    board: RefCell<Board>,
    /// Runs the delayed pair evaluation
    scheduler: Box<dyn DelayScheduler>,
    /// How long a revealed pair stays face up
    reveal_delay: Duration,
    /// View receiving state changes
    renderer: RefCell<Option<Rc<dyn BoardRenderer>>>,
}

impl GameController {
    /// Creates a Controller for an already dealt board
    ///
    /// # Arguments
    ///
    /// * `board` - Dealt board
    /// * `scheduler` - Runs the delayed evaluation
    /// * `reveal_delay` - Time a pair stays face up before evaluation
    pub fn new(board: Board, scheduler: Box<dyn DelayScheduler>, reveal_delay: Duration) -> Rc<Self> {
        Rc::new(Self {
            board: RefCell::new(board),
            scheduler,
            reveal_delay,
            renderer: RefCell::new(None),
        })
    }

    /// Creates a Controller from configuration, using the GLib main loop
    ///
    /// # Returns
    ///
    /// * `Ok(Rc<GameController>)` - Board dealt successfully
    /// * `Err(ConfigError)` - Invalid dimensions or window size
    ///
    /// # Example
    ///
    /// ```
    /// use memory_game::config::GameConfig;
    /// use memory_game::ui::GameController;
    ///
    /// let controller = GameController::from_config(&GameConfig::default().with_seed(1))?;
    /// assert_eq!(controller.card_count(), 30);
    /// # Ok::<(), memory_game::config::ConfigError>(())
    /// ```
    pub fn from_config(config: &GameConfig) -> Result<Rc<Self>, ConfigError> {
        let board = config.build_board()?;
        Ok(Self::new(board, Box::new(GlibScheduler), config.reveal_delay()))
    }

    /// Attaches the view and renders every card once
    ///
    /// Replaces any previously attached renderer.
    pub fn attach_renderer(&self, renderer: Rc<dyn BoardRenderer>) {
        let (cards, accepts_input) = {
            let board = self.board.borrow();
            (board.cards().to_vec(), board.accepts_input())
        };

        for (index, card) in cards.iter().enumerate() {
            renderer.render_card(index, card);
        }
        renderer.set_input_enabled(accepts_input);

        *self.renderer.borrow_mut() = Some(renderer);
    }

    /// True once a view is attached
    pub fn has_renderer(&self) -> bool {
        self.renderer.borrow().is_some()
    }

    /// Handles a card-selected event from the view
    ///
    /// Ignored selections change nothing. Completing a pair suspends input
    /// and schedules [`GameController::resolve_selection`] after the reveal
    /// delay. The scheduled action only holds a weak reference, so dropping
    /// the Controller cancels it.
    pub fn handle_selection(self: &Rc<Self>, index: usize) {
        let outcome = self.board.borrow_mut().select(index);

        match outcome {
            SelectOutcome::Ignored(reason) => {
                eprintln!("🚫 Selection of card {} ignored: {:?}", index, reason);
            }
            SelectOutcome::Revealed => {
                eprintln!("👆 Revealed card {}", index);
                self.render(index);
            }
            SelectOutcome::PairComplete => {
                eprintln!("👆 Revealed card {} (pair complete)", index);
                self.render(index);
                self.set_input_enabled(false);

                let weak = Rc::downgrade(self);
                self.scheduler.schedule_once(
                    self.reveal_delay,
                    Box::new(move || {
                        if let Some(controller) = weak.upgrade() {
                            controller.resolve_selection();
                        }
                    }),
                );
            }
        }
    }

    /// Evaluates the pending pair and re-enables input
    ///
    /// Called by the scheduler once the reveal delay has elapsed. Does
    /// nothing when no pair is pending.
    pub fn resolve_selection(&self) {
        let resolution = self.board.borrow_mut().resolve_pending();

        let Some(resolution) = resolution else {
            return;
        };

        match resolution {
            Resolution::Matched([a, b]) => eprintln!("✅ Match: cards {} and {}", a, b),
            Resolution::Mismatched([a, b]) => eprintln!("❌ No match: cards {} and {}", a, b),
        }

        for index in resolution.indices() {
            self.render(index);
        }
        self.set_input_enabled(true);
    }

    /// "New Game" button handler
    ///
    /// Restarting is not implemented; the board is left as it is.
    pub fn request_new_game(&self) {
        eprintln!("🚧 New game: not yet implemented");
    }

    /// Returns a copy of the card at `index`
    pub fn card(&self, index: usize) -> Option<Card> {
        self.board.borrow().card(index).copied()
    }

    /// Returns a copy of every card in column-major order
    pub fn cards(&self) -> Vec<Card> {
        self.board.borrow().cards().to_vec()
    }

    pub fn card_count(&self) -> usize {
        self.board.borrow().len()
    }

    pub fn columns(&self) -> usize {
        self.board.borrow().columns()
    }

    pub fn rows(&self) -> usize {
        self.board.borrow().rows()
    }

    /// True while a revealed pair waits for evaluation
    pub fn is_awaiting_evaluation(&self) -> bool {
        self.board.borrow().is_awaiting_evaluation()
    }

    fn renderer(&self) -> Option<Rc<dyn BoardRenderer>> {
        self.renderer.borrow().clone()
    }

    fn render(&self, index: usize) {
        // Board borrow must end before the view runs
        let Some(card) = self.card(index) else {
            return;
        };
        if let Some(renderer) = self.renderer() {
            renderer.render_card(index, &card);
        }
    }

    fn set_input_enabled(&self, enabled: bool) {
        if let Some(renderer) = self.renderer() {
            renderer.set_input_enabled(enabled);
        }
    }
}
