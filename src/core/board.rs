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

//! Board state and selection rules
//!
//! The board owns every card plus the selection set (at most two card
//! indices). It knows nothing about timers or widgets: the caller decides
//! when the pending pair is evaluated by calling [`Board::resolve_pending`].
//!
//! # Layout
//!
//! Cards are stored column-major, so for a board with `rows` rows the card
//! at `(col, row)` lives at `col * rows + row`:
//!
//! ```text
//!         col 0  col 1  col 2
//! row 0     0      3      6
//! row 1     1      4      7
//! row 2     2      5      8
//! ```

use rand::Rng;
use thiserror::Error;

use crate::core::palette::{generate_color_pairs, PALETTE_CAPACITY};
use crate::core::types::Card;

/// Number of cards revealed per turn
pub const PAIR_SIZE: usize = 2;

/// Default board width
pub const DEFAULT_COLUMNS: usize = 6;

/// Default board height
pub const DEFAULT_ROWS: usize = 5;

/// Errors raised while setting up a board
#[derive(Debug, Error, Eq, PartialEq)]
pub enum BoardError {
    /// No cells at all
    #[error("Board must have at least one column and one row (got {columns}x{rows})")]
    EmptyBoard { columns: usize, rows: usize },
    /// Cards cannot be dealt in pairs
    #[error("Board {columns}x{rows} has {cells} cells; the cell count must be even")]
    OddCellCount {
        columns: usize,
        rows: usize,
        cells: usize,
    },
    /// Cell count does not fit in `usize`
    #[error("Board {columns}x{rows} is too large")]
    TooLarge { columns: usize, rows: usize },
    /// More pairs than the palette has distinct colours
    #[error("Board {columns}x{rows} needs {pairs} colours; at most {max} are available")]
    TooManyPairs {
        columns: usize,
        rows: usize,
        pairs: usize,
        max: usize,
    },
}

/// Why a selection attempt was dropped
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IgnoreReason {
    /// Two cards are already waiting for evaluation
    AwaitingEvaluation,
    /// Index does not name a card
    OutOfBounds,
    /// Card is already part of a found pair
    AlreadyMatched,
    /// Card is already in the selection set
    AlreadySelected,
}

/// Result of [`Board::select`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectOutcome {
    /// Nothing changed
    Ignored(IgnoreReason),
    /// Card turned face up; more selections allowed
    Revealed,
    /// Card turned face up and the selection set is full
    PairComplete,
}

/// Result of [`Board::resolve_pending`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// Both cards share a colour and are now matched
    Matched([usize; PAIR_SIZE]),
    /// Colours differ; both cards are face down again
    Mismatched([usize; PAIR_SIZE]),
}

impl Resolution {
    /// Indices of the two evaluated cards
    pub fn indices(&self) -> [usize; PAIR_SIZE] {
        match self {
            Resolution::Matched(indices) | Resolution::Mismatched(indices) => *indices,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }
}

/// Grid of cards plus the current selection
#[derive(Clone, Debug)]
pub struct Board {
    columns: usize,
    rows: usize,
    cards: Vec<Card>,
    selection: Vec<usize>,
}

impl Board {
    /// Checks that a `columns` x `rows` grid can be dealt in pairs
    ///
    /// Returns the cell count. A valid board has at most
    /// `2 * PALETTE_CAPACITY` cells, so neither side exceeds `i32::MAX`.
    pub fn check_dimensions(columns: usize, rows: usize) -> Result<usize, BoardError> {
        let cells = columns
            .checked_mul(rows)
            .ok_or(BoardError::TooLarge { columns, rows })?;
        if cells == 0 {
            return Err(BoardError::EmptyBoard { columns, rows });
        }
        if cells % PAIR_SIZE != 0 {
            return Err(BoardError::OddCellCount {
                columns,
                rows,
                cells,
            });
        }

        let pairs = cells / PAIR_SIZE;
        if pairs > PALETTE_CAPACITY {
            return Err(BoardError::TooManyPairs {
                columns,
                rows,
                pairs,
                max: PALETTE_CAPACITY,
            });
        }
        Ok(cells)
    }

    /// Deals a new board
    ///
    /// Generates `columns * rows / 2` distinct colours, duplicates each,
    /// shuffles with `rng` and assigns them column-major.
    ///
    /// # Errors
    ///
    /// * `BoardError::EmptyBoard` - zero columns or rows
    /// * `BoardError::OddCellCount` - cards cannot be paired exactly
    /// * `BoardError::TooLarge` - cell count overflows
    /// * `BoardError::TooManyPairs` - not enough distinct colours
    ///
    /// # Example
    ///
    /// ```
    /// use memory_game::core::Board;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let board = Board::new(4, 3, &mut rng)?;
    /// assert_eq!(board.len(), 12);
    /// # Ok::<(), memory_game::core::BoardError>(())
    /// ```
    pub fn new<R: Rng + ?Sized>(columns: usize, rows: usize, rng: &mut R) -> Result<Self, BoardError> {
        let cells = Self::check_dimensions(columns, rows)?;

        let pairs = cells / PAIR_SIZE;
        let cards = generate_color_pairs(pairs, PAIR_SIZE, rng)
            .ok_or(BoardError::TooManyPairs {
                columns,
                rows,
                pairs,
                max: PALETTE_CAPACITY,
            })?
            .into_iter()
            .map(Card::new)
            .collect();

        Ok(Self {
            columns,
            rows,
            cards,
            selection: Vec::with_capacity(PAIR_SIZE),
        })
    }

    /// Deals the standard 6 x 5 board (15 pairs)
    pub fn with_default_size<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS, rng)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a dealt board; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in column-major order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn card_at(&self, col: usize, row: usize) -> Option<&Card> {
        self.index_of(col, row).and_then(|index| self.card(index))
    }

    /// Column-major index of `(col, row)`, if inside the grid
    pub fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.columns && row < self.rows).then_some(col * self.rows + row)
    }

    /// `(col, row)` of a card index, if inside the grid
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cards.len()).then(|| (index / self.rows, index % self.rows))
    }

    /// Indices of the face-up cards awaiting evaluation
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// True while another card may still be selected
    pub fn accepts_input(&self) -> bool {
        self.selection.len() < PAIR_SIZE
    }

    /// True once a full pair is waiting for [`Board::resolve_pending`]
    pub fn is_awaiting_evaluation(&self) -> bool {
        !self.accepts_input()
    }

    /// Number of cards already matched
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count()
    }

    /// Attempts to turn a card face up
    ///
    /// Selections are dropped while a pair is pending, for unknown indices,
    /// for matched cards and for cards already in the selection set.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.is_awaiting_evaluation() {
            return SelectOutcome::Ignored(IgnoreReason::AwaitingEvaluation);
        }

        let Some(card) = self.cards.get_mut(index) else {
            return SelectOutcome::Ignored(IgnoreReason::OutOfBounds);
        };

        if card.is_matched() {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if self.selection.contains(&index) {
            return SelectOutcome::Ignored(IgnoreReason::AlreadySelected);
        }

        card.reveal();
        self.selection.push(index);

        if self.selection.len() < PAIR_SIZE {
            SelectOutcome::Revealed
        } else {
            SelectOutcome::PairComplete
        }
    }

    /// Evaluates the pending pair and clears the selection set
    ///
    /// Returns `None` (and changes nothing) unless a full pair is pending.
    pub fn resolve_pending(&mut self) -> Option<Resolution> {
        let indices: [usize; PAIR_SIZE] = self.selection.as_slice().try_into().ok()?;
        self.selection.clear();

        let [first, second] = indices;
        let is_match = self.cards[first].identity_color() == self.cards[second].identity_color();

        for index in indices {
            let card = &mut self.cards[index];
            if is_match {
                card.mark_matched();
            } else {
                card.hide();
            }
        }

        Some(if is_match {
            Resolution::Matched(indices)
        } else {
            Resolution::Mismatched(indices)
        })
    }
}
