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

//! Colour pair generation
//!
//! Produces the shuffled multiset of identity colours dealt onto a board.
//! The random generator is always passed in; nothing here owns one.
//!
//! Channels are kept in the middle of the range so no card face is close
//! to white (the hidden colour) or black.

use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;

use crate::core::types::Rgba;

/// Lower bound of a colour channel as a fraction of full scale
pub const CHANNEL_FLOOR: f64 = 0.375;

/// Width of the channel band as a fraction of full scale
pub const CHANNEL_SPAN: f64 = 0.5;

/// Distinct byte values a channel can take inside the band (96..=223)
pub const CHANNEL_LEVELS: usize = 128;

/// Number of distinct colours the band can produce
pub const PALETTE_CAPACITY: usize = CHANNEL_LEVELS * CHANNEL_LEVELS * CHANNEL_LEVELS;

/// Draws one opaque mid-range colour
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    Rgba::opaque(channel(rng), channel(rng), channel(rng))
}

fn channel<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let fraction = CHANNEL_FLOOR + rng.gen::<f64>() * CHANNEL_SPAN;
    (fraction * f64::from(u8::MAX)).round() as u8
}

/// Generates `distinct` unique colours, each repeated `repeat` times, shuffled
///
/// A colour that collides with one already drawn is redrawn, so the result
/// always holds exactly `distinct` different values.
///
/// Returns `None` when `distinct` exceeds [`PALETTE_CAPACITY`] (the band
/// cannot hold that many colours) or the total length overflows.
///
/// # Example
///
/// ```
/// use memory_game::core::palette::generate_color_pairs;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let colors = generate_color_pairs(15, 2, &mut rng).expect("within capacity");
/// assert_eq!(colors.len(), 30);
/// ```
pub fn generate_color_pairs<R: Rng + ?Sized>(
    distinct: usize,
    repeat: usize,
    rng: &mut R,
) -> Option<Vec<Rgba>> {
    if distinct > PALETTE_CAPACITY {
        return None;
    }

    let total = distinct.checked_mul(repeat)?;
    let mut seen = HashSet::with_capacity(distinct);
    let mut colors = Vec::with_capacity(total);

    while seen.len() < distinct {
        let color = random_color(rng);
        if !seen.insert(color) {
            continue;
        }
        colors.extend(std::iter::repeat(color).take(repeat));
    }

    colors.shuffle(rng);
    Some(colors)
}
