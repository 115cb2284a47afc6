use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use crate::core::palette::{generate_color_pairs, random_color, PALETTE_CAPACITY};
use crate::core::types::Rgba;

fn counts(colors: &[Rgba]) -> HashMap<Rgba, usize> {
    let mut counts = HashMap::new();
    for color in colors {
        *counts.entry(*color).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_random_color_stays_mid_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..1_000 {
        let color = random_color(&mut rng);
        for channel in [color.red, color.green, color.blue] {
            assert!((96..=223).contains(&channel), "channel {} out of band", channel);
        }
        assert_eq!(color.alpha, 255);
    }
}

#[test]
fn test_fifteen_pairs() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let colors = generate_color_pairs(15, 2, &mut rng).unwrap();

    assert_eq!(colors.len(), 30);

    let counts = counts(&colors);
    assert_eq!(counts.len(), 15, "Should generate 15 distinct colours");
    assert!(counts.values().all(|&n| n == 2), "Every colour should appear twice");
}

#[test]
fn test_same_seed_same_deal() {
    let first = generate_color_pairs(10, 2, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    let second = generate_color_pairs(10, 2, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_zero_colours() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(generate_color_pairs(0, 2, &mut rng).unwrap().is_empty());
}

#[test]
fn test_request_beyond_palette_fails_fast() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // Must return immediately instead of redrawing forever
    assert_eq!(PALETTE_CAPACITY, 128 * 128 * 128);
    assert!(generate_color_pairs(PALETTE_CAPACITY + 1, 1, &mut rng).is_none());
}

#[test]
fn test_overflowing_length_fails() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(generate_color_pairs(2, usize::MAX, &mut rng).is_none());
}

proptest! {
    #[test]
    fn prop_each_colour_repeated_exactly(seed in any::<u64>(), distinct in 1usize..40, repeat in 1usize..4) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let colors = generate_color_pairs(distinct, repeat, &mut rng).unwrap();

        prop_assert_eq!(colors.len(), distinct * repeat);

        let counts = counts(&colors);
        prop_assert_eq!(counts.len(), distinct);
        prop_assert!(counts.values().all(|&n| n == repeat));
    }
}
