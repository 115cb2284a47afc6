use std::time::Duration;

use crate::config::{ConfigError, GameConfig};
use crate::core::{BoardError, Rgba};

#[test]
fn test_default_config() {
    let config = GameConfig::default();

    assert_eq!(config.columns, 6);
    assert_eq!(config.rows, 5);
    assert_eq!(config.reveal_delay(), Duration::from_secs(1));
    assert_eq!(config.seed, None);
    assert_eq!((config.window_width, config.window_height), (800, 640));
    assert!(config.validate().is_ok());
}

#[test]
fn test_odd_board_is_fatal() {
    let config = GameConfig::with_dimensions(5, 5);

    assert_eq!(
        config.validate(),
        Err(ConfigError::Board(BoardError::OddCellCount {
            columns: 5,
            rows: 5,
            cells: 25,
        }))
    );
    assert!(config.build_board().is_err());
}

#[test]
fn test_invalid_window_size() {
    let config = GameConfig {
        window_width: 0,
        ..GameConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWindowSize { width: 0, height: 640 })
    ));
}

#[test]
fn test_seeded_deals_are_reproducible() {
    let config = GameConfig::with_dimensions(4, 4).with_seed(99);

    let first: Vec<Rgba> = config
        .build_board()
        .unwrap()
        .cards()
        .iter()
        .map(|card| card.identity_color())
        .collect();
    let second: Vec<Rgba> = config
        .build_board()
        .unwrap()
        .cards()
        .iter()
        .map(|card| card.identity_color())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_unseeded_board_is_still_valid() {
    let board = GameConfig::default().build_board().unwrap();
    assert_eq!(board.len(), 30);
}

#[test]
fn test_error_messages() {
    let err = ConfigError::from(BoardError::OddCellCount {
        columns: 3,
        rows: 1,
        cells: 3,
    });
    assert!(err.to_string().contains("must be even"));
}

#[test]
fn test_oversized_board_is_fatal() {
    let overflowing = GameConfig::with_dimensions(usize::MAX, 2);
    assert!(matches!(
        overflowing.validate(),
        Err(ConfigError::Board(BoardError::TooLarge { .. }))
    ));

    let beyond_palette = GameConfig::with_dimensions(4096, 1025);
    assert!(matches!(
        beyond_palette.build_board(),
        Err(ConfigError::Board(BoardError::TooManyPairs { .. }))
    ));
}
