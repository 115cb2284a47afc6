//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Board dealing and selection tests
//! - Colour pair generation tests
//! - Type tests (Card, Rgba)

#[cfg(test)]
mod board_tests;
#[cfg(test)]
mod palette_tests;
