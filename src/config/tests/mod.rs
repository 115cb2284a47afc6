//! Config module tests

#[cfg(test)]
mod config_tests;
