//! UI builder modules
//!
//! Contains builders for constructing the main application UI:
//! - Border layout construction

pub mod layout;

pub use layout::{build_main_layout, MainLayout};
