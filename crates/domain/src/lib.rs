//! Shared domain types for siterep.
//!
//! Holds the error taxonomy, the configuration tree, and the project
//! record that every other crate builds on.

pub mod config;
pub mod error;
pub mod record;
