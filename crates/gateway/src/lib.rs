//! The siterep gateway: CLI commands, bootstrap, the turn runtime, and the
//! HTTP surface (dashboard + chat API).

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod runtime;
pub mod state;
