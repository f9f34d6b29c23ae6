//! Session management for siterep.
//!
//! In-memory, append-only chat transcripts with an explicit store that
//! hands out one independent transcript per session key. Nothing is ever
//! written to disk; a transcript lives exactly as long as its session.

pub mod store;
pub mod transcript;

pub use store::SessionStore;
pub use transcript::{Role, Transcript, Turn};
