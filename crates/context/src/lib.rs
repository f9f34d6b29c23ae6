//! Context assembly for siterep.
//!
//! Flattens the project record into the deterministic text block that
//! grounds every model call, and composes the final per-turn prompt.

pub mod prompt;
pub mod serializer;

pub use prompt::compose;
pub use serializer::serialize;
