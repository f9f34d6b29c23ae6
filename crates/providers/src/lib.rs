//! LLM provider adapters for siterep.
//!
//! The gateway talks to hosted models through the [`LlmProvider`] trait;
//! the single adapter today is Google Gemini.

pub mod google;
pub mod traits;
pub(crate) mod util;

pub use traits::{GenerateRequest, GenerateResponse, LlmProvider};

use std::sync::Arc;

use sr_domain::config::LlmConfig;
use sr_domain::error::Result;

/// Construct the configured provider.
///
/// Fails fast when the credential cannot be resolved: a missing API key is
/// a startup configuration error, not something to discover mid-session.
pub fn build_provider(cfg: &LlmConfig) -> Result<Arc<dyn LlmProvider>> {
    let provider = google::GoogleProvider::from_config(cfg)?;
    Ok(Arc::new(provider))
}
