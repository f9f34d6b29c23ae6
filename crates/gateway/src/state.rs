use std::sync::Arc;

use sr_domain::config::Config;
use sr_domain::record::Finances;
use sr_providers::LlmProvider;
use sr_sessions::SessionStore;

/// Shared application state passed to all API handlers and CLI commands.
///
/// The config, project record, and serialized context are read-only and
/// safely shared across every session; only transcripts (inside the
/// session store) are mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// The context block, serialized once at startup.
    pub context: Arc<String>,
    /// Parsed budget/spend view, validated at startup.
    pub finances: Finances,
    pub provider: Arc<dyn LlmProvider>,
    pub sessions: Arc<SessionStore>,
}
