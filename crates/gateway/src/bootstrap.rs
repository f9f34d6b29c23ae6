//! AppState construction shared by `serve`, `chat`, and `ask`.

use std::sync::Arc;

use anyhow::Context;

use sr_domain::config::{Config, ConfigSeverity};
use sr_sessions::SessionStore;

use crate::state::AppState;

/// Validate config, precompute the serialized context, construct the
/// provider, and return a fully-wired [`AppState`].
///
/// A missing or empty API credential fails here; the interactive surface
/// refuses to start rather than reporting the problem one turn at a time.
pub fn build_app_state(config: Arc<Config>) -> anyhow::Result<AppState> {
    // ── Config validation ────────────────────────────────────────────
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            ConfigSeverity::Warning => tracing::warn!("config: {issue}"),
            ConfigSeverity::Error => tracing::error!("config: {issue}"),
        }
    }
    if Config::has_errors(&issues) {
        anyhow::bail!(
            "config validation failed with {} error(s)",
            issues
                .iter()
                .filter(|i| i.severity == ConfigSeverity::Error)
                .count()
        );
    }

    // ── Finances (validated above, parsed once) ──────────────────────
    let finances = config
        .project
        .finances()
        .context("parsing project finances")?;

    // ── Serialized context (once per process, not per request) ───────
    let context = Arc::new(sr_context::serialize(&config.project));
    tracing::info!(
        project = %config.project.name,
        chars = context.len(),
        "project context serialized"
    );

    // ── LLM provider ─────────────────────────────────────────────────
    let provider =
        sr_providers::build_provider(&config.llm).context("initializing LLM provider")?;
    tracing::info!(
        provider = provider.provider_id(),
        model = %config.llm.provider.model,
        "LLM provider ready"
    );

    Ok(AppState {
        config,
        context,
        finances,
        provider,
        sessions: Arc::new(SessionStore::new()),
    })
}
