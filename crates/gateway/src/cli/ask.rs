//! `siterep ask`: one-shot execution command.
//!
//! Runs a single turn, prints the reply, and exits. Useful for scripting
//! and quick checks. Exit code 1 when the turn produced a transport
//! diagnostic instead of a model reply.

use std::sync::Arc;

use sr_domain::config::Config;

use crate::bootstrap;
use crate::runtime::run_turn;

pub async fn ask(
    config: Arc<Config>,
    question: String,
    session_key: String,
    json_output: bool,
) -> anyhow::Result<()> {
    let state = bootstrap::build_app_state(config)?;

    let transcript = state.sessions.resolve_or_create(&session_key);
    let mut transcript = transcript.lock().await;

    let outcome = run_turn(
        state.provider.as_ref(),
        &state.config.llm,
        &state.context,
        &mut transcript,
        &question,
    )
    .await;

    if json_output {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "question": question,
            "reply": outcome.reply,
            "failed": outcome.failed,
        }))
        .map_err(|e| anyhow::anyhow!("serializing turn: {e}"))?;
        println!("{json}");
    } else if outcome.failed {
        eprintln!("error: {}", outcome.reply);
    } else {
        println!("{}", outcome.reply);
    }

    if outcome.failed {
        std::process::exit(1);
    }

    Ok(())
}
