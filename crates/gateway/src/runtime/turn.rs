//! Turn execution: one user question in, one assistant turn out.
//!
//! Entry point: [`run_turn`]. Every call appends exactly two turns to the
//! transcript: the user's question and either the model reply or a
//! diagnostic recorded in the assistant role. Failures never propagate
//! past the turn boundary, so the session stays usable.

use sr_domain::config::LlmConfig;
use sr_providers::{GenerateRequest, LlmProvider};
use sr_sessions::Transcript;

/// Result of one turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The assistant turn's text (model reply or diagnostic).
    pub reply: String,
    /// True when the assistant turn is a transport diagnostic.
    pub failed: bool,
}

/// Run one chat turn against the given transcript.
///
/// The prompt is stateless: persona + serialized context + this question,
/// never any earlier turns. The transcript is only ever appended to;
/// exactly one user turn and one assistant-role turn per call, on both
/// the success and the failure path.
pub async fn run_turn(
    provider: &dyn LlmProvider,
    llm: &LlmConfig,
    context: &str,
    transcript: &mut Transcript,
    user_message: &str,
) -> TurnOutcome {
    transcript.push_user(user_message);

    let req = GenerateRequest {
        prompt: sr_context::compose(context, user_message),
        temperature: llm.temperature,
    };

    let outcome = match generate_with_retry(provider, llm.max_retries, &req).await {
        Ok(resp) => {
            // Returned verbatim: no post-processing, no grounding check.
            TurnOutcome {
                reply: resp.content,
                failed: false,
            }
        }
        Err(e) => {
            tracing::warn!(
                provider = provider.provider_id(),
                error = %e,
                "model call failed, recording diagnostic turn"
            );
            TurnOutcome {
                reply: diagnostic_message(&e),
                failed: true,
            }
        }
    };

    transcript.push_assistant(&outcome.reply);
    outcome
}

/// Call the provider, retrying transient transport failures up to
/// `max_retries` extra attempts. Provider-reported errors (bad request,
/// quota, auth) are returned immediately.
async fn generate_with_retry(
    provider: &dyn LlmProvider,
    max_retries: u32,
    req: &GenerateRequest,
) -> sr_domain::error::Result<sr_providers::GenerateResponse> {
    let mut attempt = 0;
    loop {
        match provider.generate(req).await {
            Ok(resp) => return Ok(resp),
            Err(e) if e.is_transient() && attempt < max_retries => {
                attempt += 1;
                tracing::debug!(
                    attempt,
                    error = %e,
                    "transient model call failure, retrying"
                );
            }
            Err(e) => return Err(e),
        }
    }
}

/// The user-visible diagnostic recorded when the model call fails.
fn diagnostic_message(e: &sr_domain::error::Error) -> String {
    format!(
        "An error occurred while calling the model. Please check your API key \
         and network connectivity. Error: {e}"
    )
}
