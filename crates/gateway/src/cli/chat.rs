//! `siterep chat`: interactive REPL command.
//!
//! Opens a readline-based loop that runs one turn per entered line and
//! prints the assistant reply. Supports slash-commands for clearing the
//! screen, resetting the session, and inspecting the context block.

use std::sync::Arc;

use sr_domain::config::Config;

use crate::bootstrap;
use crate::runtime::run_turn;
use crate::state::AppState;

/// Run the interactive chat REPL.
pub async fn chat(config: Arc<Config>, session_key: String) -> anyhow::Result<()> {
    // 1. Boot: validates config and resolves the credential up front, so a
    //    missing API key aborts here instead of on the first question.
    let state = bootstrap::build_app_state(config)?;

    // 2. Initialize rustyline editor with persistent history.
    let history_path = dirs::home_dir()
        .unwrap_or_default()
        .join(".siterep")
        .join("chat_history.txt");
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let mut rl = rustyline::DefaultEditor::new()?;
    let _ = rl.load_history(&history_path);

    // 3. Welcome message to stderr (keep stdout clean for replies).
    eprintln!("siterep: {} ({})", state.config.project.name, state.config.project.id);
    eprintln!("Type /help for commands, Ctrl+D to exit");
    eprintln!();

    // 4. REPL loop.
    loop {
        let readline = rl.readline("you> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(&line).ok();

                // ── Slash commands ────────────────────────────────
                if trimmed.starts_with('/') {
                    if handle_slash_command(trimmed, &state, &session_key) {
                        break;
                    }
                    continue;
                }

                // ── User question → one turn ─────────────────────
                send_message(&state, &session_key, trimmed).await;
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                eprintln!("(Use Ctrl+D or /exit to quit)");
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                eprintln!("\x1B[31mreadline error: {e}\x1B[0m");
                break;
            }
        }
    }

    // 5. Save history.
    rl.save_history(&history_path).ok();

    eprintln!("Goodbye!");
    Ok(())
}

/// Process a slash command. Returns `true` if the REPL should exit.
fn handle_slash_command(input: &str, state: &AppState, session_key: &str) -> bool {
    match input {
        "/exit" | "/quit" => return true,

        "/clear" => {
            // ANSI escape: clear screen and move cursor to top-left.
            eprint!("\x1B[2J\x1B[1;1H");
        }

        "/reset" => {
            state.sessions.remove(session_key);
            eprintln!("Session reset, transcript discarded.");
        }

        "/context" => {
            println!("{}", state.context);
        }

        "/help" => {
            eprintln!("Commands:");
            eprintln!("  /context     Print the project context sent with every question");
            eprintln!("  /clear       Clear the screen");
            eprintln!("  /reset       Discard the transcript and start fresh");
            eprintln!("  /exit, /quit Exit the chat");
            eprintln!("  /help        Show this help");
        }

        other => {
            eprintln!("Unknown command: {other}  (type /help for a list)");
        }
    }

    false
}

/// Run one turn and print the reply.
async fn send_message(state: &AppState, session_key: &str, question: &str) {
    let transcript = state.sessions.resolve_or_create(session_key);
    let mut transcript = transcript.lock().await;

    let outcome = run_turn(
        state.provider.as_ref(),
        &state.config.llm,
        &state.context,
        &mut transcript,
        question,
    )
    .await;

    if outcome.failed {
        eprintln!("\x1B[31m{}\x1B[0m", outcome.reply);
    } else {
        println!("{}", outcome.reply);
        println!();
    }
}
