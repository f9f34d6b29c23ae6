//! Server-rendered dashboard page.
//!
//! One self-contained HTML page: three KPI tiles (status, progress, spend
//! vs budget), a budget/spend bar comparison, and the chat widget that
//! posts to `/v1/chat`.

use axum::extract::State;
use axum::response::{Html, IntoResponse};

use sr_domain::record::Finances;

use crate::state::AppState;

/// Bar color for the budget.
const BUDGET_COLOR: &str = "#007bff";
/// Spend bar color when spending exceeds the budget.
const SPEND_ALERT_COLOR: &str = "#DC3545";
/// Spend bar color while spending is within budget.
const SPEND_NEUTRAL_COLOR: &str = "#4CAF50";

/// Pick the spend bar color: alert when overspent, neutral otherwise.
fn spend_color(finances: &Finances) -> &'static str {
    if finances.overspent() {
        SPEND_ALERT_COLOR
    } else {
        SPEND_NEUTRAL_COLOR
    }
}

/// Format a non-negative amount as `$1,234,567`. Negative amounts keep
/// their sign ahead of the `$`.
fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Minimal HTML escape for record fields rendered into the page.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let record = &state.config.project;
    let fin = &state.finances;

    let status_delta = if record.status == "On Schedule" {
        "On Schedule"
    } else {
        "Delayed"
    };

    let max_amount = fin.budget.max(fin.spent).max(1.0);
    let budget_pct = (fin.budget / max_amount * 100.0).round() as u32;
    let spent_pct = (fin.spent / max_amount * 100.0).round() as u32;

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{name} | Project Report Assistant</title>
<style>
  body {{ font-family: system-ui, sans-serif; max-width: 900px; margin: 2rem auto; padding: 0 1rem; background: #0d1117; color: #c9d1d9; }}
  h1 {{ color: #58a6ff; }}
  h2 {{ color: #79c0ff; border-bottom: 1px solid #21262d; padding-bottom: 0.3em; margin-top: 2em; }}
  .tiles {{ display: flex; gap: 1rem; }}
  .card {{ background: #161b22; border: 1px solid #30363d; border-radius: 6px; padding: 1rem; margin: 0.5rem 0; flex: 1; }}
  .metric-label {{ font-size: 0.85em; color: #8b949e; }}
  .metric-value {{ font-size: 1.5em; font-weight: 600; margin: 0.2em 0; }}
  .metric-delta {{ font-size: 0.85em; color: #4caf50; }}
  .bar-row {{ display: flex; align-items: center; gap: 0.6em; margin: 0.5em 0; }}
  .bar-label {{ width: 8em; font-size: 0.9em; }}
  .bar-track {{ flex: 1; background: #21262d; border-radius: 4px; }}
  .bar {{ height: 1.4em; border-radius: 4px; }}
  .bar-amount {{ width: 9em; text-align: right; font-variant-numeric: tabular-nums; }}
  #chat-log {{ height: 260px; overflow-y: auto; }}
  .turn {{ margin: 0.4em 0; white-space: pre-wrap; }}
  .turn.user {{ color: #58a6ff; }}
  .turn.assistant {{ color: #c9d1d9; }}
  #chat-form {{ display: flex; gap: 0.5em; margin-top: 0.5em; }}
  #chat-input {{ flex: 1; background: #0d1117; color: #c9d1d9; border: 1px solid #30363d; border-radius: 4px; padding: 0.5em; }}
  button {{ background: #238636; color: #fff; border: 0; border-radius: 4px; padding: 0.5em 1em; cursor: pointer; }}
</style>
</head>
<body>
<h1>&#127959;&#65039; Project Report Assistant</h1>
<p>Get an instant project overview or ask the assistant for more details below.</p>

<h2>&#128202; Project Overview Dashboard</h2>
<div class="tiles">
<div class="card">
  <div class="metric-label">Project Status</div>
  <div class="metric-value">{status}</div>
  <div class="metric-delta">{status_delta}</div>
</div>
<div class="card">
  <div class="metric-label">Overall Progress</div>
  <div class="metric-value">{progress}</div>
</div>
<div class="card">
  <div class="metric-label">Budget vs. Spend</div>
  <div class="metric-value">{spent_fmt}</div>
  <div class="metric-delta">Remaining: {remaining_fmt}</div>
</div>
</div>

<h2>Financial Breakdown</h2>
<div class="card">
<div class="bar-row">
  <div class="bar-label">Budget</div>
  <div class="bar-track"><div class="bar" style="width:{budget_pct}%;background:{budget_color}"></div></div>
  <div class="bar-amount">{budget_fmt}</div>
</div>
<div class="bar-row">
  <div class="bar-label">Spent to Date</div>
  <div class="bar-track"><div class="bar" style="width:{spent_pct}%;background:{spent_color}"></div></div>
  <div class="bar-amount">{spent_fmt}</div>
</div>
</div>

<h2>&#129302; AI Report Assistant</h2>
<p>Ask a specific question about the project. For example: <em>"What is the
project budget?"</em>, <em>"What is the overall progress?"</em>, or
<em>"What is the latest activity?"</em></p>
<div class="card">
<div id="chat-log"></div>
<form id="chat-form">
  <input id="chat-input" autocomplete="off" placeholder="Ask a question about the project...">
  <button type="submit">Send</button>
</form>
</div>

<script>
const log = document.getElementById("chat-log");
const form = document.getElementById("chat-form");
const input = document.getElementById("chat-input");
// One transcript per browser session.
let sessionKey = sessionStorage.getItem("siterep-session");
if (!sessionKey) {{
  sessionKey = "web:" + crypto.randomUUID();
  sessionStorage.setItem("siterep-session", sessionKey);
}}
function addTurn(role, text) {{
  const div = document.createElement("div");
  div.className = "turn " + role;
  div.textContent = (role === "user" ? "You: " : "Assistant: ") + text;
  log.appendChild(div);
  log.scrollTop = log.scrollHeight;
}}
form.addEventListener("submit", async (e) => {{
  e.preventDefault();
  const message = input.value.trim();
  if (!message) return;
  input.value = "";
  addTurn("user", message);
  try {{
    const resp = await fetch("/v1/chat", {{
      method: "POST",
      headers: {{ "Content-Type": "application/json" }},
      body: JSON.stringify({{ session_key: sessionKey, message }}),
    }});
    const data = await resp.json();
    addTurn("assistant", data.reply ?? data.error ?? "no reply");
  }} catch (err) {{
    addTurn("assistant", "Request failed: " + err);
  }}
}});
</script>
</body>
</html>"#,
        name = escape_html(&record.name),
        status = escape_html(&record.status),
        progress = escape_html(&record.progress),
        budget_fmt = format_money(fin.budget),
        spent_fmt = format_money(fin.spent),
        remaining_fmt = format_money(fin.remaining()),
        budget_color = BUDGET_COLOR,
        spent_color = spend_color(fin),
    );

    Html(html)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_budget_uses_neutral_color() {
        let fin = Finances {
            budget: 500_000_000.0,
            spent: 375_000_000.0,
        };
        assert_eq!(fin.remaining(), 125_000_000.0);
        assert_eq!(spend_color(&fin), SPEND_NEUTRAL_COLOR);
    }

    #[test]
    fn overspend_uses_alert_color() {
        let fin = Finances {
            budget: 500_000_000.0,
            spent: 600_000_000.0,
        };
        assert_eq!(spend_color(&fin), SPEND_ALERT_COLOR);
    }

    #[test]
    fn exactly_on_budget_is_not_an_alert() {
        let fin = Finances {
            budget: 100.0,
            spent: 100.0,
        };
        assert_eq!(spend_color(&fin), SPEND_NEUTRAL_COLOR);
    }

    #[test]
    fn record_fields_are_html_escaped() {
        assert_eq!(
            escape_html("<script>alert(1)</script> & co"),
            "&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"
        );
        assert_eq!(escape_html("Brisbane CBD Skyscraper"), "Brisbane CBD Skyscraper");
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(125_000_000.0), "$125,000,000");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(999.0), "$999");
        assert_eq!(format_money(1_000.0), "$1,000");
        assert_eq!(format_money(-100_000_000.0), "-$100,000,000");
    }
}
