//! Append-only chat transcripts.
//!
//! A transcript is an ordered sequence of role-tagged turns. It only ever
//! grows: there is no truncation, rollback, or persistence. Transport
//! failures are recorded as assistant-role diagnostic turns so the
//! sequence stays well-formed after an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_owned(),
            timestamp: Utc::now(),
        }
    }
}

/// An append-only sequence of turns, owned by exactly one session.
#[derive(Debug, Default, Serialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn.
    pub fn push_user(&mut self, content: &str) {
        self.turns.push(Turn::new(Role::User, content));
    }

    /// Append an assistant turn (model reply or diagnostic).
    pub fn push_assistant(&mut self, content: &str) {
        self.turns.push(Turn::new(Role::Assistant, content));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
