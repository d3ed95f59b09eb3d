//! Chat session types.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Identifier of a chat user
pub type UserId = String;

/// Default number of messages kept per session
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// Who said a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Assistant => write!(f, "Assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Per-user conversation state.
///
/// Owned by the session store; the context builder only ever sees the
/// rendered [`conversation_context`](ChatSession::conversation_context).
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub user_id: UserId,
    history: VecDeque<ChatMessage>,
    max_history: usize,
    last_active: Instant,
}

impl ChatSession {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self::with_max_history(user_id, DEFAULT_MAX_HISTORY)
    }

    pub fn with_max_history(user_id: impl Into<UserId>, max_history: usize) -> Self {
        Self {
            user_id: user_id.into(),
            history: VecDeque::with_capacity(max_history),
            max_history,
            last_active: Instant::now(),
        }
    }

    /// Append a message, dropping the oldest ones beyond `max_history`
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.history.push_back(ChatMessage {
            role,
            content: content.into(),
        });
        while self.history.len() > self.max_history {
            self.history.pop_front();
        }
        self.touch();
    }

    pub fn history(&self) -> impl Iterator<Item = &ChatMessage> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Recent transcript as `"User: ..."` / `"Assistant: ..."` lines
    pub fn conversation_context(&self) -> String {
        self.history
            .iter()
            .map(|message| format!("{}: {}", message.role, message.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_active.elapsed()
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.idle_for() > ttl
    }
}
