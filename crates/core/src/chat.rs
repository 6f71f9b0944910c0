//! # Chat
//!
//! The floating chat widget's responder. There is no model behind it: every
//! non-blank message gets the same canned reply.

use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_REPLY: &str = "I'm here to help! (Add AI integration)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub is_bot: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_bot: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_bot: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatBot {
    reply: String,
}

impl Default for ChatBot {
    fn default() -> Self {
        Self::new(PLACEHOLDER_REPLY)
    }
}

impl ChatBot {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    /// Messages to append to the transcript for `input`.
    ///
    /// Blank input appends nothing. Otherwise the user's text, as typed, is
    /// followed by the bot's reply.
    pub fn respond(&self, input: &str) -> Vec<ChatMessage> {
        if input.trim().is_empty() {
            return Vec::new();
        }
        vec![ChatMessage::user(input), ChatMessage::bot(self.reply.clone())]
    }
}
