//! Core chat data types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Topic bucket a visitor question is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    Greeting,
    About,
    Tours,
    Hours,
    Tickets,
    Facts,
    Default,
}

impl ResponseCategory {
    /// All categories, in classifier priority order with the fallback last.
    pub const ALL: [ResponseCategory; 7] = [
        ResponseCategory::Greeting,
        ResponseCategory::About,
        ResponseCategory::Tours,
        ResponseCategory::Hours,
        ResponseCategory::Tickets,
        ResponseCategory::Facts,
        ResponseCategory::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::Greeting => "greeting",
            ResponseCategory::About => "about",
            ResponseCategory::Tours => "tours",
            ResponseCategory::Hours => "hours",
            ResponseCategory::Tickets => "tickets",
            ResponseCategory::Facts => "facts",
            ResponseCategory::Default => "default",
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who spoke a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// One entry in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    /// True while the text is still growing.
    pub revealing: bool,
}

impl Message {
    /// A fully revealed visitor message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            revealing: false,
        }
    }

    /// An empty bot message about to be revealed.
    pub fn bot_revealing() -> Self {
        Self {
            text: String::new(),
            sender: Sender::Bot,
            revealing: true,
        }
    }

    /// A fully revealed bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            revealing: false,
        }
    }
}

/// Identifier of one reveal run. Ticks carry it so stale ones can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub u64);

impl fmt::Display for RevealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reveal-{}", self.0)
    }
}
