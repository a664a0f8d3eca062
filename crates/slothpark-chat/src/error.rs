//! Error types for the chat panel.

use slothpark_core::SlothParkError;

/// Reasons a chat action was refused. The conversation is never modified
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("a reply is still being revealed")]
    RevealInProgress,
    #[error("chat panel is closed")]
    PanelClosed,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
}

impl From<ChatError> for SlothParkError {
    fn from(err: ChatError) -> Self {
        SlothParkError::Chat(err.to_string())
    }
}
