//! Ordered message history for one chat session.

use crate::types::{Message, Sender};

/// Append-only list of messages. The only in-place edit allowed is growing
/// (and then finalizing) the last bot message while it is being revealed.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Append a character to the last message if it is a revealing bot message.
    pub fn grow_last(&mut self, ch: char) -> bool {
        match self.revealing_tail() {
            Some(message) => {
                message.text.push(ch);
                true
            }
            None => false,
        }
    }

    /// Replace the last revealing bot message's text and mark it revealed.
    pub fn finalize_last(&mut self, text: &str) -> bool {
        match self.revealing_tail() {
            Some(message) => {
                message.text.clear();
                message.text.push_str(text);
                message.revealing = false;
                true
            }
            None => false,
        }
    }

    fn revealing_tail(&mut self) -> Option<&mut Message> {
        self.messages
            .last_mut()
            .filter(|m| m.sender == Sender::Bot && m.revealing)
    }
}
