//! Chat panel controller.
//!
//! Owns the open flag, the conversation, the input buffer and the reveal in
//! progress. Every state change goes through a method here; the view only
//! reads.

use std::mem;

use slothpark_core::{ChatConfig, ReopenPolicy};

use crate::classifier::classify;
use crate::conversation::Conversation;
use crate::error::ChatError;
use crate::responses::select;
use crate::reveal::{Reveal, RevealStep};
use crate::ticker::{RevealHandle, TickSource};
use crate::types::{Message, ResponseCategory, RevealId};

/// What a tick did to the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One more character became visible.
    Appended(char),
    /// The reply is complete and the message finalized.
    Finished,
    /// The tick belonged to no active reveal and was ignored.
    Stale,
}

struct ActiveReveal {
    id: RevealId,
    reveal: Reveal,
    // Dropping this stops the tick stream.
    _handle: RevealHandle,
}

/// State and behavior of the mascot chat widget.
pub struct ChatPanel {
    config: ChatConfig,
    ticks: Box<dyn TickSource>,
    open: bool,
    conversation: Conversation,
    input: String,
    active: Option<ActiveReveal>,
    next_id: u64,
    scroll_requested: bool,
}

impl ChatPanel {
    /// Create a closed panel with an empty conversation.
    pub fn new(config: ChatConfig, ticks: impl TickSource + 'static) -> Self {
        Self {
            config,
            ticks: Box::new(ticks),
            open: false,
            conversation: Conversation::new(),
            input: String::new(),
            active: None,
            next_id: 0,
            scroll_requested: false,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_revealing(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the reveal currently consuming ticks.
    pub fn active_reveal(&self) -> Option<RevealId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        self.open && !self.is_revealing() && !self.input.trim().is_empty()
    }

    /// Status text shown under the input while a reply is revealed.
    pub fn status_line(&self) -> Option<String> {
        self.is_revealing()
            .then(|| format!("{} is typing slowly...", self.config.mascot_short_name()))
    }

    // -- Open / close --

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Open the panel. An empty conversation starts with a greeting.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        tracing::info!(messages = self.conversation.len(), "Chat panel opened");

        if self.conversation.is_empty() {
            let greeting = select(ResponseCategory::Greeting);
            self.start_reveal(greeting);
        }
    }

    /// Close the panel. A reveal in progress is stopped and its message
    /// completed immediately.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.finish_active();

        if self.config.reopen_policy == ReopenPolicy::Restart {
            self.conversation.clear();
            self.input.clear();
        }
        tracing::info!(policy = ?self.config.reopen_policy, "Chat panel closed");
    }

    // -- Input editing --

    /// Append a character to the input. Ignored while a reply is revealed or
    /// when the input is at its length limit.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.is_revealing() || self.input.chars().count() >= self.config.max_input_chars {
            return false;
        }
        self.input.push(ch);
        true
    }

    /// Remove the last input character. Ignored while a reply is revealed.
    pub fn backspace(&mut self) -> bool {
        if self.is_revealing() {
            return false;
        }
        self.input.pop().is_some()
    }

    pub fn clear_input(&mut self) {
        if !self.is_revealing() {
            self.input.clear();
        }
    }

    /// Replace the whole input buffer.
    pub fn set_input(&mut self, text: &str) -> Result<(), ChatError> {
        if self.is_revealing() {
            return Err(ChatError::RevealInProgress);
        }
        if text.chars().count() > self.config.max_input_chars {
            return Err(ChatError::MessageTooLong(self.config.max_input_chars));
        }
        self.input.clear();
        self.input.push_str(text);
        Ok(())
    }

    // -- Sending --

    /// Send the input as a visitor message and start revealing the reply.
    ///
    /// Returns the category the message was classified as. On error nothing
    /// changes.
    pub fn submit(&mut self) -> Result<ResponseCategory, ChatError> {
        if !self.open {
            return Err(ChatError::PanelClosed);
        }
        if self.is_revealing() {
            return Err(ChatError::RevealInProgress);
        }
        if self.input.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let text = mem::take(&mut self.input);
        let category = classify(&text);
        self.conversation.push(Message::user(text));

        let reply = select(category);
        self.start_reveal(reply);
        Ok(category)
    }

    // -- Reveal --

    /// Apply one tick from the tick source.
    pub fn on_tick(&mut self, id: RevealId) -> TickOutcome {
        let Some(active) = self.active.as_mut() else {
            tracing::trace!(%id, "Tick with no active reveal");
            return TickOutcome::Stale;
        };
        if active.id != id {
            tracing::trace!(%id, active = %active.id, "Stale tick ignored");
            return TickOutcome::Stale;
        }

        self.scroll_requested = true;
        if let RevealStep::Append(ch) = active.reveal.step() {
            self.conversation.grow_last(ch);
            return TickOutcome::Appended(ch);
        }

        if let Some(done) = self.active.take() {
            self.conversation.finalize_last(done.reveal.full_text());
            tracing::debug!(id = %done.id, chars = done.reveal.len(), "Reveal finished");
        }
        TickOutcome::Finished
    }

    /// Returns true once per tick (or new reveal) so the view can follow the
    /// newest text.
    pub fn take_scroll_request(&mut self) -> bool {
        mem::take(&mut self.scroll_requested)
    }

    fn start_reveal(&mut self, reply: &str) {
        // Superseding drops the previous handle and stops its ticks.
        self.finish_active();

        let id = RevealId(self.next_id);
        self.next_id += 1;

        let mut reveal = Reveal::new(reply);
        reveal.begin();
        self.conversation.push(Message::bot_revealing());

        let handle = self.ticks.start(id, self.config.tick());
        tracing::debug!(%id, chars = reveal.len(), "Reveal started");
        self.active = Some(ActiveReveal {
            id,
            reveal,
            _handle: handle,
        });
        self.scroll_requested = true;
    }

    fn finish_active(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.reveal.finish_now();
            self.conversation.finalize_last(active.reveal.full_text());
            tracing::debug!(id = %active.id, "Reveal cut short");
        }
    }
}
