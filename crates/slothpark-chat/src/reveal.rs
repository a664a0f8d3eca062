//! Character-by-character reveal of a reply.
//!
//! Lifecycle:
//! - Idle -> Revealing (reply dispatched)
//! - Revealing -> Revealing (one character appended per tick)
//! - Revealing -> Done (tick after the last character)

use std::fmt;

/// Phase of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealState {
    Idle,
    Revealing,
    Done,
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealState::Idle => write!(f, "Idle"),
            RevealState::Revealing => write!(f, "Revealing"),
            RevealState::Done => write!(f, "Done"),
        }
    }
}

/// Result of advancing a reveal by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// The next character to append to the visible text.
    Append(char),
    /// Every character has been shown; the message can be finalized.
    Finished,
    /// The reveal is not running (not begun, or already done).
    Inactive,
}

/// Progressive disclosure of one reply string.
#[derive(Debug, Clone)]
pub struct Reveal {
    full: String,
    chars: Vec<char>,
    cursor: usize,
    state: RevealState,
}

impl Reveal {
    pub fn new(full: impl Into<String>) -> Self {
        let full = full.into();
        let chars = full.chars().collect();
        Self {
            full,
            chars,
            cursor: 0,
            state: RevealState::Idle,
        }
    }

    /// Move from Idle to Revealing. Returns false from any other state.
    pub fn begin(&mut self) -> bool {
        if self.state == RevealState::Idle {
            self.state = RevealState::Revealing;
            true
        } else {
            false
        }
    }

    /// Advance by one tick.
    pub fn step(&mut self) -> RevealStep {
        if self.state != RevealState::Revealing {
            return RevealStep::Inactive;
        }
        match self.chars.get(self.cursor) {
            Some(&ch) => {
                self.cursor += 1;
                RevealStep::Append(ch)
            }
            None => {
                self.state = RevealState::Done;
                self.cursor = 0;
                RevealStep::Finished
            }
        }
    }

    /// Jump straight to Done, whatever was shown so far.
    pub fn finish_now(&mut self) {
        self.state = RevealState::Done;
        self.cursor = 0;
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Number of characters shown so far (reset to 0 once done).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn full_text(&self) -> &str {
        &self.full
    }

    /// Length of the reply in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
