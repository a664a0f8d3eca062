//! Scripted chat engine for the Sloth Park mascot.
//!
//! Classifies visitor questions by keyword, picks a canned reply and reveals
//! it one character per tick to simulate a very slow talker.

pub mod classifier;
pub mod conversation;
pub mod error;
pub mod panel;
pub mod responses;
pub mod reveal;
pub mod ticker;
pub mod types;

pub use classifier::{classify, KeywordRule, RULES};
pub use conversation::Conversation;
pub use error::ChatError;
pub use panel::{ChatPanel, TickOutcome};
pub use responses::{candidates, select, select_with};
pub use reveal::{Reveal, RevealState, RevealStep};
pub use ticker::{RevealHandle, TickSource, TokioTicks};
pub use types::{Message, ResponseCategory, RevealId, Sender};
