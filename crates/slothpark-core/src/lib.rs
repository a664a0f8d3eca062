//! Shared configuration and error types for Sloth Park.

pub mod config;
pub mod error;

pub use config::{expand_home, ChatConfig, GeneralConfig, ReopenPolicy, SlothParkConfig};
pub use error::{Result, SlothParkError};
