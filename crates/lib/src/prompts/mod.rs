//! # Prompt Template Modules
//!
//! Every piece of fixed text the service produces lives here, split by purpose:
//! - `chat`: the two chat prompt templates sent to the AI provider.
//! - `responses`: the medicine lookup replies and the fallback messages.

pub mod chat;
pub mod responses;
