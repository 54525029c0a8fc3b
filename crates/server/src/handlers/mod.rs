//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `arogya-server`.

pub mod assistant;
pub mod general;
pub mod pages;

// Re-export the handlers so the router can reach them under a single `handlers::` path.
pub use assistant::*;
pub use general::*;
pub use pages::*;

use super::state::AppState;
