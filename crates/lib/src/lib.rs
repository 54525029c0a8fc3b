//! # Arogya
//!
//! The core of a small health assistant backend. It keeps two read-only CSV tables in
//! memory (health knowledge and medicines), looks user queries up against them, and, for
//! chat, asks an external AI provider to answer with the matched row as context.
//!
//! The HTTP surface lives in the `arogya-server` crate; everything here is transport
//! independent and can be driven directly through [`Assistant`].

pub mod assistant;
pub mod dataset;
pub mod errors;
pub mod generation;
pub mod matcher;
pub mod prompts;
pub mod providers;
pub mod types;

pub use assistant::Assistant;
pub use dataset::Dataset;
pub use errors::{DatasetError, PromptError};
pub use generation::{Generation, GenerationClient};
pub use types::{HealthRecord, MedicineRecord};
