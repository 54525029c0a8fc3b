//! # Record Types
//!
//! Rows of the two knowledge tables. Field names match the CSV headers, and any cell that
//! is absent from a row deserializes to an empty string.

use serde::{Deserialize, Serialize};

/// A row of the health knowledge table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthRecord {
    /// Free text searched by the chat matcher.
    pub keyword: String,
    pub disease_name: String,
    pub symptoms: String,
    pub solution: String,
    pub medicine_recommendation: String,
    pub disclaimer: String,
}

/// A row of the medicine table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicineRecord {
    pub medicine_name: String,
    pub uses: String,
    pub side_effects: String,
    pub disclaimer: String,
}
