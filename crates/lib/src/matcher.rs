//! # Keyword Matcher
//!
//! First-match lookups over the in-memory tables. Matching is case-insensitive and
//! otherwise literal: no ranking, no fuzzy matching, no normalization beyond lowercasing.

use crate::types::{HealthRecord, MedicineRecord};

/// Returns the first health record whose `keyword` contains any whitespace-separated
/// token of `message` as a substring.
///
/// Short tokens such as "a" will match broadly. A message without tokens matches nothing.
pub fn find_health_record<'a>(
    records: &'a [HealthRecord],
    message: &str,
) -> Option<&'a HealthRecord> {
    let message = message.to_lowercase();
    let tokens: Vec<&str> = message.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    records.iter().find(|record| {
        let keyword = record.keyword.to_lowercase();
        tokens.iter().any(|token| keyword.contains(token))
    })
}

/// Returns the first medicine whose name equals `query`, ignoring case.
pub fn find_medicine_by_name<'a>(
    records: &'a [MedicineRecord],
    query: &str,
) -> Option<&'a MedicineRecord> {
    if query.is_empty() {
        return None;
    }
    let query = query.to_lowercase();
    records
        .iter()
        .find(|record| record.medicine_name.to_lowercase() == query)
}

/// Returns the first medicine (table order) whose name occurs inside `filename`,
/// ignoring case. Rows with an empty name are skipped.
pub fn identify_medicine_in_filename<'a>(
    records: &'a [MedicineRecord],
    filename: &str,
) -> Option<&'a MedicineRecord> {
    if filename.is_empty() {
        return None;
    }
    let filename = filename.to_lowercase();
    let name = records
        .iter()
        .map(|record| record.medicine_name.to_lowercase())
        .find(|name| !name.is_empty() && filename.contains(name.as_str()))?;

    find_medicine_by_name(records, &name)
}
