//! # Response Texts
//!
//! Replies returned in-band to the caller: formatted medicine lookups and the fixed
//! fallback messages used when a lookup or an external dependency comes up empty.

use crate::types::MedicineRecord;

/// Returned by chat when no AI provider could be configured at startup.
pub const NOT_CONFIGURED_MESSAGE: &str = "AI Model configured नहीं है। कृपया API key जांचें।";

/// Returned by chat when the AI provider call fails.
pub const GENERATION_FAILED_MESSAGE: &str = "क्षमा करें, AI से संपर्क करने में कोई समस्या हुई।";

pub const MEDICINE_NOT_FOUND_MESSAGE: &str =
    "Sorry, we could not find information on this medicine.";

pub const MEDICINE_NOT_IDENTIFIED_MESSAGE: &str = "Could not identify any medicine from the filename. Please rename the file to a medicine name (e.g., 'crocin.jpg').";

/// Formats a medicine found by name.
pub fn format_medicine(record: &MedicineRecord) -> String {
    format!(
        "Uses: {}\n\nSide Effects: {}\n\n**Disclaimer:** {}",
        record.uses, record.side_effects, record.disclaimer
    )
}

/// Formats a medicine identified from an uploaded file's name.
pub fn format_identified_medicine(record: &MedicineRecord) -> String {
    format!(
        "**Medicine Identified from Filename:** {}\n\n{}",
        record.medicine_name,
        format_medicine(record)
    )
}
