//! # Dataset Store
//!
//! Loads the health and medicine tables from CSV files once at startup. The resulting
//! [`Dataset`] is read-only and shared between requests.

use crate::{
    errors::DatasetError,
    types::{HealthRecord, MedicineRecord},
};
use serde::de::DeserializeOwned;
use std::{fs::File, io::ErrorKind, path::Path};
use tracing::{info, warn};

/// The two in-memory knowledge tables, in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    health: Vec<HealthRecord>,
    medicines: Vec<MedicineRecord>,
}

impl Dataset {
    /// Builds a dataset from rows that are already in memory.
    pub fn new(health: Vec<HealthRecord>, medicines: Vec<MedicineRecord>) -> Self {
        Self { health, medicines }
    }

    /// A dataset with both tables empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads both tables from disk.
    ///
    /// A missing file yields an empty table and a warning. Any other I/O or parse
    /// failure is returned to the caller.
    pub fn load(
        health_path: impl AsRef<Path>,
        medicine_path: impl AsRef<Path>,
    ) -> Result<Self, DatasetError> {
        let health = load_records(health_path)?;
        let medicines = load_records(medicine_path)?;
        Ok(Self { health, medicines })
    }

    pub fn health(&self) -> &[HealthRecord] {
        &self.health
    }

    pub fn medicines(&self) -> &[MedicineRecord] {
        &self.medicines
    }
}

/// Reads every row of a CSV file with a header line into `T`.
pub fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, DatasetError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path_str, "Dataset file not found, continuing with an empty table.");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(DatasetError::Io {
                path: path_str,
                source,
            })
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let parse_error = |source| DatasetError::Parse {
        path: path_str.clone(),
        source,
    };
    let headers = reader.headers().map_err(parse_error)?.clone();

    let mut records: Vec<T> = Vec::new();
    for row in reader.records() {
        let mut row = row.map_err(parse_error)?;
        // Rows shorter or longer than the header line are normalized to its width.
        row.truncate(headers.len());
        while row.len() < headers.len() {
            row.push_field("");
        }
        records.push(row.deserialize(Some(&headers)).map_err(parse_error)?);
    }

    info!(path = %path_str, rows = records.len(), "Dataset loaded.");
    Ok(records)
}
