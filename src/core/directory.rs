use std::path::Path;
use thiserror::Error;

use crate::core::filters::matches_query_fields;
use crate::models::SpecialistRecord;

/// Specialist table compiled into the binary
const BUILTIN_DIRECTORY: &str = include_str!("../../data/specialists.json");

/// Errors that can occur while loading the directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read directory file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid directory data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Directory contains no specialists")]
    Empty,
}

/// Immutable specialist directory
///
/// Loaded once at startup and shared behind an `Arc`; there is no mutation API.
#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<SpecialistRecord>,
}

impl Directory {
    /// Wrap an in-memory set of records, keeping their order
    pub fn new(records: Vec<SpecialistRecord>) -> Self {
        Self { records }
    }

    /// Load the compiled-in table
    pub fn builtin() -> Result<Self, DirectoryError> {
        Self::from_json(BUILTIN_DIRECTORY)
    }

    /// Parse a JSON array of specialist records
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<SpecialistRecord> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(DirectoryError::Empty);
        }
        Ok(Self::new(records))
    }

    /// Load a JSON fixture from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from a fixture when one is configured, otherwise the builtin table
    pub fn load(path: Option<&str>) -> Result<Self, DirectoryError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    /// All entries whose specialty equals `specialty` and whose region
    /// contains `region`, in directory order
    pub fn lookup(&self, specialty: &str, region: &str) -> Vec<&SpecialistRecord> {
        self.records
            .iter()
            .filter(|record| matches_query_fields(record, specialty, region))
            .collect()
    }

    pub fn records(&self) -> &[SpecialistRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
