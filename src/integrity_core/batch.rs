//! Loading one company's scoring batch from JSON

use super::types::CompanyBatch;
use std::path::Path;

#[derive(Debug)]
pub enum BatchError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl From<std::io::Error> for BatchError {
    fn from(err: std::io::Error) -> Self {
        BatchError::Io(err)
    }
}

impl From<serde_json::Error> for BatchError {
    fn from(err: serde_json::Error) -> Self {
        BatchError::Serialization(err)
    }
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Io(e) => write!(f, "IO error: {}", e),
            BatchError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(e) => Some(e),
            BatchError::Serialization(e) => Some(e),
        }
    }
}

impl CompanyBatch {
    pub fn from_json(raw: &str) -> Result<Self, BatchError> {
        let batch: CompanyBatch = serde_json::from_str(raw)?;
        Ok(batch)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn trade_count(&self) -> usize {
        self.persons.iter().map(|p| p.trades.len()).sum()
    }
}
