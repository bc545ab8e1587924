//! CSV-backed result store. One row per scored resume; the whole file is
//! replaced on every scoring run — no append, no versioning, no history.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One scored resume. Field order defines the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub name: String,
    /// 0–100, two decimals.
    pub score: f64,
    /// Comma-joined skill lists; empty under the similarity backend.
    pub matched_skills: String,
    pub missing_skills: String,
}

const HEADER: [&str; 4] = ["name", "score", "matched_skills", "missing_skills"];

#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: PathBuf) -> Self {
        ResultStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Overwrites the results file with `results`. The header row is always
    /// written, so an empty result set still produces a well-formed file.
    pub fn save(&self, results: &[ScoreResult]) -> Result<(), AppError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADER)?;
        for row in results {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Loads the last saved result set; empty when nothing has been saved
    /// yet. A file whose header does not match the expected schema is an
    /// error rather than a stream of malformed records.
    pub fn load(&self) -> Result<Vec<ScoreResult>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(anyhow!("results file has unexpected columns: {headers:?}").into());
        }
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }
}
