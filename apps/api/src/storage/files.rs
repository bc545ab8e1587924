//! Data-directory layout: resumes dir, JD text file, results file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::results::ResultStore;

/// Handle on the service's on-disk layout. Cloned freely into handlers.
#[derive(Debug, Clone)]
pub struct Storage {
    resumes_dir: PathBuf,
    jd_path: PathBuf,
    pub results: ResultStore,
}

impl Storage {
    /// Creates the layout under `data_dir` if it does not exist yet:
    /// `resumes/`, `job_description/jd.txt`, `results.csv`.
    pub fn init(data_dir: &Path) -> std::io::Result<Self> {
        let resumes_dir = data_dir.join("resumes");
        let jd_dir = data_dir.join("job_description");
        std::fs::create_dir_all(&resumes_dir)?;
        std::fs::create_dir_all(&jd_dir)?;
        Ok(Storage {
            resumes_dir,
            jd_path: jd_dir.join("jd.txt"),
            results: ResultStore::new(data_dir.join("results.csv")),
        })
    }

    /// Persists an uploaded resume under its sanitized filename and returns
    /// the stored path. Same-named uploads overwrite; files are retained
    /// indefinitely (no cleanup, no dedup).
    pub async fn save_resume(&self, filename: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.resumes_dir.join(sanitize_filename(filename));
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }

    /// Replaces the stored job description in place.
    pub async fn save_job_description(&self, data: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(&self.jd_path, data).await
    }

    /// Returns the active job description, or `None` when no admin has
    /// uploaded one yet.
    pub async fn load_job_description(&self) -> std::io::Result<Option<String>> {
        match tokio::fs::read_to_string(&self.jd_path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Keeps only the final path component and replaces anything outside
/// `[A-Za-z0-9._-]`, so an uploaded name cannot escape the resumes
/// directory or smuggle in `..`.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}
