use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Which scorer backend the service runs with. The two are mutually
/// exclusive: a deployment picks one at startup and every batch in that
/// deployment is scored the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    /// Fixed-vocabulary skill overlap with matched/missing breakdown.
    SkillOverlap,
    /// TF-IDF cosine similarity over the JD/resume pair.
    TfIdf,
}

impl ScorerKind {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "skills" => Ok(ScorerKind::SkillOverlap),
            "similarity" => Ok(ScorerKind::TfIdf),
            other => bail!("SCORER must be 'skills' or 'similarity', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Both shared secrets are required: they are never hardcoded.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub admin_password: String,
    pub results_token: String,
    pub scorer: ScorerKind,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: PathBuf::from(
                std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            ),
            admin_password: require_env("ADMIN_PASSWORD")?,
            results_token: require_env("RESULTS_TOKEN")?,
            scorer: ScorerKind::parse(
                &std::env::var("SCORER").unwrap_or_else(|_| "skills".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
