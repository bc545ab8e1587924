//! On-disk state: uploaded resumes, the active job description, and the
//! results file. All of it lives under one configured data directory and
//! is reached only through the `Storage` value built at startup.

pub mod files;
pub mod results;

pub use files::Storage;
pub use results::ScoreResult;
