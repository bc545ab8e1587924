//! Resume-vs-JD scoring — pluggable, trait-based scorer backends.
//!
//! Default: `SkillOverlapScorer` (fixed vocabulary, matched/missing breakdown).
//! Alternative: `TfIdfScorer` (cosine similarity over the document pair).
//!
//! `AppState` holds an `Arc<dyn Scorer>`, selected at startup via the
//! SCORER environment variable.

pub mod normalize;
pub mod similarity;
pub mod skills;

pub use similarity::TfIdfScorer;
pub use skills::SkillOverlapScorer;

/// Outcome of scoring one resume against the active job description.
///
/// `matched`/`missing` are empty under the similarity backend, which has
/// no notion of individual skills.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// 0–100, rounded to two decimals.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// The scorer trait. Implement this to swap backends without touching
/// the handlers or the pipeline.
///
/// Carried in `AppState` as `Arc<dyn Scorer>`.
pub trait Scorer: Send + Sync {
    fn score(&self, jd_text: &str, resume_text: &str) -> ScoreBreakdown;

    /// Label for transparency in responses and logs ("skills" | "similarity").
    fn backend(&self) -> &'static str;

    /// Whether a batch should be reordered by descending score.
    /// When false, upload order is preserved.
    fn ranks_by_score(&self) -> bool {
        false
    }
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
