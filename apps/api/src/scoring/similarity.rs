//! TF-IDF cosine-similarity scorer over the JD/resume pair.

use std::collections::{BTreeMap, BTreeSet};

use super::normalize::normalize;
use super::{round2, ScoreBreakdown, Scorer};

/// Scores a resume as 100 × cosine similarity between TF-IDF vectors built
/// over a corpus of exactly the two input documents, with smoothed IDF
/// (`ln((1+n)/(1+df)) + 1`, n = 2) and L2-normalized vectors.
///
/// Because the corpus is the pair itself, scores are not comparable across
/// separately scored resumes — inherited behavior, kept as-is.
pub struct TfIdfScorer;

impl Scorer for TfIdfScorer {
    fn score(&self, jd_text: &str, resume_text: &str) -> ScoreBreakdown {
        let jd = normalize(jd_text);
        let resume = normalize(resume_text);
        ScoreBreakdown {
            score: round2(100.0 * pair_cosine(&jd, &resume)),
            matched: Vec::new(),
            missing: Vec::new(),
        }
    }

    fn backend(&self) -> &'static str {
        "similarity"
    }

    fn ranks_by_score(&self) -> bool {
        true
    }
}

/// Cosine similarity of the TF-IDF vectors of two normalized documents.
/// Returns 0.0 when either document is empty or the vectors share no terms.
fn pair_cosine(a: &str, b: &str) -> f64 {
    let counts_a = term_counts(a);
    let counts_b = term_counts(b);
    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    let vocab: BTreeSet<&str> = counts_a.keys().chain(counts_b.keys()).copied().collect();

    let n = 2.0; // corpus size is always the pair
    let mut vec_a = Vec::with_capacity(vocab.len());
    let mut vec_b = Vec::with_capacity(vocab.len());
    for term in &vocab {
        let tf_a = counts_a.get(term).copied().unwrap_or(0.0);
        let tf_b = counts_b.get(term).copied().unwrap_or(0.0);
        let df = (tf_a > 0.0) as u8 + (tf_b > 0.0) as u8;
        let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
        vec_a.push(tf_a * idf);
        vec_b.push(tf_b * idf);
    }

    let dot: f64 = vec_a.iter().zip(&vec_b).map(|(x, y)| x * y).sum();
    let norm_a = vec_a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = vec_b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn term_counts(text: &str) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for term in text.split_whitespace() {
        *counts.entry(term).or_insert(0.0) += 1.0;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_hundred() {
        let breakdown = TfIdfScorer.score("python and sql developer", "python and sql developer");
        assert_eq!(breakdown.score, 100.0);
    }

    #[test]
    fn test_normalization_is_applied_before_comparison() {
        let breakdown = TfIdfScorer.score("Python, SQL!", "python   sql");
        assert_eq!(breakdown.score, 100.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let breakdown = TfIdfScorer.score("python sql tableau", "carpentry plumbing welding");
        assert_eq!(breakdown.score, 0.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(TfIdfScorer.score("", "").score, 0.0);
        assert_eq!(TfIdfScorer.score("python", "").score, 0.0);
        assert_eq!(TfIdfScorer.score("", "python").score, 0.0);
        assert_eq!(TfIdfScorer.score("!!!", "???").score, 0.0);
    }

    #[test]
    fn test_score_is_bounded() {
        let pairs = [
            ("python sql", "python"),
            ("python python python", "python"),
            ("a b c d e", "c d e f g"),
            ("data analysis with excel and tableau", "excel tableau excel"),
        ];
        for (jd, resume) in pairs {
            let score = TfIdfScorer.score(jd, resume).score;
            assert!(
                (0.0..=100.0).contains(&score),
                "score {score} out of bounds for ({jd:?}, {resume:?})"
            );
        }
    }

    #[test]
    fn test_partial_overlap_scores_between_bounds() {
        let score = TfIdfScorer.score("python sql tableau", "python java excel").score;
        assert!(score > 0.0 && score < 100.0, "score was {score}");
    }

    #[test]
    fn test_no_skill_breakdown() {
        let breakdown = TfIdfScorer.score("python sql", "python");
        assert!(breakdown.matched.is_empty());
        assert!(breakdown.missing.is_empty());
    }

    #[test]
    fn test_ranks_by_score() {
        assert!(TfIdfScorer.ranks_by_score());
        assert_eq!(TfIdfScorer.backend(), "similarity");
    }
}
