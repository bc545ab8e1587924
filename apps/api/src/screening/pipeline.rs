//! Batch scoring: extracted resume text in, ordered result set out.

use crate::scoring::Scorer;
use crate::storage::ScoreResult;

/// Score at or above which a candidate appears in the admin shortlist.
pub const SHORTLIST_THRESHOLD: f64 = 60.0;

/// An accepted upload: stored filename plus extracted text.
#[derive(Debug, Clone)]
pub struct ResumeText {
    pub name: String,
    pub text: String,
}

/// Scores every resume against the JD and orders the batch: upload order
/// by default, descending score when the backend ranks (ties keep upload
/// order — the sort is stable).
pub fn score_batch(
    scorer: &dyn Scorer,
    jd_text: &str,
    resumes: Vec<ResumeText>,
) -> Vec<ScoreResult> {
    let mut results: Vec<ScoreResult> = resumes
        .into_iter()
        .map(|resume| {
            let breakdown = scorer.score(jd_text, &resume.text);
            ScoreResult {
                name: resume.name,
                score: breakdown.score,
                matched_skills: breakdown.matched.join(", "),
                missing_skills: breakdown.missing.join(", "),
            }
        })
        .collect();

    if scorer.ranks_by_score() {
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    results
}

/// The subset of a result set at or above the shortlist threshold.
pub fn shortlisted(results: &[ScoreResult]) -> Vec<ScoreResult> {
    results
        .iter()
        .filter(|r| r.score >= SHORTLIST_THRESHOLD)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{SkillOverlapScorer, TfIdfScorer};

    fn batch(entries: &[(&str, &str)]) -> Vec<ResumeText> {
        entries
            .iter()
            .map(|(name, text)| ResumeText {
                name: name.to_string(),
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_skill_backend_preserves_upload_order() {
        let results = score_batch(
            &SkillOverlapScorer,
            "python sql",
            batch(&[("low.pdf", "nothing relevant"), ("high.pdf", "python sql")]),
        );
        assert_eq!(results[0].name, "low.pdf");
        assert_eq!(results[0].score, 0.0);
        assert_eq!(results[1].name, "high.pdf");
        assert_eq!(results[1].score, 100.0);
    }

    #[test]
    fn test_similarity_backend_ranks_descending() {
        let results = score_batch(
            &TfIdfScorer,
            "python sql developer",
            batch(&[
                ("weak.pdf", "carpentry plumbing"),
                ("strong.pdf", "python sql developer"),
            ]),
        );
        assert_eq!(results[0].name, "strong.pdf");
        assert_eq!(results[1].name, "weak.pdf");
        assert!(results[0].score >= results[1].score);
    }

    #[test]
    fn test_skill_lists_are_comma_joined() {
        let results = score_batch(
            &SkillOverlapScorer,
            "python sql tableau",
            batch(&[("cand.pdf", "python tableau")]),
        );
        assert_eq!(results[0].matched_skills, "python, tableau");
        assert_eq!(results[0].missing_skills, "sql");
    }

    #[test]
    fn test_empty_batch_yields_empty_results() {
        let results = score_batch(&SkillOverlapScorer, "python", Vec::new());
        assert!(results.is_empty());
    }

    #[test]
    fn test_shortlist_threshold_is_inclusive() {
        let results = vec![
            ScoreResult {
                name: "at.pdf".to_string(),
                score: 60.0,
                matched_skills: String::new(),
                missing_skills: String::new(),
            },
            ScoreResult {
                name: "below.pdf".to_string(),
                score: 59.99,
                matched_skills: String::new(),
                missing_skills: String::new(),
            },
        ];
        let listed = shortlisted(&results);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "at.pdf");
    }
}
