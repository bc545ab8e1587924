//! Fixed-vocabulary skill-overlap scorer (the default backend).

use std::collections::BTreeSet;

use super::{round2, ScoreBreakdown, Scorer};

/// Closed vocabulary of skill terms, matched case-insensitively against
/// whitespace tokens. Multi-word entries ("power bi", "machine learning")
/// can never equal a single token, so they never match — inherited
/// behavior, kept as-is.
const SKILLS: &[&str] = &[
    "python",
    "java",
    "sql",
    "c++",
    "excel",
    "power bi",
    "tableau",
    "machine learning",
    "deep learning",
    "data analysis",
];

/// Scores a resume by the share of the JD's skill set it covers.
///
/// score = 100 × |JD ∩ resume| / |JD skills|, or 0 when the JD yields no
/// skills at all. Deterministic and order-independent; the matched and
/// missing lists come out sorted.
pub struct SkillOverlapScorer;

impl Scorer for SkillOverlapScorer {
    fn score(&self, jd_text: &str, resume_text: &str) -> ScoreBreakdown {
        let jd_skills = extract_skills(jd_text);
        let resume_skills = extract_skills(resume_text);

        let matched: Vec<String> = jd_skills
            .intersection(&resume_skills)
            .map(|s| s.to_string())
            .collect();
        let missing: Vec<String> = jd_skills
            .difference(&resume_skills)
            .map(|s| s.to_string())
            .collect();

        let score = if jd_skills.is_empty() {
            0.0
        } else {
            round2(matched.len() as f64 / jd_skills.len() as f64 * 100.0)
        };

        ScoreBreakdown {
            score,
            matched,
            missing,
        }
    }

    fn backend(&self) -> &'static str {
        "skills"
    }
}

/// Intersects the text's whitespace tokens with the skill vocabulary.
fn extract_skills(text: &str) -> BTreeSet<&'static str> {
    let words: BTreeSet<String> = text
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    SKILLS
        .iter()
        .copied()
        .filter(|skill| words.contains(*skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_coverage_scores_fifty() {
        let breakdown = SkillOverlapScorer.score(
            "Looking for Python and SQL skills",
            "Experienced in Python and Excel",
        );
        assert_eq!(breakdown.score, 50.00);
        assert_eq!(breakdown.matched, vec!["python"]);
        assert_eq!(breakdown.missing, vec!["sql"]);
    }

    #[test]
    fn test_empty_jd_skill_set_scores_zero() {
        let breakdown =
            SkillOverlapScorer.score("We want a great communicator", "python sql tableau");
        assert_eq!(breakdown.score, 0.0);
        assert!(breakdown.matched.is_empty());
        assert!(breakdown.missing.is_empty());
    }

    #[test]
    fn test_zero_overlap_scores_zero() {
        let breakdown = SkillOverlapScorer.score("python sql", "carpentry and plumbing");
        assert_eq!(breakdown.score, 0.0);
        assert!(breakdown.matched.is_empty());
        assert_eq!(breakdown.missing, vec!["python", "sql"]);
    }

    #[test]
    fn test_full_coverage_scores_hundred() {
        let breakdown = SkillOverlapScorer.score("python sql tableau", "tableau sql python java");
        assert_eq!(breakdown.score, 100.0);
        assert_eq!(breakdown.matched, vec!["python", "sql", "tableau"]);
        assert!(breakdown.missing.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let breakdown = SkillOverlapScorer.score("PYTHON", "Python");
        assert_eq!(breakdown.score, 100.0);
    }

    #[test]
    fn test_order_independent() {
        let a = SkillOverlapScorer.score("python sql tableau", "sql python");
        let b = SkillOverlapScorer.score("tableau sql python", "python sql");
        assert_eq!(a, b);
    }

    #[test]
    fn test_multi_word_vocabulary_entries_never_match_tokens() {
        // "machine learning" splits into two tokens, neither of which is in
        // the vocabulary on its own.
        let breakdown = SkillOverlapScorer.score("machine learning", "machine learning");
        assert_eq!(breakdown.score, 0.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 1 of 3 skills covered → 33.33
        let breakdown = SkillOverlapScorer.score("python sql tableau", "python only");
        assert_eq!(breakdown.score, 33.33);
    }

    #[test]
    fn test_does_not_rank_by_score() {
        assert!(!SkillOverlapScorer.ranks_by_score());
        assert_eq!(SkillOverlapScorer.backend(), "skills");
    }
}
