use std::collections::BTreeSet;

use crate::keywords::KeywordSet;
use crate::profile::Skills;
use crate::selection::ranking::Scorer;

/// Flattens the skill categories in declaration order, drops blanks and
/// case-insensitive duplicates (first casing wins), then orders by score.
///
/// Unmatched skills are never dropped: they follow the matched ones in their
/// original order, so an empty job description returns the full list as is.
pub fn rank_skills<S: Scorer>(scorer: &S, skills: &Skills, keywords: &KeywordSet) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut scored: Vec<(f64, &str)> = skills
        .iter()
        .map(|skill| skill.trim())
        .filter(|skill| !skill.is_empty())
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .map(|skill| (scorer.score_value(&scorer.score(skill, keywords)), skill))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .map(|(_, skill)| skill.to_string())
        .collect()
}
