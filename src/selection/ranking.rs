use crate::keywords::extractor::{join_norms, phrase_window};
use crate::keywords::{tokenize, KeywordSet};
use crate::profile::Bullet;

/// Detailed scoring components for one piece of candidate text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDetails {
    /// Distinct keywords hit, in order of first hit.
    pub matched_terms: Vec<String>,
    /// Keyword hits counting repeats.
    pub term_matches: usize,
    pub weight_sum: f64,
}

pub trait Scorer {
    fn score(&self, text: &str, keywords: &KeywordSet) -> ScoreDetails;

    /// No length normalization: more genuine hits rank higher.
    fn score_value(&self, details: &ScoreDetails) -> f64 {
        debug_assert!(details.weight_sum >= 0.0, "negative score {}", details.weight_sum);
        details.weight_sum
    }
}

/// v0: sum of keyword weights over every token (and phrase) occurrence.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordScorer;

impl Scorer for KeywordScorer {
    fn score(&self, text: &str, keywords: &KeywordSet) -> ScoreDetails {
        let tokens = tokenize(text);
        let mut details = ScoreDetails {
            matched_terms: Vec::new(),
            term_matches: 0,
            weight_sum: 0.0,
        };

        if keywords.is_empty() {
            return details;
        }

        for (i, token) in tokens.iter().enumerate() {
            record(&mut details, keywords, &token.norm);

            for n in 2..=keywords.max_phrase_words() {
                let Some(window) = phrase_window(&tokens, i, n) else {
                    break;
                };
                record(&mut details, keywords, &join_norms(window));
            }
        }

        details
    }
}

fn record(details: &mut ScoreDetails, keywords: &KeywordSet, term: &str) {
    if let Some(weight) = keywords.weight(term) {
        details.weight_sum += weight;
        details.term_matches += 1;
        if !details.matched_terms.iter().any(|t| t == term) {
            details.matched_terms.push(term.to_string());
        }
    }
}

/// Score with the default scorer.
pub fn score(text: &str, keywords: &KeywordSet) -> f64 {
    let scorer = KeywordScorer;
    scorer.score_value(&scorer.score(text, keywords))
}

/// Internal: a bullet that has been scored but not yet selected.
#[derive(Debug, Clone)]
pub struct ScoredBullet<'a> {
    pub bullet: &'a Bullet,
    /// Position in the entry as entered.
    pub position: usize,
    pub score: f64,
    pub details: ScoreDetails,
}

/// Bullets of one entry, best first.
#[derive(Debug, Clone)]
pub struct RankedBullets<'a> {
    pub ranked: Vec<ScoredBullet<'a>>,
    /// No bullet matched anything; `ranked` is in entry order.
    pub all_zero: bool,
}

/// Scores and orders the non-blank bullets of one entry.
///
/// Stable sort by descending score, so equal scores keep entry order. When
/// nothing matches, entry order is kept as is.
pub fn rank_bullets<'a, S: Scorer>(
    scorer: &S,
    bullets: &'a [Bullet],
    keywords: &KeywordSet,
) -> RankedBullets<'a> {
    let mut ranked: Vec<ScoredBullet<'a>> = bullets
        .iter()
        .enumerate()
        .filter(|(_, bullet)| !bullet.text.trim().is_empty())
        .map(|(position, bullet)| {
            let details = scorer.score(&bullet.text, keywords);
            let score = scorer.score_value(&details);
            ScoredBullet {
                bullet,
                position,
                score,
                details,
            }
        })
        .collect();

    let all_zero = ranked.iter().all(|b| b.score == 0.0);
    if !all_zero {
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    debug_assert!(ranked.windows(2).all(|w| {
        let (a, b) = (&w[0], &w[1]);
        a.score > b.score || (a.score == b.score && a.position < b.position)
    }));

    RankedBullets { ranked, all_zero }
}
