use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TailorConfig;
use crate::keywords::tokenize::{normalize, tokenize, Token};
use crate::keywords::vocabulary::{is_non_title_word, is_role_noun, is_stop_word, TECH_PHRASES};

/// A salient term of a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    /// occurrences * phrase boost * proper-noun boost
    pub weight: f64,
    pub occurrences: usize,
    /// Token position of the first occurrence; the tie-breaker everywhere.
    pub first_seen: usize,
    pub phrase: bool,
    pub proper_noun: bool,
}

/// A role-shaped phrase ("Senior Data Engineer") seen in a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCandidate {
    /// Display form built from the first occurrence's casing.
    pub title: String,
    pub key: String,
    pub occurrences: usize,
    pub first_seen: usize,
}

/// Weighted vocabulary of one job description. Lives for one tailoring call.
///
/// Keywords are stored in first-appearance order; lookups go through a
/// `BTreeMap` so nothing depends on hash iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
    index: BTreeMap<String, usize>,
    roles: Vec<RoleCandidate>,
    max_phrase_words: usize,
}

impl KeywordSet {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn get(&self, term: &str) -> Option<&Keyword> {
        self.index.get(term).map(|&idx| &self.keywords[idx])
    }

    pub fn weight(&self, term: &str) -> Option<f64> {
        self.get(term).map(|k| k.weight)
    }

    /// Keywords in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    /// Longest phrase (in words) the scorer has to look for.
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// The `n` heaviest keywords, ties broken by first appearance.
    pub fn top(&self, n: usize) -> Vec<&Keyword> {
        let mut ranked: Vec<&Keyword> = self.keywords.iter().collect();
        ranked.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then(a.first_seen.cmp(&b.first_seen))
        });
        ranked.truncate(n);
        ranked
    }

    pub fn roles(&self) -> &[RoleCandidate] {
        &self.roles
    }

    /// Most frequent role phrase, earliest on ties.
    pub fn top_role(&self) -> Option<&RoleCandidate> {
        self.roles.iter().reduce(|best, candidate| {
            if candidate.occurrences > best.occurrences {
                candidate
            } else {
                best
            }
        })
    }

    fn slot(&mut self, term: &str, position: usize, phrase: bool) -> usize {
        if let Some(&idx) = self.index.get(term) {
            return idx;
        }
        let idx = self.keywords.len();
        self.keywords.push(Keyword {
            term: term.to_string(),
            weight: 0.0,
            occurrences: 0,
            first_seen: position,
            phrase,
            proper_noun: false,
        });
        self.index.insert(term.to_string(), idx);
        idx
    }
}

/// Turns raw job-description text into a [`KeywordSet`].
///
/// One pass over the tokens; the phrase window is bounded by the longest
/// known phrase, so work stays linear in the input.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    min_token_len: usize,
    phrase_boost: f64,
    proper_noun_boost: f64,
    phrases: BTreeSet<String>,
    max_phrase_words: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::from_config(&TailorConfig::v0())
    }
}

impl KeywordExtractor {
    pub fn from_config(config: &TailorConfig) -> Self {
        let phrases: BTreeSet<String> = TECH_PHRASES
            .iter()
            .map(|p| p.to_string())
            .chain(config.extra_phrases.iter().map(|p| normalize(p).join(" ")))
            .filter(|p| p.contains(' '))
            .collect();

        let max_phrase_words = phrases
            .iter()
            .map(|p| p.split(' ').count())
            .max()
            .unwrap_or(1);

        Self {
            min_token_len: config.min_token_len,
            phrase_boost: config.phrase_boost,
            proper_noun_boost: config.proper_noun_boost,
            phrases,
            max_phrase_words,
        }
    }

    /// Keeps a token when it is not a stop-word, is long enough and carries
    /// at least one letter. `3d`, `k8s` and `c++` pass; `2`, `2024` and `5+`
    /// do not.
    pub fn is_salient(&self, term: &str) -> bool {
        !is_stop_word(term)
            && term.chars().count() >= self.min_token_len
            && term.chars().any(char::is_alphabetic)
    }

    pub fn extract(&self, text: &str) -> KeywordSet {
        let tokens = tokenize(text);
        let mut set = KeywordSet {
            max_phrase_words: self.max_phrase_words,
            ..KeywordSet::default()
        };
        let mut role_index: BTreeMap<String, usize> = BTreeMap::new();

        for (i, token) in tokens.iter().enumerate() {
            if self.is_salient(&token.norm) {
                let slot = set.slot(&token.norm, i, false);
                let keyword = &mut set.keywords[slot];
                keyword.occurrences += 1;
                if token.is_capitalized() && !token.sentence_start {
                    keyword.proper_noun = true;
                }
            }

            for n in 2..=self.max_phrase_words {
                let Some(window) = phrase_window(&tokens, i, n) else {
                    break;
                };
                let key = join_norms(window);
                if self.phrases.contains(&key) {
                    let slot = set.slot(&key, i, true);
                    set.keywords[slot].occurrences += 1;
                }
            }

            if is_role_noun(&token.norm) {
                self.collect_role(&tokens, i, &mut set.roles, &mut role_index);
            }
        }

        for keyword in &mut set.keywords {
            let mut weight = keyword.occurrences as f64;
            if keyword.phrase {
                weight *= self.phrase_boost;
            }
            if keyword.proper_noun {
                weight *= self.proper_noun_boost;
            }
            keyword.weight = weight;
        }

        debug!(
            tokens = tokens.len(),
            keywords = set.keywords.len(),
            phrases = set.keywords.iter().filter(|k| k.phrase).count(),
            roles = set.roles.len(),
            "keywords extracted"
        );

        set
    }

    // Up to two salient tokens directly before a role noun, same sentence,
    // stopping at words that describe the role's relation to the candidate.
    fn collect_role(
        &self,
        tokens: &[Token<'_>],
        noun: usize,
        roles: &mut Vec<RoleCandidate>,
        role_index: &mut BTreeMap<String, usize>,
    ) {
        let mut start = noun;
        while start > 0 && noun - start < 2 {
            let previous = &tokens[start - 1].norm;
            if tokens[start].sentence_start
                || !self.is_salient(previous)
                || is_non_title_word(previous)
            {
                break;
            }
            start -= 1;
        }
        if start == noun {
            return;
        }

        let window = &tokens[start..=noun];
        let key = join_norms(window);
        match role_index.get(&key) {
            Some(&idx) => roles[idx].occurrences += 1,
            None => {
                let title = window
                    .iter()
                    .map(|t| display_word(t.raw))
                    .collect::<Vec<_>>()
                    .join(" ");
                role_index.insert(key.clone(), roles.len());
                roles.push(RoleCandidate {
                    title,
                    key,
                    occurrences: 1,
                    first_seen: start,
                });
            }
        }
    }
}

/// `tokens[start..start + n]` when it stays inside one sentence.
pub(crate) fn phrase_window<'t, 'a>(
    tokens: &'t [Token<'a>],
    start: usize,
    n: usize,
) -> Option<&'t [Token<'a>]> {
    let window = tokens.get(start..start + n)?;
    if window[1..].iter().any(|t| t.sentence_start) {
        return None;
    }
    Some(window)
}

pub(crate) fn join_norms(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|t| t.norm.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

// Lower-case words get a capital; words with their own casing (AWS, iOS) keep it.
fn display_word(raw: &str) -> String {
    if raw.chars().any(char::is_uppercase) {
        return raw.to_string();
    }
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
