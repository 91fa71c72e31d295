use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ContentVersion, EntryId};

/// Tailored preview of a master profile. Recomputed wholesale on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoredResume {
    pub target_title: String,
    pub summary: String,
    pub experience: Vec<TailoredExperience>,
    pub projects: Vec<TailoredProject>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredExperience {
    pub company: String,
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredProject {
    pub name: String,
    pub bullets: Vec<String>,
}

/// Where the target title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    /// Supplied with the job description.
    Explicit,
    /// Role phrase found in the job text.
    Derived,
    /// Most recent experience entry.
    RecentExperience,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub term: String,
    pub weight: f64,
}

/// Explanation for what one experience or project entry kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryWhy {
    pub entry_id: EntryId,
    pub bullets_considered: usize,
    pub bullets_selected: usize,
    /// Keywords hit by the kept bullets, in order of first hit.
    pub matched_terms: Vec<String>,
    pub term_matches: usize,
}

/// Metadata describing the outcome of one tailoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailorMetadata {
    pub profile_version: ContentVersion,
    pub config_version: ContentVersion,
    pub title_source: TitleSource,
    pub keywords: Vec<KeywordWeight>,
    /// Experience entries first, then projects, in profile order.
    pub entries: Vec<EntryWhy>,

    pub bullets_considered: usize,
    pub bullets_selected: usize,
    pub bullets_excluded_by_cap: usize,
    pub bullets_excluded_by_budget: usize,
}

/// The final result of tailoring a profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailorResult {
    pub resume: TailoredResume,
    pub selection: TailorMetadata,
}
