//! Target title and summary composition. Template plus data substitution only.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::TailorConfig;
use crate::keywords::KeywordSet;
use crate::profile::{Experience, MasterProfile};
use crate::types::{JobDescription, TitleSource};

const SUMMARY_CLOSER: &str = "focused on delivering measurable results.";

#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub target_title: String,
    pub summary: String,
    pub title_source: TitleSource,
}

/// Picks the target title and fills the summary template.
///
/// Title preference: explicit job title, then the top role phrase of the job
/// text, then the most recent experience title, then the configured fallback.
/// `ranked_skills` is the skill ranker's output; its head feeds the summary.
pub fn compose_title_and_summary(
    profile: &MasterProfile,
    job: &JobDescription,
    keywords: &KeywordSet,
    ranked_skills: &[String],
    config: &TailorConfig,
) -> Composition {
    let recent_title = most_recent_experience(profile)
        .map(|e| e.title.trim())
        .filter(|t| !t.is_empty());

    let (target_title, title_source) = if let Some(title) = job.explicit_title() {
        (title.to_string(), TitleSource::Explicit)
    } else if let Some(role) = keywords.top_role() {
        (role.title.clone(), TitleSource::Derived)
    } else if let Some(title) = recent_title {
        (title.to_string(), TitleSource::RecentExperience)
    } else {
        (config.fallback_title.clone(), TitleSource::Fallback)
    };

    debug!(title = %target_title, source = ?title_source, "target title chosen");

    let role = recent_title.unwrap_or(config.fallback_title.as_str());
    let top_skills: Vec<&str> = ranked_skills
        .iter()
        .take(config.summary_skill_count)
        .map(String::as_str)
        .collect();

    Composition {
        target_title,
        summary: compose_summary(role, &top_skills),
        title_source,
    }
}

pub fn compose_summary(role: &str, skills: &[&str]) -> String {
    if skills.is_empty() {
        format!("{role} {SUMMARY_CLOSER}")
    } else {
        format!(
            "{role} with hands-on experience in {}, {SUMMARY_CLOSER}",
            join_list(skills)
        )
    }
}

/// `A`, `A and B`, `A, B, and C`.
pub fn join_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

/// Newest role: ongoing beats dated beats undated, end date before start
/// date; ties go to the entry listed first.
pub fn most_recent_experience(profile: &MasterProfile) -> Option<&Experience> {
    profile
        .experience
        .iter()
        .map(|e| (recency_key(e), e))
        .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best })
        .map(|(_, e)| e)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateKey {
    Unknown,
    Date(NaiveDate),
    Ongoing,
}

fn recency_key(entry: &Experience) -> (DateKey, DateKey) {
    let end = match entry.end_date.as_deref().map(str::trim) {
        None | Some("") => DateKey::Ongoing,
        Some(raw) => parse_date_key(raw),
    };
    let start = entry
        .start_date
        .as_deref()
        .map_or(DateKey::Unknown, parse_date_key);
    (end, start)
}

/// Parses the loose date strings people type into profile forms.
pub fn parse_date_key(raw: &str) -> DateKey {
    let raw = raw.trim();
    if raw.is_empty() {
        return DateKey::Unknown;
    }
    if ["present", "current", "now", "ongoing"]
        .iter()
        .any(|word| raw.eq_ignore_ascii_case(word))
    {
        return DateKey::Ongoing;
    }

    let candidates = [
        (raw.to_string(), "%Y-%m-%d"),
        (format!("{raw}-01"), "%Y-%m-%d"),
        (format!("{raw}/01"), "%Y/%m/%d"),
        (format!("01/{raw}"), "%d/%m/%Y"),
        (format!("1 {raw}"), "%d %b %Y"),
        (format!("1 {raw}"), "%d %B %Y"),
    ];
    for (text, format) in &candidates {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return DateKey::Date(date);
        }
    }

    if raw.len() == 4 {
        if let Some(date) = raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        {
            return DateKey::Date(date);
        }
    }

    DateKey::Unknown
}
