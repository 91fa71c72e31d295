use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::ContentVersion;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("max_bullets_per_entry must be at least 1")]
    ZeroBulletCap,
    #[error("min_token_len must be at least 1")]
    ZeroTokenLength,
    #[error("{name} must be a finite number >= 1.0, got {value}")]
    InvalidBoost { name: &'static str, value: f64 },
    #[error("fallback_title must not be blank")]
    BlankFallbackTitle,
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailorConfig {
    pub max_bullets_per_entry: usize,
    /// Total bullets across experience and projects; `None` is unbounded.
    pub max_total_bullets: Option<usize>,
    pub min_token_len: usize,
    pub phrase_boost: f64,
    pub proper_noun_boost: f64,
    pub extra_phrases: Vec<String>,
    pub summary_skill_count: usize,
    pub fallback_title: String,
}

impl Default for TailorConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl TailorConfig {
    pub fn v0() -> Self {
        Self {
            max_bullets_per_entry: 4,
            max_total_bullets: None,
            min_token_len: 2,
            phrase_boost: 2.0,
            proper_noun_boost: 1.5,
            extra_phrases: Vec::new(),
            summary_skill_count: 3,
            fallback_title: "Professional".into(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bullets_per_entry == 0 {
            return Err(ConfigError::ZeroBulletCap);
        }
        if self.min_token_len == 0 {
            return Err(ConfigError::ZeroTokenLength);
        }
        for (name, value) in [
            ("phrase_boost", self.phrase_boost),
            ("proper_noun_boost", self.proper_noun_boost),
        ] {
            if !value.is_finite() || value < 1.0 {
                return Err(ConfigError::InvalidBoost { name, value });
            }
        }
        if self.fallback_title.trim().is_empty() {
            return Err(ConfigError::BlankFallbackTitle);
        }
        Ok(())
    }

    /// Content hash over one `key=value` line per field.
    pub fn version(&self) -> ContentVersion {
        let total = self
            .max_total_bullets
            .map_or_else(|| "none".to_string(), |n| n.to_string());

        let mut canonical = String::new();
        canonical.push_str(&format!("max_bullets_per_entry={}\n", self.max_bullets_per_entry));
        canonical.push_str(&format!("max_total_bullets={total}\n"));
        canonical.push_str(&format!("min_token_len={}\n", self.min_token_len));
        canonical.push_str(&format!("phrase_boost={}\n", self.phrase_boost));
        canonical.push_str(&format!("proper_noun_boost={}\n", self.proper_noun_boost));
        for phrase in &self.extra_phrases {
            canonical.push_str(&format!("extra_phrase={phrase}\n"));
        }
        canonical.push_str(&format!("summary_skill_count={}\n", self.summary_skill_count));
        canonical.push_str(&format!("fallback_title={}\n", self.fallback_title));

        ContentVersion::from_content(canonical.as_bytes())
    }
}
