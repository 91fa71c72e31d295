use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::profile::edit::ProfileEdit;
use crate::profile::model::{Award, Certificate, Extra, MasterProfile};
use crate::profile::validation::validate_profile;
use crate::types::identifiers::ContentVersion;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile name must not be empty")]
    MissingName,
    #[error("Blank id in {collection}")]
    BlankId { collection: String },
    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: String, id: String },
    #[error("Unknown id {id} in {collection}")]
    UnknownId { collection: String, id: String },
    #[error("Invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A validated master profile together with its content version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDocument {
    pub version: ContentVersion,
    pub profile: MasterProfile,
}

impl ProfileDocument {
    /// Validate a profile and version it.
    ///
    /// This is the ONLY way to construct a ProfileDocument.
    pub fn ingest(profile: MasterProfile) -> Result<Self, ProfileError> {
        validate_profile(&profile)?;

        let canonical = serde_json::to_vec(&profile)?;
        let version = ContentVersion::from_content(&canonical);

        debug!(
            version = version.as_str(),
            experience = profile.experience.len(),
            projects = profile.projects.len(),
            "profile ingested"
        );

        Ok(ProfileDocument { version, profile })
    }

    /// Apply one structured edit, yielding a new validated document.
    /// `self` is left untouched.
    pub fn apply(&self, edit: ProfileEdit) -> Result<Self, ProfileError> {
        let mut profile = self.profile.clone();
        let label = edit.label();
        edit.apply_to(&mut profile)?;
        let next = Self::ingest(profile)?;

        debug!(
            edit = label,
            from = self.version.as_str(),
            to = next.version.as_str(),
            "profile edit applied"
        );

        Ok(next)
    }

    /// Read either a bare profile or the stored `{profile, extras}` envelope.
    /// Missing fields fall back to their empty values.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ProfileError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;

        let profile = if value.get("profile").is_some() {
            let stored: StoredProfile = serde_json::from_value(value)?;
            stored.into_profile()
        } else {
            serde_json::from_value(value)?
        };

        Self::ingest(profile)
    }

    /// Export in the stored envelope shape.
    pub fn to_json_pretty(&self) -> Result<String, ProfileError> {
        let stored = StoredProfile::from_profile(self.profile.clone());
        Ok(serde_json::to_string_pretty(&stored)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ProfileExtras {
    certificates: Vec<Certificate>,
    awards: Vec<Award>,
    extras: Vec<Extra>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredProfile {
    profile: MasterProfile,
    #[serde(default)]
    extras: ProfileExtras,
}

impl StoredProfile {
    fn from_profile(mut profile: MasterProfile) -> Self {
        let extras = ProfileExtras {
            certificates: std::mem::take(&mut profile.certificates),
            awards: std::mem::take(&mut profile.awards),
            extras: std::mem::take(&mut profile.extras),
        };
        StoredProfile { profile, extras }
    }

    // Envelope lists win over any embedded in the profile itself.
    fn into_profile(self) -> MasterProfile {
        let StoredProfile { mut profile, extras } = self;
        if !extras.certificates.is_empty() {
            profile.certificates = extras.certificates;
        }
        if !extras.awards.is_empty() {
            profile.awards = extras.awards;
        }
        if !extras.extras.is_empty() {
            profile.extras = extras.extras;
        }
        profile
    }
}
