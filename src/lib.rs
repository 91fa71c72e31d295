//! Deterministic resume tailoring engine.
//!
//! `resume-tailor` takes a master profile (work history, projects, skills)
//! and a free-text job description, and produces a trimmed, reordered resume
//! preview: bullets ranked by keyword relevance under a per-entry cap, skills
//! reordered, and a target title and summary filled from templates. All
//! operations are deterministic: identical inputs always produce identical
//! outputs, byte-for-byte.

pub mod compose;
pub mod config;
pub mod keywords;
pub mod profile;
pub mod selection;
pub mod types;

pub use config::{ConfigError, TailorConfig};
pub use profile::{MasterProfile, ProfileDocument, ProfileEdit, ProfileError};
pub use selection::Tailor;
pub use types::{JobDescription, TailorResult, TailoredResume};

/// Tailor `profile` to `jd_text` with the default engine and no explicit title.
pub fn tailor_resume(profile: &MasterProfile, jd_text: &str) -> TailoredResume {
    Tailor::default().tailor(profile, &JobDescription::new(jd_text))
}
