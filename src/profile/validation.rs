use std::collections::BTreeSet;

use crate::profile::document::ProfileError;
use crate::profile::model::{Bullet, MasterProfile};
use crate::types::identifiers::EntryId;

/// Checks the invariants a profile must hold before it becomes a document:
/// a non-blank name, and non-blank ids unique within their owning collection.
///
/// The tailoring engine never calls this; it accepts any profile.
pub fn validate_profile(profile: &MasterProfile) -> Result<(), ProfileError> {
    if profile.name.trim().is_empty() {
        return Err(ProfileError::MissingName);
    }

    check_ids("experience", profile.experience.iter().map(|e| &e.id))?;
    for entry in &profile.experience {
        check_bullets("experience", &entry.id, &entry.bullets)?;
    }

    check_ids("projects", profile.projects.iter().map(|p| &p.id))?;
    for project in &profile.projects {
        check_bullets("projects", &project.id, &project.bullets)?;
    }

    check_ids("education", profile.education.iter().map(|e| &e.id))?;
    check_ids("certificates", profile.certificates.iter().map(|c| &c.id))?;
    check_ids("awards", profile.awards.iter().map(|a| &a.id))?;
    check_ids("extras", profile.extras.iter().map(|x| &x.id))?;

    Ok(())
}

fn check_bullets(collection: &str, parent: &EntryId, bullets: &[Bullet]) -> Result<(), ProfileError> {
    let scope = format!("{collection}/{parent}/bullets");
    check_ids(&scope, bullets.iter().map(|b| &b.id))
}

fn check_ids<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a EntryId>,
) -> Result<(), ProfileError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if id.is_blank() {
            return Err(ProfileError::BlankId {
                collection: collection.to_string(),
            });
        }
        if !seen.insert(id.as_str()) {
            return Err(ProfileError::DuplicateId {
                collection: collection.to_string(),
                id: id.as_str().to_string(),
            });
        }
    }
    Ok(())
}
