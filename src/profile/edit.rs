use serde::{Deserialize, Serialize};

use crate::profile::document::ProfileError;
use crate::profile::model::{
    Award, Bullet, Certificate, Education, Experience, Extra, Link, MasterProfile, Project,
    SkillCategory,
};
use crate::types::identifiers::EntryId;

/// Field updates for an experience entry. `None` leaves a field as is;
/// a blank value clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub link: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub major: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificatePatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub year: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardPatch {
    pub name: Option<String>,
    pub org: Option<String>,
    pub year: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraPatch {
    pub label: Option<String>,
    pub value: Option<String>,
}

/// A structured, typed change to a master profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ProfileEdit {
    SetName {
        name: String,
    },
    SetContact {
        email: Option<String>,
        phone: Option<String>,
        location: Option<String>,
    },
    SetLinks {
        links: Vec<Link>,
    },

    AddExperience {
        entry: Experience,
    },
    UpdateExperience {
        id: EntryId,
        patch: ExperiencePatch,
    },
    RemoveExperience {
        id: EntryId,
    },
    AddExperienceBullet {
        experience_id: EntryId,
        bullet: Bullet,
    },
    UpdateExperienceBullet {
        experience_id: EntryId,
        bullet_id: EntryId,
        text: String,
    },
    RemoveExperienceBullet {
        experience_id: EntryId,
        bullet_id: EntryId,
    },

    AddProject {
        entry: Project,
    },
    UpdateProject {
        id: EntryId,
        patch: ProjectPatch,
    },
    RemoveProject {
        id: EntryId,
    },
    AddProjectBullet {
        project_id: EntryId,
        bullet: Bullet,
    },
    UpdateProjectBullet {
        project_id: EntryId,
        bullet_id: EntryId,
        text: String,
    },
    RemoveProjectBullet {
        project_id: EntryId,
        bullet_id: EntryId,
    },

    SetSkills {
        category: SkillCategory,
        values: Vec<String>,
    },

    AddEducation {
        entry: Education,
    },
    UpdateEducation {
        id: EntryId,
        patch: EducationPatch,
    },
    RemoveEducation {
        id: EntryId,
    },

    AddCertificate {
        entry: Certificate,
    },
    UpdateCertificate {
        id: EntryId,
        patch: CertificatePatch,
    },
    RemoveCertificate {
        id: EntryId,
    },
    AddAward {
        entry: Award,
    },
    UpdateAward {
        id: EntryId,
        patch: AwardPatch,
    },
    RemoveAward {
        id: EntryId,
    },
    AddExtra {
        entry: Extra,
    },
    UpdateExtra {
        id: EntryId,
        patch: ExtraPatch,
    },
    RemoveExtra {
        id: EntryId,
    },
}

impl ProfileEdit {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileEdit::SetName { .. } => "set_name",
            ProfileEdit::SetContact { .. } => "set_contact",
            ProfileEdit::SetLinks { .. } => "set_links",
            ProfileEdit::AddExperience { .. } => "add_experience",
            ProfileEdit::UpdateExperience { .. } => "update_experience",
            ProfileEdit::RemoveExperience { .. } => "remove_experience",
            ProfileEdit::AddExperienceBullet { .. } => "add_experience_bullet",
            ProfileEdit::UpdateExperienceBullet { .. } => "update_experience_bullet",
            ProfileEdit::RemoveExperienceBullet { .. } => "remove_experience_bullet",
            ProfileEdit::AddProject { .. } => "add_project",
            ProfileEdit::UpdateProject { .. } => "update_project",
            ProfileEdit::RemoveProject { .. } => "remove_project",
            ProfileEdit::AddProjectBullet { .. } => "add_project_bullet",
            ProfileEdit::UpdateProjectBullet { .. } => "update_project_bullet",
            ProfileEdit::RemoveProjectBullet { .. } => "remove_project_bullet",
            ProfileEdit::SetSkills { .. } => "set_skills",
            ProfileEdit::AddEducation { .. } => "add_education",
            ProfileEdit::UpdateEducation { .. } => "update_education",
            ProfileEdit::RemoveEducation { .. } => "remove_education",
            ProfileEdit::AddCertificate { .. } => "add_certificate",
            ProfileEdit::UpdateCertificate { .. } => "update_certificate",
            ProfileEdit::RemoveCertificate { .. } => "remove_certificate",
            ProfileEdit::AddAward { .. } => "add_award",
            ProfileEdit::UpdateAward { .. } => "update_award",
            ProfileEdit::RemoveAward { .. } => "remove_award",
            ProfileEdit::AddExtra { .. } => "add_extra",
            ProfileEdit::UpdateExtra { .. } => "update_extra",
            ProfileEdit::RemoveExtra { .. } => "remove_extra",
        }
    }

    /// Mutates `profile` in place. Callers re-validate afterwards.
    pub(crate) fn apply_to(self, profile: &mut MasterProfile) -> Result<(), ProfileError> {
        match self {
            ProfileEdit::SetName { name } => profile.name = name,
            ProfileEdit::SetContact {
                email,
                phone,
                location,
            } => {
                if let Some(email) = email {
                    profile.email = email;
                }
                if let Some(phone) = phone {
                    profile.phone = phone;
                }
                if let Some(location) = location {
                    profile.location = location;
                }
            }
            ProfileEdit::SetLinks { links } => profile.links = links,

            ProfileEdit::AddExperience { entry } => {
                insert_unique("experience", &mut profile.experience, entry, |e| &e.id)?
            }
            ProfileEdit::UpdateExperience { id, patch } => {
                let entry = find_mut("experience", &mut profile.experience, &id, |e| &e.id)?;
                set_required(&mut entry.company, patch.company);
                set_required(&mut entry.title, patch.title);
                set_optional(&mut entry.location, patch.location);
                set_optional(&mut entry.start_date, patch.start_date);
                set_optional(&mut entry.end_date, patch.end_date);
            }
            ProfileEdit::RemoveExperience { id } => {
                remove_by_id("experience", &mut profile.experience, &id, |e| &e.id)?
            }
            ProfileEdit::AddExperienceBullet {
                experience_id,
                bullet,
            } => {
                let entry =
                    find_mut("experience", &mut profile.experience, &experience_id, |e| &e.id)?;
                insert_unique("experience bullets", &mut entry.bullets, bullet, |b| &b.id)?
            }
            ProfileEdit::UpdateExperienceBullet {
                experience_id,
                bullet_id,
                text,
            } => {
                let entry =
                    find_mut("experience", &mut profile.experience, &experience_id, |e| &e.id)?;
                find_mut("experience bullets", &mut entry.bullets, &bullet_id, |b| &b.id)?.text =
                    text;
            }
            ProfileEdit::RemoveExperienceBullet {
                experience_id,
                bullet_id,
            } => {
                let entry =
                    find_mut("experience", &mut profile.experience, &experience_id, |e| &e.id)?;
                remove_by_id("experience bullets", &mut entry.bullets, &bullet_id, |b| &b.id)?
            }

            ProfileEdit::AddProject { entry } => {
                insert_unique("projects", &mut profile.projects, entry, |p| &p.id)?
            }
            ProfileEdit::UpdateProject { id, patch } => {
                let entry = find_mut("projects", &mut profile.projects, &id, |p| &p.id)?;
                set_required(&mut entry.name, patch.name);
                set_optional(&mut entry.link, patch.link);
                if let Some(tags) = patch.tags {
                    entry.tags = clean_list(tags);
                }
            }
            ProfileEdit::RemoveProject { id } => {
                remove_by_id("projects", &mut profile.projects, &id, |p| &p.id)?
            }
            ProfileEdit::AddProjectBullet { project_id, bullet } => {
                let entry = find_mut("projects", &mut profile.projects, &project_id, |p| &p.id)?;
                insert_unique("project bullets", &mut entry.bullets, bullet, |b| &b.id)?
            }
            ProfileEdit::UpdateProjectBullet {
                project_id,
                bullet_id,
                text,
            } => {
                let entry = find_mut("projects", &mut profile.projects, &project_id, |p| &p.id)?;
                find_mut("project bullets", &mut entry.bullets, &bullet_id, |b| &b.id)?.text = text;
            }
            ProfileEdit::RemoveProjectBullet {
                project_id,
                bullet_id,
            } => {
                let entry = find_mut("projects", &mut profile.projects, &project_id, |p| &p.id)?;
                remove_by_id("project bullets", &mut entry.bullets, &bullet_id, |b| &b.id)?
            }

            ProfileEdit::SetSkills { category, values } => {
                *profile.skills.category_mut(category) = clean_list(values);
            }

            ProfileEdit::AddEducation { entry } => {
                insert_unique("education", &mut profile.education, entry, |e| &e.id)?
            }
            ProfileEdit::UpdateEducation { id, patch } => {
                let entry = find_mut("education", &mut profile.education, &id, |e| &e.id)?;
                set_required(&mut entry.school, patch.school);
                set_optional(&mut entry.degree, patch.degree);
                set_optional(&mut entry.major, patch.major);
                set_optional(&mut entry.start_date, patch.start_date);
                set_optional(&mut entry.end_date, patch.end_date);
                set_optional(&mut entry.gpa, patch.gpa);
                set_optional(&mut entry.notes, patch.notes);
            }
            ProfileEdit::RemoveEducation { id } => {
                remove_by_id("education", &mut profile.education, &id, |e| &e.id)?
            }

            ProfileEdit::AddCertificate { entry } => {
                insert_unique("certificates", &mut profile.certificates, entry, |c| &c.id)?
            }
            ProfileEdit::UpdateCertificate { id, patch } => {
                let entry = find_mut("certificates", &mut profile.certificates, &id, |c| &c.id)?;
                set_required(&mut entry.name, patch.name);
                set_optional(&mut entry.issuer, patch.issuer);
                set_optional(&mut entry.year, patch.year);
                set_optional(&mut entry.link, patch.link);
            }
            ProfileEdit::RemoveCertificate { id } => {
                remove_by_id("certificates", &mut profile.certificates, &id, |c| &c.id)?
            }
            ProfileEdit::AddAward { entry } => {
                insert_unique("awards", &mut profile.awards, entry, |a| &a.id)?
            }
            ProfileEdit::UpdateAward { id, patch } => {
                let entry = find_mut("awards", &mut profile.awards, &id, |a| &a.id)?;
                set_required(&mut entry.name, patch.name);
                set_optional(&mut entry.org, patch.org);
                set_optional(&mut entry.year, patch.year);
                set_optional(&mut entry.notes, patch.notes);
            }
            ProfileEdit::RemoveAward { id } => {
                remove_by_id("awards", &mut profile.awards, &id, |a| &a.id)?
            }
            ProfileEdit::AddExtra { entry } => {
                insert_unique("extras", &mut profile.extras, entry, |x| &x.id)?
            }
            ProfileEdit::UpdateExtra { id, patch } => {
                let entry = find_mut("extras", &mut profile.extras, &id, |x| &x.id)?;
                set_required(&mut entry.label, patch.label);
                set_required(&mut entry.value, patch.value);
            }
            ProfileEdit::RemoveExtra { id } => {
                remove_by_id("extras", &mut profile.extras, &id, |x| &x.id)?
            }
        }
        Ok(())
    }
}

fn insert_unique<T>(
    collection: &str,
    items: &mut Vec<T>,
    item: T,
    id_of: impl Fn(&T) -> &EntryId,
) -> Result<(), ProfileError> {
    let id = id_of(&item);
    if items.iter().any(|existing| id_of(existing) == id) {
        return Err(ProfileError::DuplicateId {
            collection: collection.to_string(),
            id: id.as_str().to_string(),
        });
    }
    items.push(item);
    Ok(())
}

fn find_mut<'a, T>(
    collection: &str,
    items: &'a mut [T],
    id: &EntryId,
    id_of: impl Fn(&T) -> &EntryId,
) -> Result<&'a mut T, ProfileError> {
    items
        .iter_mut()
        .find(|item| id_of(&**item) == id)
        .ok_or_else(|| unknown(collection, id))
}

fn remove_by_id<T>(
    collection: &str,
    items: &mut Vec<T>,
    id: &EntryId,
    id_of: impl Fn(&T) -> &EntryId,
) -> Result<(), ProfileError> {
    let position = items
        .iter()
        .position(|item| id_of(item) == id)
        .ok_or_else(|| unknown(collection, id))?;
    items.remove(position);
    Ok(())
}

fn unknown(collection: &str, id: &EntryId) -> ProfileError {
    ProfileError::UnknownId {
        collection: collection.to_string(),
        id: id.as_str().to_string(),
    }
}

fn set_required(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn set_optional(field: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *field = if value.trim().is_empty() { None } else { Some(value) };
    }
}

// Same shape the editor produces from a comma list: trimmed, blanks dropped.
fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
