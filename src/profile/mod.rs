pub mod document;
pub mod edit;
pub mod model;
pub mod validation;

pub use crate::types::identifiers::{ContentVersion, EntryId};
pub use document::{ProfileDocument, ProfileError};
pub use edit::{
    AwardPatch, CertificatePatch, EducationPatch, ExperiencePatch, ExtraPatch, ProfileEdit,
    ProjectPatch,
};
pub use model::{
    Award, Bullet, Certificate, Education, Experience, Extra, Link, MasterProfile, Project,
    SkillCategory, Skills,
};
pub use validation::validate_profile;
