pub mod identifiers;
pub mod job;
pub mod tailored;

pub use identifiers::{ContentVersion, EntryId};
pub use job::JobDescription;
pub use tailored::{
    EntryWhy, KeywordWeight, TailorMetadata, TailorResult, TailoredExperience, TailoredProject,
    TailoredResume, TitleSource,
};
