use serde::{Deserialize, Serialize};

/// Job-description input. `jd_text` is free text of any length, including empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDescription {
    pub job_title: String,
    pub company_website: String,
    pub jd_text: String,
}

impl JobDescription {
    pub fn new(jd_text: impl Into<String>) -> Self {
        Self {
            jd_text: jd_text.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    /// The user-supplied title, when it is not blank.
    pub fn explicit_title(&self) -> Option<&str> {
        let title = self.job_title.trim();
        (!title.is_empty()).then_some(title)
    }
}
