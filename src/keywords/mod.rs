pub mod extractor;
pub mod tokenize;
pub mod vocabulary;

pub use extractor::{Keyword, KeywordExtractor, KeywordSet, RoleCandidate};
pub use tokenize::{normalize, tokenize, Token};

/// Extract keywords with the default configuration.
pub fn extract_keywords(jd_text: &str) -> KeywordSet {
    KeywordExtractor::default().extract(jd_text)
}
