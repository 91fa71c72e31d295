//! Fixed English vocabularies used by the extractor and the title composer.
//! Every list is kept sorted so lookups can binary search.

/// Articles, prepositions, auxiliaries, pronouns, connectives and
/// job-posting boilerplate. Never keywords.
pub const STOP_WORDS: &[&str] = &[
    "a",
    "ability",
    "able",
    "about",
    "above",
    "across",
    "after",
    "against",
    "all",
    "along",
    "also",
    "although",
    "am",
    "among",
    "an",
    "and",
    "any",
    "are",
    "around",
    "as",
    "at",
    "be",
    "because",
    "been",
    "before",
    "behind",
    "being",
    "below",
    "beneath",
    "beside",
    "between",
    "beyond",
    "both",
    "but",
    "by",
    "can",
    "candidate",
    "candidates",
    "could",
    "did",
    "do",
    "does",
    "doing",
    "during",
    "e.g",
    "each",
    "either",
    "etc",
    "every",
    "except",
    "experience",
    "for",
    "from",
    "had",
    "has",
    "have",
    "having",
    "he",
    "her",
    "here",
    "him",
    "his",
    "how",
    "i",
    "i.e",
    "ideal",
    "if",
    "in",
    "including",
    "inside",
    "into",
    "is",
    "it",
    "its",
    "join",
    "just",
    "like",
    "looking",
    "may",
    "me",
    "might",
    "more",
    "most",
    "must",
    "my",
    "near",
    "neither",
    "new",
    "no",
    "nor",
    "not",
    "of",
    "off",
    "on",
    "only",
    "onto",
    "or",
    "other",
    "our",
    "ours",
    "out",
    "outside",
    "over",
    "own",
    "per",
    "plus",
    "preferred",
    "qualifications",
    "required",
    "requirements",
    "responsibilities",
    "role",
    "same",
    "seeking",
    "shall",
    "she",
    "should",
    "since",
    "skills",
    "so",
    "some",
    "strong",
    "such",
    "team",
    "than",
    "that",
    "the",
    "their",
    "them",
    "then",
    "there",
    "these",
    "they",
    "this",
    "those",
    "though",
    "through",
    "throughout",
    "to",
    "too",
    "toward",
    "towards",
    "under",
    "until",
    "up",
    "upon",
    "us",
    "using",
    "very",
    "via",
    "was",
    "we",
    "well",
    "were",
    "what",
    "when",
    "where",
    "whereas",
    "which",
    "while",
    "who",
    "whom",
    "whose",
    "why",
    "will",
    "with",
    "within",
    "without",
    "work",
    "working",
    "would",
    "year",
    "years",
    "yet",
    "you",
    "your",
    "yours",
];

/// Multi-word technical phrases, lower-case, single-space separated.
pub const TECH_PHRASES: &[&str] = &[
    "back end",
    "big data",
    "cloud infrastructure",
    "computer science",
    "computer vision",
    "continuous delivery",
    "continuous deployment",
    "continuous integration",
    "data analysis",
    "data engineering",
    "data modeling",
    "data pipeline",
    "data pipelines",
    "data science",
    "data visualization",
    "data warehouse",
    "deep learning",
    "distributed systems",
    "embedded systems",
    "event driven",
    "front end",
    "full stack",
    "incident response",
    "information security",
    "infrastructure as code",
    "large language models",
    "machine learning",
    "mobile development",
    "natural language processing",
    "object oriented",
    "operating systems",
    "product management",
    "project management",
    "real time",
    "rest api",
    "site reliability",
    "software development",
    "software engineering",
    "statistical modeling",
    "system design",
    "systems design",
    "test driven development",
    "unit testing",
    "user experience",
    "user interface",
    "version control",
    "web services",
];

/// Head nouns of job titles.
pub const ROLE_NOUNS: &[&str] = &[
    "administrator",
    "analyst",
    "architect",
    "consultant",
    "coordinator",
    "designer",
    "developer",
    "director",
    "engineer",
    "lead",
    "manager",
    "programmer",
    "researcher",
    "scientist",
    "specialist",
    "strategist",
    "technician",
];

/// Words that sit right before a role noun without being part of a job
/// title ("hiring manager", "reporting manager").
pub const NON_TITLE_WORDS: &[&str] = &[
    "direct",
    "hiring",
    "recruiting",
    "report",
    "reporting",
    "reports",
];

pub fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.binary_search(&term).is_ok()
}

pub fn is_role_noun(term: &str) -> bool {
    ROLE_NOUNS.binary_search(&term).is_ok()
}

pub fn is_non_title_word(term: &str) -> bool {
    NON_TITLE_WORDS.binary_search(&term).is_ok()
}
