/// A normalized token together with the slice it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// Source text after trimming, original casing.
    pub raw: &'a str,
    /// Lower-cased form used for matching.
    pub norm: String,
    /// True for the first token of the text or of a sentence.
    pub sentence_start: bool,
}

impl Token<'_> {
    /// Capitalized in the source (`Kafka`, `AWS`, `iOS` is not).
    pub fn is_capitalized(&self) -> bool {
        self.raw.chars().next().is_some_and(char::is_uppercase)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '.')
}

fn ends_sentence(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | ':' | ';' | '\n')
}

/// Splits text into normalized tokens in a single pass.
///
/// Word characters are alphanumerics plus `+`, `#` and `.`, so `c++`, `c#`
/// and `node.js` stay whole while `data-driven` and `ci/cd` split. Trailing
/// dots are sentence punctuation and are dropped; a leading dot survives only
/// in front of a letter (`.net`). Dotted abbreviations such as `e.g.` lose the
/// trailing dot but do not end the sentence.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut sentence_start = true;
    let mut span_start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        if is_word_char(c) {
            if span_start.is_none() {
                span_start = Some(idx);
            }
            continue;
        }
        if let Some(start) = span_start.take() {
            push_span(&text[start..idx], &mut tokens, &mut sentence_start);
        }
        if ends_sentence(c) {
            sentence_start = true;
        }
    }
    if let Some(start) = span_start {
        push_span(&text[start..], &mut tokens, &mut sentence_start);
    }

    tokens
}

/// Lower-cased token strings only.
pub fn normalize(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|t| t.norm).collect()
}

fn push_span<'a>(span: &'a str, tokens: &mut Vec<Token<'a>>, sentence_start: &mut bool) {
    let without_trailing = span.trim_end_matches('.');
    let closes_sentence =
        without_trailing.len() != span.len() && !is_dotted_abbreviation(without_trailing);

    let mut word = without_trailing.trim_start_matches(&['+', '#'][..]);
    if let Some(rest) = word.strip_prefix('.') {
        if !rest.starts_with(|c: char| c.is_alphabetic()) {
            word = rest.trim_start_matches('.');
        }
    }

    if !word.is_empty() {
        tokens.push(Token {
            raw: word,
            norm: word.to_lowercase(),
            sentence_start: *sentence_start,
        });
        *sentence_start = false;
    }

    if closes_sentence {
        *sentence_start = true;
    }
}

// `e.g`, `i.e`, `u.s`: single letters joined by dots.
fn is_dotted_abbreviation(word: &str) -> bool {
    word.contains('.')
        && word
            .split('.')
            .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
}
