use crate::models::{AnnotatedText, Segment, Token};
use std::collections::BTreeSet;

/// Check whether a character counts as part of a token value
///
/// Word characters are Unicode letters, digits, and underscore. Marker
/// characters (`#`, `@`), whitespace, and punctuation all end a token.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Decompose raw text into literal runs and recognized tokens
///
/// A single left-to-right scan recognizes, longest-match first:
/// 1. `@pet:` followed by word characters - a pet mention
/// 2. `@` followed by word characters - a user mention
/// 3. `#` followed by word characters - a hashtag
///
/// Markers with an empty capture (e.g. a trailing `#`) stay literal text.
/// Total over any UTF-8 input; concatenating the segments' literal forms
/// reproduces the input exactly.
pub fn annotate(text: &str) -> AnnotatedText {
    let mut segments = Vec::new();
    let mut literal_start = 0usize;
    let mut pos = 0usize;

    while pos < text.len() {
        let rest = &text[pos..];
        if rest.starts_with('#') || rest.starts_with('@') {
            if let Some((token, token_len)) = match_token(rest) {
                if literal_start < pos {
                    segments.push(Segment::Literal(text[literal_start..pos].to_string()));
                }
                segments.push(Segment::Token(token));
                pos += token_len;
                literal_start = pos;
                continue;
            }
        }
        // No token here; step over one character and keep accumulating literal text
        pos += rest.chars().next().map_or(1, char::len_utf8);
    }

    if literal_start < text.len() {
        segments.push(Segment::Literal(text[literal_start..].to_string()));
    }

    AnnotatedText {
        original_len: text.len(),
        segments,
    }
}

/// Try to match a token at the start of `rest`, returning it with its byte length
fn match_token(rest: &str) -> Option<(Token, usize)> {
    // `@pet:` before plain `@` so pet mentions are never misread as user mentions
    if let Some(after) = rest.strip_prefix("@pet:") {
        let value = leading_word_run(after);
        if !value.is_empty() {
            return Some((Token::PetMention(value.to_string()), "@pet:".len() + value.len()));
        }
        // `@pet:` with no name falls through; `@pet` below still names a user
    }

    if let Some(after) = rest.strip_prefix('@') {
        let value = leading_word_run(after);
        if !value.is_empty() {
            return Some((Token::UserMention(value.to_string()), 1 + value.len()));
        }
        return None;
    }

    if let Some(after) = rest.strip_prefix('#') {
        let value = leading_word_run(after);
        if !value.is_empty() {
            return Some((Token::Hashtag(value.to_string()), 1 + value.len()));
        }
    }

    None
}

/// The longest prefix of `s` made of word characters
fn leading_word_run(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}

/// Extract the deduplicated, lowercased hashtag values from a text
///
/// An ordered set so downstream serialization is deterministic.
pub fn extract_hashtags(text: &str) -> BTreeSet<String> {
    annotate(text)
        .tokens()
        .filter_map(|token| match token {
            Token::Hashtag(value) => Some(value.to_lowercase()),
            _ => None,
        })
        .collect()
}

/// Check a single tag for validity, e.g. a hashtag-page route parameter
///
/// Valid tags are non-empty and consist solely of word characters; this is
/// stricter than `extract_hashtags`, which truncates at the first boundary.
pub fn is_valid_hashtag(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.chars().all(is_word_char)
}

/// Caller-supplied link rendering for each token kind
///
/// `literal` passes text through unchanged by default; templates targeting
/// HTML should override it to escape literal runs.
pub trait LinkTemplate {
    fn hashtag(&self, tag: &str) -> String;
    fn user(&self, name: &str) -> String;
    fn pet(&self, name: &str) -> String;

    fn literal(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Render an annotated text, replacing each token via the template
pub fn render<T: LinkTemplate>(annotated: &AnnotatedText, template: &T) -> String {
    let mut out = String::with_capacity(annotated.original_len);
    for segment in &annotated.segments {
        match segment {
            Segment::Literal(text) => out.push_str(&template.literal(text)),
            Segment::Token(Token::Hashtag(value)) => out.push_str(&template.hashtag(value)),
            Segment::Token(Token::UserMention(value)) => out.push_str(&template.user(value)),
            Segment::Token(Token::PetMention(value)) => out.push_str(&template.pet(value)),
        }
    }
    out
}
