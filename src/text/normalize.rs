//! Text normalization for speech synthesis
//!
//! Hosted TTS APIs reject or mangle text containing control characters,
//! exotic symbols, or overlong input. This module cleans free-form chat text
//! into a bounded, synthesis-safe string.

/// Default maximum input length accepted by the speech API
pub const DEFAULT_MAX_LEN: usize = 1000;

/// Punctuation that survives cleaning.
///
/// The trailing `]` is intentional: the original service whitelisted it
/// alongside the hyphen, and spoken output depends on keeping the set stable.
const ALLOWED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '-', ']'];

/// Punctuation marks whose adjacent repeats are collapsed to one occurrence
const COLLAPSIBLE_PUNCTUATION: &[char] = &['!', '?', '.', ',', ';', ':', '\'', '"', '-'];

/// Clean text for speech synthesis with the default length bound
pub fn normalize(text: &str) -> String {
    normalize_with_limit(text, DEFAULT_MAX_LEN)
}

/// Clean text for speech synthesis, truncating to at most `max_len` characters
///
/// Removes control characters, replaces Unicode line/paragraph separators
/// with spaces, strips everything that is not a letter, number, whitespace,
/// or allowed punctuation, collapses whitespace and repeated punctuation,
/// then truncates at the last word boundary within `max_len`.
///
/// Total and idempotent: any input produces a valid result, and cleaning
/// already-clean text is a no-op.
pub fn normalize_with_limit(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut filtered = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\u{2028}' || c == '\u{2029}' {
            filtered.push(' ');
        } else if c.is_whitespace() {
            filtered.push(c);
        } else if is_control(c) {
            // dropped entirely, no replacement space
        } else if c.is_alphanumeric() || ALLOWED_PUNCTUATION.contains(&c) {
            filtered.push(c);
        }
    }

    let collapsed = collapse_whitespace(&filtered);
    let deduped = collapse_punctuation_runs(&collapsed);
    // Punctuation collapsing introduces no whitespace, but keep this pass
    // idempotent with the one above.
    let cleaned = collapse_whitespace(&deduped);

    truncate_at_word(&cleaned, max_len)
}

/// C0 and C1 control ranges
fn is_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}')
}

/// Collapse runs of whitespace into single spaces and trim the ends
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse adjacent repeats of the same punctuation mark ("!!!" -> "!")
fn collapse_punctuation_runs(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if prev == Some(c) && COLLAPSIBLE_PUNCTUATION.contains(&c) {
            continue;
        }
        result.push(c);
        prev = Some(c);
    }

    result
}

/// Truncate to at most `max_len` characters, preferring the last space
/// within the limit so a trailing partial word is dropped
fn truncate_at_word(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let prefix: String = text.chars().take(max_len).collect();
    let truncated = match prefix.rfind(' ') {
        // A space at index 0 cannot happen after trimming, but fall through
        // to the hard cut if it somehow does.
        Some(idx) if idx > 0 => &prefix[..idx],
        _ => prefix.as_str(),
    };

    truncated.trim_end().to_string()
}
