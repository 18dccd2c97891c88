//! Keyword-based concern classification over conversation history
//!
//! Scans what the user has written for whole-word keyword matches against the
//! static taxonomy and surfaces the most-discussed topics. Heuristic only:
//! this drives resource suggestions, it makes no clinical claim.

use crate::concerns::taxonomy::{ConcernLabel, CONCERN_KEYWORDS, GENERAL_MENTAL_HEALTH};
use crate::session::types::ChatMessage;
use tracing::debug;

/// Maximum number of organically detected concerns returned
const MAX_CONCERNS: usize = 3;

/// Identify likely discussion topics from the conversation so far
///
/// Only user messages are considered. Labels are ranked by total keyword
/// match count, descending; ties resolve in taxonomy declaration order.
/// Returns 1 to 3 labels and always includes `general mental health` when
/// fewer than 3 specific concerns matched.
///
/// Pure function of its input: identical histories yield identical output.
pub fn classify_concerns(messages: &[ChatMessage]) -> Vec<ConcernLabel> {
    let user_text: Vec<&str> = messages
        .iter()
        .filter(|m| m.is_from_user())
        .map(|m| m.content.as_str())
        .collect();

    if user_text.is_empty() {
        debug!("no user messages, falling back to general concern");
        return vec![GENERAL_MENTAL_HEALTH];
    }

    let combined = user_text.join(" ").to_lowercase();

    let mut counts: Vec<(ConcernLabel, usize)> = Vec::new();
    for &(label, keywords) in CONCERN_KEYWORDS {
        let count: usize = keywords
            .iter()
            .map(|keyword| count_word_matches(&combined, keyword))
            .sum();
        debug!("{} keyword matches for concern '{}'", count, label);
        if count > 0 {
            counts.push((label, count));
        }
    }

    // Stable sort keeps taxonomy order for equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut top: Vec<ConcernLabel> = counts
        .into_iter()
        .take(MAX_CONCERNS)
        .map(|(label, _)| label)
        .collect();

    if top.is_empty() {
        debug!("no concerns detected, falling back to general concern");
        return vec![GENERAL_MENTAL_HEALTH];
    }

    if top.len() < MAX_CONCERNS && !top.contains(&GENERAL_MENTAL_HEALTH) {
        top.push(GENERAL_MENTAL_HEALTH);
    }

    debug!("detected concerns: {:?}", top);
    top
}

/// Count non-overlapping whole-word occurrences of `keyword` in `text`
///
/// A match counts only when not adjacent to a letter or digit on either
/// side, so "mad" does not match inside "madrid". Both arguments are
/// expected to be lowercase already.
fn count_word_matches(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find(keyword) {
        let start = search_from + offset;
        let end = start + keyword.len();

        let boundary_before = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let boundary_after = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if boundary_before && boundary_after {
            count += 1;
            search_from = end;
        } else {
            // Skip one character past the failed position
            let step = text[start..].chars().next().map_or(1, |c| c.len_utf8());
            search_from = start + step;
        }
    }

    count
}
