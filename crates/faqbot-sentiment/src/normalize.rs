/// Lowercase and collapse whitespace runs to single spaces.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Count how many of `phrases` occur in `text`.
///
/// Each phrase contributes at most 1 regardless of how often it repeats.
/// Containment is plain substring search, accepted as O(phrases x text)
/// at this lexicon size.
pub(crate) fn count_hits(text: &str, phrases: &[String]) -> usize {
    phrases.iter().filter(|p| text.contains(p.as_str())).count()
}
