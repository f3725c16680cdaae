//! Related-keyword extraction from video titles.

/// Words too common to be useful keyword candidates.
const STOP_WORDS: [&str; 15] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "about",
    "as",
];

/// Derive candidate related keywords from a set of video titles.
///
/// Titles are lowercased and split on whitespace; tokens are trimmed of
/// leading/trailing punctuation, then dropped when they are 3 characters or
/// shorter, stop words, or part of the seed keyword itself. The survivors
/// are ranked by frequency, with ties keeping first-occurrence order, and
/// the top `max_results` are returned.
///
/// An empty title list yields an empty result.
pub fn extract_related(seed_keyword: &str, titles: &[String], max_results: usize) -> Vec<String> {
    let seed_lower = seed_keyword.to_lowercase();
    let seed_tokens: Vec<&str> = seed_lower.split_whitespace().collect();

    // Insertion order doubles as first-occurrence order for tie-breaking.
    let mut counts: Vec<(String, usize)> = Vec::new();

    for title in titles {
        let lowered = title.to_lowercase();
        for raw in lowered.split_whitespace() {
            let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if token.len() <= 3 {
                continue;
            }
            if STOP_WORDS.contains(&token) {
                continue;
            }
            if seed_tokens.contains(&token) {
                continue;
            }

            match counts.iter_mut().find(|(t, _)| t == token) {
                Some((_, n)) => *n += 1,
                None => counts.push((token.to_string(), 1)),
            }
        }
    }

    // sort_by is stable, so equal counts keep their first-occurrence order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(max_results)
        .map(|(token, _)| token)
        .collect()
}
