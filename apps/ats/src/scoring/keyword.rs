/// Share of the vocabulary found in `text`, scaled to 0–100.
///
/// Matching is plain substring containment against already-lowercased text, so a
/// short term like "ai" also hits inside "maintain".
pub fn keyword_score(text: &str, vocabulary: &[String]) -> f64 {
    if vocabulary.is_empty() {
        return 0.0;
    }
    let matched = vocabulary
        .iter()
        .filter(|term| text.contains(term.as_str()))
        .count();
    (matched as f64 * 100.0 / vocabulary.len() as f64).min(100.0)
}
