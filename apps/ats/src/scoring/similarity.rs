//! Two-document TF-IDF cosine similarity between a resume and a job description.
//!
//! Vectorizer conventions: lowercase, tokens are runs of two or more word
//! characters, English stop-words dropped, raw counts for tf, smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, rows L2-normalised.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::stop_words::is_stop_word;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("static token regex"));

fn term_counts(text: &str) -> HashMap<String, f64> {
    let lower = text.to_lowercase();
    let mut counts = HashMap::new();
    for m in TOKEN.find_iter(&lower) {
        let token = m.as_str();
        if is_stop_word(token) {
            continue;
        }
        *counts.entry(token.to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine similarity in [0, 1]. Degenerate inputs (empty or stop-word-only text)
/// score 0 instead of failing.
pub fn similarity(resume_text: &str, job_description: &str) -> f64 {
    let docs = [term_counts(resume_text), term_counts(job_description)];
    if docs.iter().any(HashMap::is_empty) {
        return 0.0;
    }

    let n = docs.len() as f64;
    let mut df: BTreeMap<&str, f64> = BTreeMap::new();
    for doc in &docs {
        for term in doc.keys() {
            *df.entry(term.as_str()).or_insert(0.0) += 1.0;
        }
    }
    let idf: HashMap<&str, f64> = df
        .into_iter()
        .map(|(term, df)| (term, ((1.0 + n) / (1.0 + df)).ln() + 1.0))
        .collect();

    let weigh = |doc: &HashMap<String, f64>| -> HashMap<String, f64> {
        let raw: HashMap<String, f64> = doc
            .iter()
            .map(|(term, tf)| (term.clone(), tf * idf[term.as_str()]))
            .collect();
        let norm = raw.values().map(|w| w * w).sum::<f64>().sqrt();
        raw.into_iter().map(|(t, w)| (t, w / norm)).collect()
    };
    let a = weigh(&docs[0]);
    let b = weigh(&docs[1]);

    let dot: f64 = a
        .iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();
    if dot.is_finite() {
        dot.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
