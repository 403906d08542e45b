// Scoring pipeline: text extraction, the three component heuristics, the weighted
// blend and batch orchestration. Everything here is synchronous and pure apart
// from writing uploads to disk.

pub mod aggregate;
pub mod config;
pub mod extract;
pub mod keyword;
pub mod pipeline;
pub mod similarity;
pub mod stop_words;
pub mod strength;

#[cfg(test)]
pub mod test_pdf;
