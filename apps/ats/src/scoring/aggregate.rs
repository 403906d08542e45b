//! Weighted blend of the component scores and the three-tier decision.

use serde::{Deserialize, Serialize};

use crate::scoring::config::{DecisionThresholds, ScoreWeights};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "SELECTED")]
    Selected,
    #[serde(rename = "BORDERLINE")]
    Borderline,
    #[serde(rename = "NOT SELECTED")]
    NotSelected,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Selected => "SELECTED",
            Status::Borderline => "BORDERLINE",
            Status::NotSelected => "NOT SELECTED",
        }
    }

    pub fn decision(self) -> &'static str {
        match self {
            Status::Selected => "Eligible for Job",
            Status::Borderline => "Needs HR Review",
            Status::NotSelected => "Not Eligible",
        }
    }
}

/// Component scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub keyword: f64,
    pub similarity: f64,
    pub strength: f64,
}

/// One ranked row of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub filename: String,
    pub score: f64,
    pub status: Status,
    pub decision: String,
    pub breakdown: ComponentScores,
}

/// Rounds to two decimals from the exact stored binary value, so 49.995
/// (stored just below) stays 49.99 instead of crossing a threshold.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

pub fn final_score(components: &ComponentScores, weights: &ScoreWeights) -> f64 {
    round2(
        components.keyword * weights.keyword
            + components.similarity * weights.similarity
            + components.strength * weights.strength,
    )
}

pub fn classify(score: f64, thresholds: &DecisionThresholds) -> Status {
    if score >= thresholds.selected {
        Status::Selected
    } else if score >= thresholds.borderline {
        Status::Borderline
    } else {
        Status::NotSelected
    }
}

pub fn build_result(
    filename: String,
    components: ComponentScores,
    weights: &ScoreWeights,
    thresholds: &DecisionThresholds,
) -> ScoreResult {
    let score = final_score(&components, weights);
    let status = classify(score, thresholds);
    ScoreResult {
        filename,
        score,
        status,
        decision: status.decision().to_string(),
        breakdown: ComponentScores {
            keyword: round2(components.keyword),
            similarity: round2(components.similarity),
            strength: round2(components.strength),
        },
    }
}
