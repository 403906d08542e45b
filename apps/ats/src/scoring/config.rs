//! Scoring configuration: weight table, skill vocabulary, strength bonuses and
//! decision thresholds.
//!
//! Defaults reproduce the fixed heuristics. A TOML file can override any subset of
//! keys; anything left out keeps its default.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Blend weights applied to the three component scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreWeights {
    pub keyword: f64,
    pub similarity: f64,
    pub strength: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: 0.5,
            similarity: 0.3,
            strength: 0.2,
        }
    }
}

/// A single strength signal: any of `terms` present in the text earns `bonus` once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrengthBonus {
    pub terms: Vec<String>,
    pub bonus: f64,
}

impl StrengthBonus {
    fn new(terms: &[&str], bonus: f64) -> Self {
        Self {
            terms: terms.iter().map(|t| t.to_string()).collect(),
            bonus,
        }
    }
}

/// Final-score cut-offs: score >= selected is SELECTED,
/// borderline <= score < selected is BORDERLINE, anything lower is NOT SELECTED.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecisionThresholds {
    pub selected: f64,
    pub borderline: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            selected: 65.0,
            borderline: 50.0,
        }
    }
}

const DEFAULT_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node",
    "express",
    "mongodb",
    "sql",
    "machine learning",
    "deep learning",
    "tensorflow",
    "flask",
    "api",
    "html",
    "css",
    "mern",
    "ai",
    "nlp",
    "computer vision",
    "internship",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    /// Lowercase terms matched by substring containment.
    pub vocabulary: Vec<String>,
    pub bonuses: Vec<StrengthBonus>,
    pub strength_cap: f64,
    pub thresholds: DecisionThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            vocabulary: DEFAULT_VOCABULARY.iter().map(|t| t.to_string()).collect(),
            bonuses: vec![
                StrengthBonus::new(&["project"], 25.0),
                StrengthBonus::new(&["intern", "internship"], 25.0),
                StrengthBonus::new(&["hackathon"], 20.0),
                StrengthBonus::new(&["certification", "coursera"], 15.0),
                StrengthBonus::new(&["github"], 15.0),
            ],
            strength_cap: 100.0,
            thresholds: DecisionThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Loads from `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read scoring config {}", path.display()))?;
                Self::from_toml(&content)
                    .with_context(|| format!("Invalid scoring config {}", path.display()))?
            }
            None => Self::default(),
        };
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: ScoringConfig = toml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Matching runs against lowercase text, so terms are lowercased once here.
    fn normalize(&mut self) {
        for term in &mut self.vocabulary {
            *term = term.to_lowercase();
        }
        for bonus in &mut self.bonuses {
            for term in &mut bonus.terms {
                *term = term.to_lowercase();
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("keyword", w.keyword),
            ("similarity", w.similarity),
            ("strength", w.strength),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("weight '{name}' must be a non-negative number, got {value}");
            }
        }
        if self.bonuses.iter().any(|b| !b.bonus.is_finite() || b.bonus < 0.0) {
            bail!("strength bonuses must be non-negative numbers");
        }
        if !(0.0..=100.0).contains(&self.strength_cap) {
            bail!("strength_cap must lie in [0, 100], got {}", self.strength_cap);
        }
        let t = &self.thresholds;
        if t.borderline > t.selected {
            bail!(
                "borderline threshold ({}) must not exceed selected threshold ({})",
                t.borderline,
                t.selected
            );
        }
        Ok(())
    }
}
