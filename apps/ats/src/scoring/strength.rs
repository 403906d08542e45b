use crate::scoring::config::StrengthBonus;

/// Sums the bonus of every rule with at least one term present in `text`, capped at `cap`.
pub fn strength_score(text: &str, bonuses: &[StrengthBonus], cap: f64) -> f64 {
    let total: f64 = bonuses
        .iter()
        .filter(|rule| rule.terms.iter().any(|t| text.contains(t.as_str())))
        .map(|rule| rule.bonus)
        .sum();
    total.min(cap)
}
