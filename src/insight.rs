//! Insight generation
//!
//! Produces the explanatory sentence shown next to a prediction. A fixed,
//! ordered rule set is evaluated against the validated input and the clamped
//! estimate; every matching rule contributes one sentence, joined by single
//! spaces. Generation never fails: when nothing matches, a generic fallback
//! sentence is returned.

use crate::types::{DayType, ParentalControl, PredictionInput, PrimaryActivity};

/// Estimates above this many hours prompt the break suggestion
pub const HIGH_USAGE_THRESHOLD_HOURS: f64 = 6.0;

/// Sentence returned when no rule matches
pub const FALLBACK_INSIGHT: &str =
    "This prediction is based on age, activity patterns, and parental involvement factors.";

/// Generate the insight text for an input and its clamped estimate.
pub fn generate(input: &PredictionInput, estimate_hours: f64) -> String {
    let mut sentences: Vec<&str> = Vec::new();

    if input.parental_control == ParentalControl::Strict {
        sentences.push("Strict parental controls significantly reduce screen time.");
    }

    if input.day_type == DayType::Weekend {
        sentences.push("Weekend usage typically increases by 40-60%.");
    }

    if input.primary_activity == PrimaryActivity::Outdoor {
        sentences.push("Outdoor activities are associated with lower screen time.");
    }

    if estimate_hours > HIGH_USAGE_THRESHOLD_HOURS {
        sentences.push("Consider implementing screen time breaks for healthier usage.");
    }

    if sentences.is_empty() {
        FALLBACK_INSIGHT.to_string()
    } else {
        sentences.join(" ")
    }
}
