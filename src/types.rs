//! Core types for the Screenwise estimation pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: the validated input record, the intermediate estimate stages, and
//! the packaged prediction result.

use serde::{Deserialize, Serialize};

/// Kind of day the prediction covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Weekday,
    Weekend,
    Holiday,
    /// Forward-compatible catch-all; resolves to a neutral modifier
    #[serde(untagged)]
    Other(String),
}

impl DayType {
    pub fn as_str(&self) -> &str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
            DayType::Holiday => "holiday",
            DayType::Other(name) => name.as_str(),
        }
    }
}

/// The child's dominant activity for the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryActivity {
    School,
    Gaming,
    Creative,
    Reading,
    Social,
    Outdoor,
    Sports,
    /// Forward-compatible catch-all; resolves to a neutral modifier
    #[serde(untagged)]
    Other(String),
}

impl PrimaryActivity {
    pub fn as_str(&self) -> &str {
        match self {
            PrimaryActivity::School => "school",
            PrimaryActivity::Gaming => "gaming",
            PrimaryActivity::Creative => "creative",
            PrimaryActivity::Reading => "reading",
            PrimaryActivity::Social => "social",
            PrimaryActivity::Outdoor => "outdoor",
            PrimaryActivity::Sports => "sports",
            PrimaryActivity::Other(name) => name.as_str(),
        }
    }
}

/// Level of parental control in the household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentalControl {
    Strict,
    Moderate,
    Relaxed,
    None,
    /// Forward-compatible catch-all; resolves to a neutral modifier
    #[serde(untagged)]
    Other(String),
}

impl ParentalControl {
    pub fn as_str(&self) -> &str {
        match self {
            ParentalControl::Strict => "strict",
            ParentalControl::Moderate => "moderate",
            ParentalControl::Relaxed => "relaxed",
            ParentalControl::None => "none",
            ParentalControl::Other(name) => name.as_str(),
        }
    }
}

/// How freely the child can reach a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceAccess {
    Limited,
    Supervised,
    Unrestricted,
    /// Forward-compatible catch-all; resolves to a neutral modifier
    #[serde(untagged)]
    Other(String),
}

impl DeviceAccess {
    pub fn as_str(&self) -> &str {
        match self {
            DeviceAccess::Limited => "limited",
            DeviceAccess::Supervised => "supervised",
            DeviceAccess::Unrestricted => "unrestricted",
            DeviceAccess::Other(name) => name.as_str(),
        }
    }
}

/// One prediction request, built from a single validated form submission.
///
/// Constructed once per estimation call and consumed exactly once; the engine
/// keeps no history between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionInput {
    /// Child's age in years (valid range 3-18)
    pub child_age: u8,
    /// Kind of day the prediction covers
    pub day_type: DayType,
    /// Dominant activity for the day
    pub primary_activity: PrimaryActivity,
    /// Previous day's screen time in hours (valid range 0-24)
    pub previous_screen_time: f64,
    /// Level of parental control
    pub parental_control: ParentalControl,
    /// Device access level
    pub device_access: DeviceAccess,
}

/// Which modifier dimension a factor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorDimension {
    DayType,
    PrimaryActivity,
    ParentalControl,
    DeviceAccess,
}

impl FactorDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorDimension::DayType => "day_type",
            FactorDimension::PrimaryActivity => "primary_activity",
            FactorDimension::ParentalControl => "parental_control",
            FactorDimension::DeviceAccess => "device_access",
        }
    }
}

/// One multiplicative weight applied during the modifier pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFactor {
    /// Dimension the weight was looked up in
    pub dimension: FactorDimension,
    /// Categorical value that matched (verbatim for unknown values)
    pub label: String,
    /// Multiplicative weight (1.0 for unrecognized values)
    pub weight: f64,
}

/// Estimate after all four multiplicative modifier stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedEstimate {
    /// Age-banded baseline the pipeline started from (hours)
    pub base_hours: f64,
    /// Running value after every multiplicative stage (hours)
    pub hours: f64,
    /// Factors applied, in pipeline order
    pub factors: Vec<AppliedFactor>,
}

/// Estimate after the single 70/30 blend with prior-day usage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendedEstimate {
    pub hours: f64,
}

/// Estimate clamped into the legal output range.
///
/// Only the bounds clamp constructs this; the field stays private so no other
/// component can bypass the range enforcement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedEstimate {
    hours: f64,
}

impl ClampedEstimate {
    pub(crate) fn new(hours: f64) -> Self {
        Self { hours }
    }

    /// Fractional hours, guaranteed to lie in [0.5, 12]
    pub fn hours(&self) -> f64 {
        self.hours
    }
}

/// Final packaged prediction, handed to the rendering layer and discarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Whole hours of estimated screen time
    pub hours: u32,
    /// Remaining minutes (0-59)
    pub minutes: u32,
    /// Heuristic confidence percentage (60-95)
    pub confidence_percent: u8,
    /// Human-readable explanation of the estimate
    pub insight_text: String,
}

/// Prediction plus the intermediate values that produced it.
///
/// Returned by [`crate::pipeline::estimate_detailed`] for callers that want to
/// show the factor breakdown alongside the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedPrediction {
    pub result: PredictionResult,
    /// Baseline and multiplicative stages
    pub modified: ModifiedEstimate,
    /// Value after blending with prior-day usage (hours)
    pub blended_hours: f64,
    /// Value after the bounds clamp (hours)
    pub clamped_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_enum_values_deserialize() {
        let input: PredictionInput = serde_json::from_str(
            r#"{
                "childAge": 10,
                "dayType": "weekend",
                "primaryActivity": "gaming",
                "previousScreenTime": 3.0,
                "parentalControl": "moderate",
                "deviceAccess": "supervised"
            }"#,
        )
        .unwrap();

        assert_eq!(input.child_age, 10);
        assert_eq!(input.day_type, DayType::Weekend);
        assert_eq!(input.primary_activity, PrimaryActivity::Gaming);
        assert_eq!(input.parental_control, ParentalControl::Moderate);
        assert_eq!(input.device_access, DeviceAccess::Supervised);
    }

    #[test]
    fn test_unknown_enum_values_deserialize_as_other() {
        let input: PredictionInput = serde_json::from_str(
            r#"{
                "childAge": 10,
                "dayType": "snowday",
                "primaryActivity": "esports",
                "previousScreenTime": 3.0,
                "parentalControl": "moderate",
                "deviceAccess": "supervised"
            }"#,
        )
        .unwrap();

        assert_eq!(input.day_type, DayType::Other("snowday".to_string()));
        assert_eq!(
            input.primary_activity,
            PrimaryActivity::Other("esports".to_string())
        );
        assert_eq!(input.day_type.as_str(), "snowday");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = PredictionResult {
            hours: 4,
            minutes: 7,
            confidence_percent: 85,
            insight_text: "Weekend usage typically increases by 40-60%.".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["hours"], 4);
        assert_eq!(json["minutes"], 7);
        assert_eq!(json["confidencePercent"], 85);
        assert!(json["insightText"].as_str().unwrap().contains("Weekend"));
    }
}
