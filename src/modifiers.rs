//! Modifier tables and the multiplicative pipeline
//!
//! Each categorical input dimension maps to a positive multiplicative weight.
//! The tables are exhaustive matches with an explicit `Other(_) => 1.0` arm,
//! so the "unknown value is neutral" policy is visible at the type level
//! rather than hidden in a lookup failure path.
//!
//! [`apply`] runs the four stages in a fixed order (day type, primary
//! activity, parental control, device access). Multiplication is commutative,
//! so the order only matters for reproducibility of the recorded factor
//! trace.

use crate::types::{
    AppliedFactor, DayType, DeviceAccess, FactorDimension, ModifiedEstimate, ParentalControl,
    PredictionInput, PrimaryActivity,
};

/// Weight for the kind of day
pub fn day_type_weight(day_type: &DayType) -> f64 {
    match day_type {
        DayType::Weekday => 0.8,
        DayType::Weekend => 1.4,
        DayType::Holiday => 1.6,
        DayType::Other(_) => 1.0,
    }
}

/// Weight for the child's dominant activity
pub fn activity_weight(activity: &PrimaryActivity) -> f64 {
    match activity {
        PrimaryActivity::School => 0.7,
        PrimaryActivity::Gaming => 1.3,
        PrimaryActivity::Creative => 0.9,
        PrimaryActivity::Reading => 0.6,
        PrimaryActivity::Social => 1.1,
        PrimaryActivity::Outdoor => 0.5,
        PrimaryActivity::Sports => 0.4,
        PrimaryActivity::Other(_) => 1.0,
    }
}

/// Weight for the level of parental control
pub fn parental_control_weight(control: &ParentalControl) -> f64 {
    match control {
        ParentalControl::Strict => 0.6,
        ParentalControl::Moderate => 0.8,
        ParentalControl::Relaxed => 1.1,
        ParentalControl::None => 1.3,
        ParentalControl::Other(_) => 1.0,
    }
}

/// Weight for the device access level
pub fn device_access_weight(access: &DeviceAccess) -> f64 {
    match access {
        DeviceAccess::Limited => 0.7,
        DeviceAccess::Supervised => 0.9,
        DeviceAccess::Unrestricted => 1.2,
        DeviceAccess::Other(_) => 1.0,
    }
}

/// Apply the four multiplicative modifiers to a baseline, recording each
/// applied factor in pipeline order.
pub fn apply(base_hours: f64, input: &PredictionInput) -> ModifiedEstimate {
    let factors = vec![
        AppliedFactor {
            dimension: FactorDimension::DayType,
            label: input.day_type.as_str().to_string(),
            weight: day_type_weight(&input.day_type),
        },
        AppliedFactor {
            dimension: FactorDimension::PrimaryActivity,
            label: input.primary_activity.as_str().to_string(),
            weight: activity_weight(&input.primary_activity),
        },
        AppliedFactor {
            dimension: FactorDimension::ParentalControl,
            label: input.parental_control.as_str().to_string(),
            weight: parental_control_weight(&input.parental_control),
        },
        AppliedFactor {
            dimension: FactorDimension::DeviceAccess,
            label: input.device_access.as_str().to_string(),
            weight: device_access_weight(&input.device_access),
        },
    ];

    let hours = factors.iter().fold(base_hours, |acc, f| acc * f.weight);

    ModifiedEstimate {
        base_hours,
        hours,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_input() -> PredictionInput {
        PredictionInput {
            child_age: 10,
            day_type: DayType::Weekend,
            primary_activity: PrimaryActivity::Gaming,
            previous_screen_time: 3.0,
            parental_control: ParentalControl::Moderate,
            device_access: DeviceAccess::Supervised,
        }
    }

    #[test]
    fn test_apply_multiplies_in_fixed_order() {
        // 3.5 * 1.4 * 1.3 * 0.8 * 0.9 = 4.5864
        let modified = apply(3.5, &make_input());

        assert_eq!(modified.base_hours, 3.5);
        assert!((modified.hours - 4.5864).abs() < 1e-9);

        let dims: Vec<_> = modified.factors.iter().map(|f| f.dimension).collect();
        assert_eq!(
            dims,
            vec![
                FactorDimension::DayType,
                FactorDimension::PrimaryActivity,
                FactorDimension::ParentalControl,
                FactorDimension::DeviceAccess,
            ]
        );
    }

    #[test]
    fn test_unknown_values_are_neutral() {
        let mut input = make_input();
        input.day_type = DayType::Other("snowday".to_string());
        input.primary_activity = PrimaryActivity::Other("esports".to_string());
        input.parental_control = ParentalControl::Other("adaptive".to_string());
        input.device_access = DeviceAccess::Other("shared".to_string());

        let modified = apply(3.5, &input);
        assert_eq!(modified.hours, 3.5);
        assert!(modified.factors.iter().all(|f| f.weight == 1.0));
        assert_eq!(modified.factors[0].label, "snowday");
    }

    #[test]
    fn test_factor_trace_records_labels_and_weights() {
        let modified = apply(3.5, &make_input());

        assert_eq!(modified.factors[0].label, "weekend");
        assert_eq!(modified.factors[0].weight, 1.4);
        assert_eq!(modified.factors[1].label, "gaming");
        assert_eq!(modified.factors[1].weight, 1.3);
        assert_eq!(modified.factors[3].label, "supervised");
        assert_eq!(modified.factors[3].weight, 0.9);
    }
}
