//! Confidence scoring
//!
//! Heuristic percentage reflecting how internally consistent the input
//! combination is. Starts from a fixed base and applies every matching
//! deduction, in order, before clamping to the legal range. This is not a
//! statistical measure.

use crate::types::{DayType, DeviceAccess, ParentalControl, PredictionInput, PrimaryActivity};

/// Starting score before deductions
pub const BASE_CONFIDENCE: i32 = 85;

/// Legal confidence range (inclusive)
pub const CONFIDENCE_RANGE: (u8, u8) = (60, 95);

/// Score an input combination, returning a percentage in [60, 95].
///
/// All matching deductions are subtracted, not just the first:
/// - age under 5 with unrestricted device access: -10
/// - strict controls but more than 6 prior hours: -15
/// - weekend paired with school as the primary activity: -20
pub fn score(input: &PredictionInput) -> u8 {
    let mut confidence = BASE_CONFIDENCE;

    if input.child_age < 5 && input.device_access == DeviceAccess::Unrestricted {
        confidence -= 10;
    }

    if input.parental_control == ParentalControl::Strict && input.previous_screen_time > 6.0 {
        confidence -= 15;
    }

    if input.day_type == DayType::Weekend && input.primary_activity == PrimaryActivity::School {
        confidence -= 20;
    }

    let (floor, ceiling) = CONFIDENCE_RANGE;
    confidence.clamp(floor as i32, ceiling as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_input() -> PredictionInput {
        PredictionInput {
            child_age: 10,
            day_type: DayType::Weekday,
            primary_activity: PrimaryActivity::Reading,
            previous_screen_time: 3.0,
            parental_control: ParentalControl::Moderate,
            device_access: DeviceAccess::Supervised,
        }
    }

    #[test]
    fn test_no_deductions_yields_base() {
        assert_eq!(score(&make_input()), 85);
    }

    #[test]
    fn test_young_child_unrestricted_access() {
        let mut input = make_input();
        input.child_age = 4;
        input.device_access = DeviceAccess::Unrestricted;
        assert_eq!(score(&input), 75);

        // Age 5 is not "under 5".
        input.child_age = 5;
        assert_eq!(score(&input), 85);
    }

    #[test]
    fn test_strict_controls_with_heavy_prior_usage() {
        let mut input = make_input();
        input.parental_control = ParentalControl::Strict;
        input.previous_screen_time = 6.5;
        assert_eq!(score(&input), 70);

        // Exactly 6 hours does not trigger the deduction.
        input.previous_screen_time = 6.0;
        assert_eq!(score(&input), 85);
    }

    #[test]
    fn test_school_on_a_weekend() {
        let mut input = make_input();
        input.day_type = DayType::Weekend;
        input.primary_activity = PrimaryActivity::School;
        assert_eq!(score(&input), 65);
    }

    #[test]
    fn test_all_deductions_clamp_at_floor() {
        // All three deductions apply (-45); the floor holds at 60, not 40.
        let input = PredictionInput {
            child_age: 4,
            day_type: DayType::Weekend,
            primary_activity: PrimaryActivity::School,
            previous_screen_time: 8.0,
            parental_control: ParentalControl::Strict,
            device_access: DeviceAccess::Unrestricted,
        };
        assert_eq!(score(&input), 60);
    }
}
