//! Result assembly
//!
//! Splits a clamped fractional-hours estimate into whole hours and minutes
//! and packages it with the confidence score and insight text. Minute
//! rounding can land exactly on 60 (e.g. 4.9999 hours); that case carries
//! into the next whole hour so the minutes field always stays in 0-59.

use crate::types::{ClampedEstimate, PredictionResult};

/// Split a clamped estimate and package the final prediction.
pub fn assemble(
    estimate: &ClampedEstimate,
    confidence_percent: u8,
    insight_text: String,
) -> PredictionResult {
    let value = estimate.hours();
    let mut hours = value.floor() as u32;
    let mut minutes = ((value - value.floor()) * 60.0).round() as u32;

    // Carry when the fractional part rounds up to a full hour.
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }

    PredictionResult {
        hours,
        minutes,
        confidence_percent,
        insight_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clamped(hours: f64) -> ClampedEstimate {
        ClampedEstimate::new(hours)
    }

    #[test]
    fn test_split_into_hours_and_minutes() {
        let result = assemble(&clamped(4.11048), 85, "ok".to_string());
        assert_eq!(result.hours, 4);
        assert_eq!(result.minutes, 7); // round(0.11048 * 60) = 7
        assert_eq!(result.confidence_percent, 85);
        assert_eq!(result.insight_text, "ok");
    }

    #[test]
    fn test_whole_hours_have_zero_minutes() {
        let result = assemble(&clamped(12.0), 85, "ok".to_string());
        assert_eq!(result.hours, 12);
        assert_eq!(result.minutes, 0);
    }

    #[test]
    fn test_minute_rounding_carries_into_the_next_hour() {
        // 0.9999 * 60 rounds to 60; the carry keeps minutes in 0-59.
        let result = assemble(&clamped(4.9999), 85, "ok".to_string());
        assert_eq!(result.hours, 5);
        assert_eq!(result.minutes, 0);
    }

    #[test]
    fn test_minutes_just_below_the_carry_boundary() {
        // 0.99 * 60 = 59.4, rounds down to 59.
        let result = assemble(&clamped(4.99), 85, "ok".to_string());
        assert_eq!(result.hours, 4);
        assert_eq!(result.minutes, 59);
    }

    #[test]
    fn test_half_hour_floor_value() {
        let result = assemble(&clamped(0.5), 60, "ok".to_string());
        assert_eq!(result.hours, 0);
        assert_eq!(result.minutes, 30);
    }
}
