//! Input validation
//!
//! Range checks on the numeric fields of a prediction input. All violations
//! are collected before failing so the caller can report every problem at
//! once. Categorical fields are deliberately not checked here: unknown values
//! degrade to neutral modifiers downstream instead of blocking the call.

use crate::error::ValidationError;
use crate::types::PredictionInput;

/// Valid age range in years (inclusive)
pub const AGE_RANGE: (u8, u8) = (3, 18);

/// Valid previous-screen-time range in hours (inclusive)
pub const PREVIOUS_SCREEN_TIME_RANGE: (f64, f64) = (0.0, 24.0);

/// Validate a prediction input, returning it unchanged on success.
///
/// Checks `child_age` against [`AGE_RANGE`] and `previous_screen_time`
/// against [`PREVIOUS_SCREEN_TIME_RANGE`]. Both checks always run; the error
/// carries every violated constraint in check order.
pub fn validate(input: &PredictionInput) -> Result<&PredictionInput, ValidationError> {
    let mut violations = Vec::new();

    let (min_age, max_age) = AGE_RANGE;
    if input.child_age < min_age || input.child_age > max_age {
        violations.push(format!(
            "Child's age must be between {min_age} and {max_age} years"
        ));
    }

    // NaN fails the range check as well.
    let (min_prev, max_prev) = PREVIOUS_SCREEN_TIME_RANGE;
    if !(min_prev..=max_prev).contains(&input.previous_screen_time) {
        violations.push(format!(
            "Previous screen time must be between {min_prev} and {max_prev} hours"
        ));
    }

    if violations.is_empty() {
        Ok(input)
    } else {
        Err(ValidationError::new(violations))
    }
}
