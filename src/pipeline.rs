//! Pipeline orchestration
//!
//! This module provides the public API of the estimation engine. It chains
//! the pure stages in a fixed order:
//!
//! 1. Validator - range checks, all violations aggregated
//! 2. Base Estimator - age-banded baseline hours
//! 3. Modifier Pipeline - four multiplicative weights, then the 70/30 blend
//! 4. Bounds Clamp - enforce the legal output range
//! 5. Confidence Scorer and Insight Generator - run independently
//! 6. Result Assembler - hours/minutes split and packaging
//!
//! Every stage is a pure function: the same input always yields a
//! bit-identical result, and no state survives between calls.

use crate::assembler;
use crate::baseline;
use crate::confidence;
use crate::error::ValidationError;
use crate::insight;
use crate::modifiers;
use crate::types::{
    BlendedEstimate, ClampedEstimate, DetailedPrediction, ModifiedEstimate, PredictionInput,
    PredictionResult,
};
use crate::validator;

/// Weight of the modified estimate in the blend
pub const BLEND_ESTIMATE_WEIGHT: f64 = 0.7;

/// Weight of the previous day's screen time in the blend
pub const BLEND_PREVIOUS_WEIGHT: f64 = 0.3;

/// Legal output range in fractional hours (inclusive)
pub const ESTIMATE_RANGE: (f64, f64) = (0.5, 12.0);

/// Estimate daily screen time for a validated input.
///
/// The only failure mode is validation; unknown categorical values degrade to
/// neutral modifiers instead of erroring.
///
/// # Example
/// ```
/// use screenwise::{estimate, DayType, DeviceAccess, ParentalControl, PredictionInput, PrimaryActivity};
///
/// let input = PredictionInput {
///     child_age: 10,
///     day_type: DayType::Weekend,
///     primary_activity: PrimaryActivity::Gaming,
///     previous_screen_time: 3.0,
///     parental_control: ParentalControl::Moderate,
///     device_access: DeviceAccess::Supervised,
/// };
///
/// let prediction = estimate(&input).unwrap();
/// assert_eq!((prediction.hours, prediction.minutes), (4, 7));
/// ```
pub fn estimate(input: &PredictionInput) -> Result<PredictionResult, ValidationError> {
    estimate_detailed(input).map(|detailed| detailed.result)
}

/// Estimate daily screen time, keeping the intermediate stage values.
///
/// Same contract as [`estimate`], but the returned value also carries the
/// baseline, the per-dimension factor trace, and the blended and clamped
/// fractional hours for callers that render a breakdown.
pub fn estimate_detailed(
    input: &PredictionInput,
) -> Result<DetailedPrediction, ValidationError> {
    let input = validator::validate(input)?;

    let base_hours = baseline::base_hours_for_age(input.child_age);
    let modified = modifiers::apply(base_hours, input);
    let blended = blend(&modified, input.previous_screen_time);
    let clamped = clamp(blended);

    let confidence_percent = confidence::score(input);
    let insight_text = insight::generate(input, clamped.hours());

    let result = assembler::assemble(&clamped, confidence_percent, insight_text);

    Ok(DetailedPrediction {
        result,
        modified,
        blended_hours: blended.hours,
        clamped_hours: clamped.hours(),
    })
}

/// Blend the modified estimate with prior-day usage.
///
/// Applied exactly once, after all multiplicative modifiers:
/// `hours * 0.7 + previous * 0.3`.
pub fn blend(modified: &ModifiedEstimate, previous_screen_time: f64) -> BlendedEstimate {
    BlendedEstimate {
        hours: modified.hours * BLEND_ESTIMATE_WEIGHT
            + previous_screen_time * BLEND_PREVIOUS_WEIGHT,
    }
}

/// Clamp a blended estimate into the legal output range.
///
/// The single point where the reasonable-range invariant is enforced; no
/// other component may relax or bypass it.
pub fn clamp(blended: BlendedEstimate) -> ClampedEstimate {
    let (min, max) = ESTIMATE_RANGE;
    ClampedEstimate::new(blended.hours.clamp(min, max))
}
