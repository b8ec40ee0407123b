//! Age-banded baseline estimation
//!
//! Maps a child's age to an initial hours figure via ordered inclusive bands,
//! evaluated top-down with the first match winning. Boundaries belong to the
//! lower band (age 8 yields the 6-8 band, not the 9-12 one) and there is no
//! interpolation between bands.

/// Age bands as (inclusive upper age, baseline hours), evaluated in order
const AGE_BANDS: &[(u8, f64)] = &[(5, 1.5), (8, 2.5), (12, 3.5), (15, 4.5)];

/// Baseline hours for ages above every band
const OLDEST_BAND_HOURS: f64 = 5.0;

/// Baseline screen-time hours for a child of the given age.
pub fn base_hours_for_age(age: u8) -> f64 {
    AGE_BANDS
        .iter()
        .find(|(max_age, _)| age <= *max_age)
        .map(|(_, hours)| *hours)
        .unwrap_or(OLDEST_BAND_HOURS)
}
