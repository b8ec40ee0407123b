//! Report encoding
//!
//! Wraps a detailed prediction in a versioned JSON report carrying producer
//! metadata and a computation timestamp. This is the provenance/presentation
//! layer: the core pipeline never depends on it, and the wall clock read here
//! is the only impurity in the crate.

use crate::error::ValidationError;
use crate::pipeline;
use crate::types::{AppliedFactor, PredictionInput, PredictionResult};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Producer metadata embedded in every report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Breakdown of how the estimate was computed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportBreakdown {
    /// Age-banded baseline hours
    pub base_hours: f64,
    /// Multiplicative factors in pipeline order
    pub factors: Vec<AppliedFactor>,
    /// Value after the 70/30 blend with prior-day usage
    pub blended_hours: f64,
    /// Value after the bounds clamp
    pub clamped_hours: f64,
}

/// Complete prediction report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    /// Echo of the validated input the report describes
    pub input: PredictionInput,
    pub prediction: PredictionResult,
    pub breakdown: ReportBreakdown,
}

/// Encoder for producing prediction reports
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Run the estimation pipeline and wrap the outcome in a report
    pub fn encode(&self, input: &PredictionInput) -> Result<EstimateReport, ValidationError> {
        let detailed = pipeline::estimate_detailed(input)?;

        Ok(EstimateReport {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            input: input.clone(),
            prediction: detailed.result,
            breakdown: ReportBreakdown {
                base_hours: detailed.modified.base_hours,
                factors: detailed.modified.factors,
                blended_hours: detailed.blended_hours,
                clamped_hours: detailed.clamped_hours,
            },
        })
    }

}
