//! Screenwise - Deterministic multi-factor estimation engine for children's
//! daily screen time
//!
//! Screenwise turns a record of a child's habits into an estimated daily
//! screen-time figure, a confidence percentage, and a short natural-language
//! insight, through a deterministic pipeline: validation → age-banded
//! baseline → multiplicative modifiers → prior-day blend → bounds clamp →
//! scoring/insight → assembly.
//!
//! The engine is a pure, synchronous function of its input: no hidden clock,
//! no randomness, no state between calls. Presentation concerns (rendering,
//! latency simulation, retries) belong to callers.

pub mod assembler;
pub mod baseline;
pub mod confidence;
pub mod error;
pub mod insight;
pub mod modifiers;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod validator;

pub use error::ValidationError;
pub use pipeline::{estimate, estimate_detailed};
pub use report::{EstimateReport, ReportEncoder};
pub use types::{
    DayType, DetailedPrediction, DeviceAccess, ParentalControl, PredictionInput,
    PredictionResult, PrimaryActivity,
};

/// Engine version embedded in all report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "screenwise";
