use crate::aspects::AspectKind;
use crate::positions::{Body, ChartPoint};
use thiserror::Error;

/// Errors raised while validating chart input or looking up static tables.
///
/// Every variant describes malformed input; the engine is deterministic, so
/// none of these are worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Longitude for {point} is not a finite number: {value}")]
    NonFiniteLongitude { point: ChartPoint, value: f64 },
    #[error("Longitude for {point} is outside [0, 360): {value}")]
    LongitudeOutOfRange { point: ChartPoint, value: f64 },
    #[error("Unknown body identifier: {0:?}")]
    UnknownBody(String),
    #[error("Unknown aspect name: {0:?}")]
    UnknownAspect(String),
    #[error("Body {0} appears more than once in the position set")]
    DuplicateBody(Body),
    #[error("Sign index {0} is outside 0..=11")]
    SignIndexOutOfRange(u8),
    #[error("Invalid house cusps: {0}")]
    InvalidCusps(String),
    #[error("Invalid orb {orb} for {kind}: orbs must be finite and non-negative")]
    InvalidOrb { kind: AspectKind, orb: f64 },
    #[error("Invalid orb factor {factor} for {body}: factors must be finite and positive")]
    InvalidOrbFactor { body: Body, factor: f64 },
    #[error("Invalid chart input JSON: {0}")]
    InvalidJson(String),
}
