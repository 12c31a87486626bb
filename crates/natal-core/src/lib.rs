//! Aspect and pattern engine for natal charts.
//!
//! Turns a snapshot of ecliptic longitudes (as produced by an ephemeris
//! lookup) into placements, pairwise aspects, aspects to the chart angles,
//! chart patterns, the chart ruler and essential dignities.

pub mod aspects;
pub mod chart;
pub mod error;
pub mod patterns;
pub mod positions;
pub mod western;
pub mod zodiac;

pub use chart::{ChartAnalysis, ChartEngine, EngineSettings};
pub use error::EngineError;
pub use positions::{Angle, Body, ChartInput, ChartPoint, PositionSet};
