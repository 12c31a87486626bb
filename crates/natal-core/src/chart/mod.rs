pub mod analysis;
pub mod settings;

pub use analysis::{AnglePlacements, ChartAnalysis, ChartEngine, Placement};
pub use settings::EngineSettings;
