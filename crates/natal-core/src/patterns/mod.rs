pub mod detector;
pub mod types;

pub use detector::PatternDetector;
pub use types::{ChartPatterns, GrandCross, GrandTrine, Kite, Stellium, TSquare, Yod};
