use crate::positions::ChartPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Semisextile,
    Semisquare,
    Sextile,
    Quintile,
    Square,
    Trine,
    Sesquiquadrate,
    Biquintile,
    Quincunx,
    Opposition,
}

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Semisextile => "semisextile",
            Self::Semisquare => "semisquare",
            Self::Sextile => "sextile",
            Self::Quintile => "quintile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Sesquiquadrate => "sesquiquadrate",
            Self::Biquintile => "biquintile",
            Self::Quincunx => "quincunx",
            Self::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AspectKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_lowercase().as_str() {
            "conjunction" => Self::Conjunction,
            "semisextile" | "semi_sextile" => Self::Semisextile,
            "semisquare" | "semi_square" => Self::Semisquare,
            "sextile" => Self::Sextile,
            "quintile" => Self::Quintile,
            "square" => Self::Square,
            "trine" => Self::Trine,
            "sesquiquadrate" | "sesquisquare" => Self::Sesquiquadrate,
            "biquintile" => Self::Biquintile,
            "quincunx" | "inconjunct" => Self::Quincunx,
            "opposition" => Self::Opposition,
            _ => return Err(EngineError::UnknownAspect(s.to_string())),
        };
        Ok(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectClass {
    Major,
    Minor,
}

/// One row of the aspect table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Exact separation in degrees
    pub angle: f64,
    /// Maximum allowed deviation from `angle`, before orb scaling
    pub orb: f64,
    pub class: AspectClass,
}

/// Which rows of the table take part in matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectFilter {
    MajorOnly,
    #[default]
    All,
}

impl AspectFilter {
    pub fn admits(self, class: AspectClass) -> bool {
        match self {
            AspectFilter::All => true,
            AspectFilter::MajorOnly => class == AspectClass::Major,
        }
    }
}

/// A matched aspect between two chart points.
///
/// `first` always sorts before `second`, so the same pair produces the same
/// value whichever order it was asked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: ChartPoint,
    pub second: ChartPoint,
    pub kind: AspectKind,
    pub class: AspectClass,
    /// Target angle for this aspect (0, 60, 90, 120, 180, ...)
    pub exact_angle: f64,
    /// Shortest-arc separation in [0, 180]
    pub separation: f64,
    /// |separation - exact_angle|
    pub orb: f64,
    /// separation - exact_angle; negative when inside the exact angle
    pub signed_orb: f64,
    /// Effective tolerance after orb scaling
    pub max_orb: f64,
    /// 1 at exact, 0 at the orb boundary
    pub strength: f64,
    pub important: bool,
    pub exact: bool,
    /// Whether either participant is flagged retrograde
    pub involves_retrograde: bool,
}

impl Aspect {
    pub fn involves(&self, point: ChartPoint) -> bool {
        self.first == point || self.second == point
    }
}
