use crate::aspects::{Aspect, AspectCalculator, AspectFilter, AspectSettings};
use crate::chart::settings::EngineSettings;
use crate::error::EngineError;
use crate::patterns::{ChartPatterns, PatternDetector};
use crate::positions::{Body, ChartAngles, ChartInput, PositionSet};
use crate::western::{
    chart_ruler, get_decan_info_from_longitude, ChartRuler, DignitiesService, DignityReport,
    HouseCusps,
};
use crate::zodiac::{degree_in_sign, format_position, Sign};
use serde::{Deserialize, Serialize};

/// Where a body sits in the zodiac and, if cusps were supplied, its house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub body: Body,
    pub longitude: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
    pub decan: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
    pub retrograde: bool,
    /// Display form, e.g. `12°34' Leo`
    pub formatted: String,
}

/// Placement of the ascendant and midheaven
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnglePlacements {
    pub ascendant: f64,
    pub ascendant_sign: Sign,
    pub midheaven: f64,
    pub midheaven_sign: Sign,
}

/// Everything derived for one chart. Plain data, ready for templates or a
/// wheel renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub placements: Vec<Placement>,
    pub angles: AnglePlacements,
    pub aspects: Vec<Aspect>,
    pub angle_aspects: Vec<Aspect>,
    pub patterns: ChartPatterns,
    pub chart_ruler: ChartRuler,
    pub dignities: Vec<DignityReport>,
}

/// Chart engine. Holds only immutable settings.
pub struct ChartEngine {
    settings: EngineSettings,
    calculator: AspectCalculator,
    detector: PatternDetector,
    dignities: DignitiesService,
}

impl ChartEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            detector: PatternDetector::new(settings.stellium_min),
            dignities: DignitiesService::new(settings.rulership),
            calculator: AspectCalculator::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Validate a raw snapshot and analyze it.
    pub fn analyze(&self, input: &ChartInput) -> Result<ChartAnalysis, EngineError> {
        let positions = input.positions()?;
        let angles = input.angles()?;
        let cusps = input.cusps.as_deref().map(HouseCusps::new).transpose()?;
        self.analyze_positions(&positions, &angles, cusps.as_ref())
    }

    /// Analyze an already validated position set.
    pub fn analyze_positions(
        &self,
        positions: &PositionSet,
        angles: &ChartAngles,
        cusps: Option<&HouseCusps>,
    ) -> Result<ChartAnalysis, EngineError> {
        let aspect_settings = &self.settings.aspects;
        let aspects = self.calculator.compute_body_aspects(positions, aspect_settings);
        let angle_aspects = self
            .calculator
            .compute_angle_aspects(positions, angles, aspect_settings);
        // Patterns read the full table so that a major-only report still
        // finds yods.
        let patterns = if aspect_settings.filter == AspectFilter::All {
            self.detector.detect(&aspects, positions)
        } else {
            let unfiltered = AspectSettings {
                filter: AspectFilter::All,
                ..aspect_settings.clone()
            };
            let all_aspects = self.calculator.compute_body_aspects(positions, &unfiltered);
            self.detector.detect(&all_aspects, positions)
        };
        let chart_ruler = chart_ruler(angles.ascendant, self.settings.rulership)?;
        let dignities = self.dignities.for_positions(positions);

        let placements = positions
            .iter()
            .map(|p| Placement {
                body: p.body,
                longitude: p.longitude,
                sign: Sign::from_longitude(p.longitude),
                degree_in_sign: degree_in_sign(p.longitude),
                decan: get_decan_info_from_longitude(p.longitude).decan_index,
                house: cusps.map(|c| c.house_of(p.longitude)),
                retrograde: p.retrograde,
                formatted: format_position(p.longitude),
            })
            .collect();

        log::info!(
            "analyzed chart: {} bodies, {} aspects, {} angle aspects, {} patterns",
            positions.len(),
            aspects.len(),
            angle_aspects.len(),
            patterns.total()
        );

        Ok(ChartAnalysis {
            placements,
            angles: AnglePlacements {
                ascendant: angles.ascendant,
                ascendant_sign: Sign::from_longitude(angles.ascendant),
                midheaven: angles.midheaven,
                midheaven_sign: Sign::from_longitude(angles.midheaven),
            },
            aspects,
            angle_aspects,
            patterns,
            chart_ruler,
            dignities,
        })
    }
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
