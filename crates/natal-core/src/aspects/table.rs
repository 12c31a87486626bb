//! Static aspect definitions and the knobs that tune matching.

use crate::aspects::types::{AspectClass, AspectDefinition, AspectFilter, AspectKind};
use crate::error::EngineError;
use crate::positions::{Body, ChartPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

lazy_static::lazy_static! {
    /// Default table. Row order is the tie-break order when two rows match
    /// a separation equally well.
    static ref DEFAULT_ASPECT_TABLE: AspectTable = AspectTable {
        definitions: vec![
            AspectDefinition { kind: AspectKind::Conjunction, angle: 0.0, orb: 8.0, class: AspectClass::Major },
            AspectDefinition { kind: AspectKind::Opposition, angle: 180.0, orb: 8.0, class: AspectClass::Major },
            AspectDefinition { kind: AspectKind::Trine, angle: 120.0, orb: 7.0, class: AspectClass::Major },
            AspectDefinition { kind: AspectKind::Square, angle: 90.0, orb: 6.0, class: AspectClass::Major },
            AspectDefinition { kind: AspectKind::Sextile, angle: 60.0, orb: 4.0, class: AspectClass::Major },
            AspectDefinition { kind: AspectKind::Quincunx, angle: 150.0, orb: 3.0, class: AspectClass::Minor },
            AspectDefinition { kind: AspectKind::Semisextile, angle: 30.0, orb: 2.0, class: AspectClass::Minor },
            AspectDefinition { kind: AspectKind::Semisquare, angle: 45.0, orb: 2.0, class: AspectClass::Minor },
            AspectDefinition { kind: AspectKind::Sesquiquadrate, angle: 135.0, orb: 2.0, class: AspectClass::Minor },
            AspectDefinition { kind: AspectKind::Quintile, angle: 72.0, orb: 2.0, class: AspectClass::Minor },
            AspectDefinition { kind: AspectKind::Biquintile, angle: 144.0, orb: 2.0, class: AspectClass::Minor },
        ],
    };
}

/// Ordered set of aspect definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAspectTable")]
pub struct AspectTable {
    definitions: Vec<AspectDefinition>,
}

#[derive(Deserialize)]
struct RawAspectTable {
    definitions: Vec<AspectDefinition>,
}

impl TryFrom<RawAspectTable> for AspectTable {
    type Error = EngineError;

    fn try_from(raw: RawAspectTable) -> Result<Self, Self::Error> {
        Self::new(raw.definitions)
    }
}

impl AspectTable {
    /// Build a custom table. Every orb must be finite and non-negative.
    pub fn new(definitions: Vec<AspectDefinition>) -> Result<Self, EngineError> {
        for def in &definitions {
            check_orb(def.kind, def.orb)?;
        }
        Ok(Self { definitions })
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    pub fn get(&self, kind: AspectKind) -> Option<&AspectDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }

    /// Copy of this table with one orb replaced. Kinds not in the table are
    /// left alone.
    pub fn with_orb(mut self, kind: AspectKind, orb: f64) -> Result<Self, EngineError> {
        check_orb(kind, orb)?;
        for def in self.definitions.iter_mut().filter(|d| d.kind == kind) {
            def.orb = orb;
        }
        Ok(self)
    }
}

impl Default for AspectTable {
    fn default() -> Self {
        DEFAULT_ASPECT_TABLE.clone()
    }
}

fn check_orb(kind: AspectKind, orb: f64) -> Result<(), EngineError> {
    if orb.is_finite() && orb >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidOrb { kind, orb })
    }
}

/// Per-body orb widening. A pair uses the larger factor of its two members;
/// bodies without an entry (and chart angles) count as 1.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOrbScaling")]
pub struct OrbScaling {
    body_factors: BTreeMap<Body, f64>,
}

#[derive(Deserialize)]
struct RawOrbScaling {
    #[serde(default)]
    body_factors: BTreeMap<Body, f64>,
}

impl TryFrom<RawOrbScaling> for OrbScaling {
    type Error = EngineError;

    fn try_from(raw: RawOrbScaling) -> Result<Self, Self::Error> {
        Self::new(raw.body_factors)
    }
}

impl OrbScaling {
    /// Every factor must be finite and strictly positive.
    pub fn new(body_factors: BTreeMap<Body, f64>) -> Result<Self, EngineError> {
        for (&body, &factor) in &body_factors {
            check_factor(body, factor)?;
        }
        Ok(Self { body_factors })
    }

    pub fn uniform() -> Self {
        Self::default()
    }

    /// Sun and Moon get `factor` times the table orb.
    pub fn luminaries(factor: f64) -> Result<Self, EngineError> {
        Self::uniform()
            .with_factor(Body::Sun, factor)?
            .with_factor(Body::Moon, factor)
    }

    pub fn with_factor(mut self, body: Body, factor: f64) -> Result<Self, EngineError> {
        check_factor(body, factor)?;
        self.body_factors.insert(body, factor);
        Ok(self)
    }

    pub fn factor(&self, body: Body) -> f64 {
        self.body_factors.get(&body).copied().unwrap_or(1.0)
    }

    pub fn body_factors(&self) -> &BTreeMap<Body, f64> {
        &self.body_factors
    }

    pub fn pair_factor(&self, a: ChartPoint, b: ChartPoint) -> f64 {
        let factor_for = |point| match point {
            ChartPoint::Body(body) => self.factor(body),
            ChartPoint::Angle(_) => 1.0,
        };
        factor_for(a).max(factor_for(b))
    }
}

fn check_factor(body: Body, factor: f64) -> Result<(), EngineError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidOrbFactor { body, factor })
    }
}

/// Settings for aspect calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSettings {
    pub table: AspectTable,
    pub filter: AspectFilter,
    pub scaling: OrbScaling,
    /// Strength at or above which an aspect is flagged important
    pub important_threshold: f64,
    /// Orb in degrees below which an aspect counts as exact
    pub exact_threshold: f64,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            table: AspectTable::default(),
            filter: AspectFilter::All,
            scaling: OrbScaling::uniform(),
            important_threshold: 0.7,
            exact_threshold: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_no_overlaps() {
        let table = AspectTable::default();
        let defs = table.definitions();
        for (i, a) in defs.iter().enumerate() {
            for b in &defs[i + 1..] {
                let gap = (a.angle - b.angle).abs();
                assert!(gap > a.orb + b.orb, "{} overlaps {}", a.kind, b.kind);
            }
        }
    }

    #[test]
    fn test_with_orb_rejects_negative() {
        let result = AspectTable::default().with_orb(AspectKind::Trine, -1.0);
        assert!(matches!(result, Err(EngineError::InvalidOrb { .. })));
    }

    #[test]
    fn test_pair_factor_uses_wider_member() {
        let scaling = OrbScaling::luminaries(1.5).unwrap();
        let sun = ChartPoint::Body(Body::Sun);
        let mars = ChartPoint::Body(Body::Mars);
        let venus = ChartPoint::Body(Body::Venus);
        assert_eq!(scaling.pair_factor(sun, mars), 1.5);
        assert_eq!(scaling.pair_factor(mars, sun), 1.5);
        assert_eq!(scaling.pair_factor(mars, venus), 1.0);
    }

    #[test]
    fn test_orb_factors_must_be_finite_and_positive() {
        for bad in [f64::NAN, f64::INFINITY, 0.0, -1.0] {
            assert!(matches!(
                OrbScaling::luminaries(bad),
                Err(EngineError::InvalidOrbFactor { body: Body::Sun, .. })
            ));
        }
        let mut factors = BTreeMap::new();
        factors.insert(Body::Mars, f64::NAN);
        assert!(OrbScaling::new(factors).is_err());
    }

    #[test]
    fn test_deserialize_validates_orbs_and_factors() {
        let scaling: Result<OrbScaling, _> =
            serde_json::from_str(r#"{"body_factors": {"sun": -2.0}}"#);
        assert!(scaling.is_err());
        let scaling: OrbScaling = serde_json::from_str(r#"{"body_factors": {"sun": 1.5}}"#).unwrap();
        assert_eq!(scaling.factor(Body::Sun), 1.5);

        let table: Result<AspectTable, _> = serde_json::from_str(
            r#"{"definitions": [{"kind": "trine", "angle": 120.0, "orb": -7.0, "class": "major"}]}"#,
        );
        assert!(table.is_err());
        let round_trip: AspectTable =
            serde_json::from_str(&serde_json::to_string(&AspectTable::default()).unwrap()).unwrap();
        assert_eq!(round_trip, AspectTable::default());
    }
}
