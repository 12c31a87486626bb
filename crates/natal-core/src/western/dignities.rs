//! Essential dignities for Western astrology.
//!
//! Classifies a body by its sign as domicile, exaltation, detriment, fall or
//! peregrine. Detriment and fall are derived as the signs opposite the
//! domiciles and the exaltation, so each body needs only two table entries.

use crate::positions::{Body, PositionSet};
use crate::western::rulers::RulershipScheme;
use crate::zodiac::{circular_separation, Sign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dignity {
    Domicile,
    Exaltation,
    Detriment,
    Fall,
    Peregrine,
}

/// Static dignity row for one body
#[derive(Debug, Clone, Copy)]
pub struct DignityEntry {
    pub body: Body,
    pub domiciles: &'static [Sign],
    pub exaltation: Option<Sign>,
}

const TRADITIONAL_DIGNITIES: &[DignityEntry] = &[
    DignityEntry { body: Body::Sun, domiciles: &[Sign::Leo], exaltation: Some(Sign::Aries) },
    DignityEntry { body: Body::Moon, domiciles: &[Sign::Cancer], exaltation: Some(Sign::Taurus) },
    DignityEntry { body: Body::Mercury, domiciles: &[Sign::Gemini, Sign::Virgo], exaltation: Some(Sign::Virgo) },
    DignityEntry { body: Body::Venus, domiciles: &[Sign::Taurus, Sign::Libra], exaltation: Some(Sign::Pisces) },
    DignityEntry { body: Body::Mars, domiciles: &[Sign::Aries, Sign::Scorpio], exaltation: Some(Sign::Capricorn) },
    DignityEntry { body: Body::Jupiter, domiciles: &[Sign::Sagittarius, Sign::Pisces], exaltation: Some(Sign::Cancer) },
    DignityEntry { body: Body::Saturn, domiciles: &[Sign::Capricorn, Sign::Aquarius], exaltation: Some(Sign::Libra) },
];

// Outer planets only carry dignities under modern rulership
const MODERN_DIGNITIES: &[DignityEntry] = &[
    DignityEntry { body: Body::Uranus, domiciles: &[Sign::Aquarius], exaltation: None },
    DignityEntry { body: Body::Neptune, domiciles: &[Sign::Pisces], exaltation: None },
    DignityEntry { body: Body::Pluto, domiciles: &[Sign::Scorpio], exaltation: Some(Sign::Aries) },
];

/// Exact exaltation degree for a body (based on Aleister Crowley)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExactExaltation {
    pub body: Body,
    /// Longitude in degrees
    pub position: f64,
    /// Orb in degrees
    pub orb: f64,
}

pub const DEFAULT_EXACT_EXALTATIONS: &[ExactExaltation] = &[
    ExactExaltation { body: Body::Sun, position: 19.0, orb: 2.0 },
    ExactExaltation { body: Body::Moon, position: 33.0, orb: 2.0 },
    ExactExaltation { body: Body::Mercury, position: 165.0, orb: 2.0 },
    ExactExaltation { body: Body::Venus, position: 357.0, orb: 2.0 },
    ExactExaltation { body: Body::Mars, position: 298.0, orb: 2.0 },
    ExactExaltation { body: Body::Jupiter, position: 95.0, orb: 2.0 },
    ExactExaltation { body: Body::Saturn, position: 201.0, orb: 2.0 },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DignityReport {
    pub body: Body,
    pub sign: Sign,
    /// Strongest applicable status; Domicile > Exaltation > Detriment > Fall
    pub primary: Dignity,
    /// Every status that applies, in that same precedence order
    pub all: Vec<Dignity>,
    pub exact_exaltation: bool,
}

pub struct DignitiesService {
    scheme: RulershipScheme,
}

impl DignitiesService {
    pub fn new(scheme: RulershipScheme) -> Self {
        Self { scheme }
    }

    fn entry(&self, body: Body) -> Option<&'static DignityEntry> {
        let modern = match self.scheme {
            RulershipScheme::Modern => MODERN_DIGNITIES,
            RulershipScheme::Traditional => &[],
        };
        TRADITIONAL_DIGNITIES
            .iter()
            .chain(modern.iter())
            .find(|e| e.body == body)
    }

    /// Classify a body by sign. Bodies without a table row are peregrine.
    pub fn classify(&self, body: Body, sign: Sign) -> Vec<Dignity> {
        let mut result = Vec::new();
        if let Some(entry) = self.entry(body) {
            if entry.domiciles.contains(&sign) {
                result.push(Dignity::Domicile);
            }
            if entry.exaltation == Some(sign) {
                result.push(Dignity::Exaltation);
            }
            if entry.domiciles.iter().any(|d| d.opposite() == sign) {
                result.push(Dignity::Detriment);
            }
            if entry.exaltation.map(Sign::opposite) == Some(sign) {
                result.push(Dignity::Fall);
            }
        }
        if result.is_empty() {
            result.push(Dignity::Peregrine);
        }
        result
    }

    /// Full report for a body at a longitude.
    pub fn get_dignities(&self, body: Body, longitude: f64) -> DignityReport {
        let sign = Sign::from_longitude(longitude);
        let all = self.classify(body, sign);
        let exact_exaltation = DEFAULT_EXACT_EXALTATIONS
            .iter()
            .filter(|e| e.body == body)
            .any(|e| circular_separation(longitude, e.position) <= e.orb);
        DignityReport {
            body,
            sign,
            primary: all[0],
            all,
            exact_exaltation,
        }
    }

    /// Reports for every body in the set, canonical order.
    pub fn for_positions(&self, positions: &PositionSet) -> Vec<DignityReport> {
        positions
            .iter()
            .map(|p| self.get_dignities(p.body, p.longitude))
            .collect()
    }
}

impl Default for DignitiesService {
    fn default() -> Self {
        Self::new(RulershipScheme::Traditional)
    }
}
