//! Sign rulers for Western astrology.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).

use crate::error::EngineError;
use crate::positions::{validate_longitude, Angle, Body};
use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulershipScheme {
    #[default]
    Traditional,
    /// Outer planets take Scorpio, Aquarius and Pisces
    Modern,
}

const TRADITIONAL_RULERS: [Body; 12] = [
    Body::Mars,    // Aries
    Body::Venus,   // Taurus
    Body::Mercury, // Gemini
    Body::Moon,    // Cancer
    Body::Sun,     // Leo
    Body::Mercury, // Virgo
    Body::Venus,   // Libra
    Body::Mars,    // Scorpio
    Body::Jupiter, // Sagittarius
    Body::Saturn,  // Capricorn
    Body::Saturn,  // Aquarius
    Body::Jupiter, // Pisces
];

const MODERN_RULERS: [Body; 12] = [
    Body::Mars,
    Body::Venus,
    Body::Mercury,
    Body::Moon,
    Body::Sun,
    Body::Mercury,
    Body::Venus,
    Body::Pluto,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
];

/// Ruling body of a sign
pub fn sign_ruler(sign: Sign, scheme: RulershipScheme) -> Body {
    let idx = sign.index() as usize;
    match scheme {
        RulershipScheme::Traditional => TRADITIONAL_RULERS[idx],
        RulershipScheme::Modern => MODERN_RULERS[idx],
    }
}

/// Ruler lookup by raw sign index; fails outside 0..=11.
pub fn ruler_of_sign_index(sign_index: u8, scheme: RulershipScheme) -> Result<Body, EngineError> {
    Sign::from_index(sign_index).map(|sign| sign_ruler(sign, scheme))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRuler {
    pub rising_sign: Sign,
    pub ruler: Body,
    pub scheme: RulershipScheme,
}

/// Ruler of the sign on the ascendant.
pub fn chart_ruler(ascendant: f64, scheme: RulershipScheme) -> Result<ChartRuler, EngineError> {
    let ascendant = validate_longitude(Angle::Ascendant.into(), ascendant)?;
    let rising_sign = Sign::from_longitude(ascendant);
    Ok(ChartRuler {
        rising_sign,
        ruler: sign_ruler(rising_sign, scheme),
        scheme,
    })
}
