//! Western astrology decans calculations.
//!
//! Each sign is divided into 3 decans (10 degrees each), with decan rulers based on element groups.

use crate::positions::Body;
use crate::western::rulers::{sign_ruler, RulershipScheme};
use crate::zodiac::{degree_in_sign, Element, Sign, ALL_SIGNS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecanInfo {
    pub sign: Sign,
    pub element: Element,
    #[serde(rename = "signRuler")]
    pub sign_ruler: Body,
    #[serde(rename = "decanIndex")]
    pub decan_index: u8, // 1, 2, or 3
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64, // 0 <= x < 30
    #[serde(rename = "decanRuler")]
    pub decan_ruler: Body,
}

/// Given degree in sign, returns decan index 1, 2, or 3. Values outside
/// [0, 30) are clamped into the first or last decan.
pub fn get_decan_index(degree_in_sign: f64) -> u8 {
    if degree_in_sign < 10.0 {
        1
    } else if degree_in_sign < 20.0 {
        2
    } else {
        3
    }
}

/// Compute decan info given a sign and degree in that sign.
pub fn get_decan_info_for_sign_and_degree(sign: Sign, degree_in_sign: f64) -> DecanInfo {
    let decan_index = get_decan_index(degree_in_sign);

    // Rotate through the 3 signs of the same element, starting at this one
    let step = 4 * (decan_index as usize - 1);
    let decan_sign = ALL_SIGNS[(sign.index() as usize + step) % 12];

    DecanInfo {
        sign,
        element: sign.element(),
        sign_ruler: sign_ruler(sign, RulershipScheme::Traditional),
        decan_index,
        degree_in_sign,
        decan_ruler: sign_ruler(decan_sign, RulershipScheme::Traditional),
    }
}

/// From absolute longitude 0–360.
pub fn get_decan_info_from_longitude(longitude: f64) -> DecanInfo {
    get_decan_info_for_sign_and_degree(Sign::from_longitude(longitude), degree_in_sign(longitude))
}
