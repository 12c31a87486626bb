use crate::positions::Body;
use crate::zodiac::{Element, Modality, Sign};
use serde::{Deserialize, Serialize};

/// Several bodies sharing one sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stellium {
    pub sign: Sign,
    pub members: Vec<Body>,
}

/// Three bodies mutually in trine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandTrine {
    pub members: [Body; 3],
    /// Set when all three vertices sit in signs of the same element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
}

/// An opposition with a third body square to both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TSquare {
    pub opposition: [Body; 2],
    pub apex: Body,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<Modality>,
}

/// A sextile with a third body quincunx to both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yod {
    pub sextile: [Body; 2],
    pub apex: Body,
}

/// Grand trine plus a fourth body opposite one vertex and sextile the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kite {
    pub grand_trine: [Body; 3],
    /// Trine vertex opposed by the tail
    pub apex: Body,
    pub tail: Body,
}

/// Two oppositions whose ends are all mutually square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandCross {
    pub members: [Body; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<Modality>,
}

/// Every pattern found in one chart. Each list is in canonical body order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPatterns {
    pub stelliums: Vec<Stellium>,
    pub grand_trines: Vec<GrandTrine>,
    pub t_squares: Vec<TSquare>,
    pub yods: Vec<Yod>,
    pub kites: Vec<Kite>,
    pub grand_crosses: Vec<GrandCross>,
}

impl ChartPatterns {
    pub fn is_empty(&self) -> bool {
        self.stelliums.is_empty()
            && self.grand_trines.is_empty()
            && self.t_squares.is_empty()
            && self.yods.is_empty()
            && self.kites.is_empty()
            && self.grand_crosses.is_empty()
    }

    pub fn total(&self) -> usize {
        self.stelliums.len()
            + self.grand_trines.len()
            + self.t_squares.len()
            + self.yods.len()
            + self.kites.len()
            + self.grand_crosses.len()
    }
}
