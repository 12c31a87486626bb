use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bodies the engine knows how to relate. Declaration order is the
/// canonical order used for every sorted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    MeanNode,
    SouthNode,
    Chiron,
}

pub const ALL_BODIES: [Body; 13] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::MeanNode,
    Body::SouthNode,
    Body::Chiron,
];

impl Body {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::MeanNode => "Mean Node",
            Self::SouthNode => "South Node",
            Self::Chiron => "Chiron",
        }
    }

    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EngineError;

    /// Accepts display names and snake_case ids, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        let body = match key.as_str() {
            "sun" => Body::Sun,
            "moon" => Body::Moon,
            "mercury" => Body::Mercury,
            "venus" => Body::Venus,
            "mars" => Body::Mars,
            "jupiter" => Body::Jupiter,
            "saturn" => Body::Saturn,
            "uranus" => Body::Uranus,
            "neptune" => Body::Neptune,
            "pluto" => Body::Pluto,
            "mean_node" | "north_node" | "node" => Body::MeanNode,
            "south_node" => Body::SouthNode,
            "chiron" => Body::Chiron,
            _ => return Err(EngineError::UnknownBody(s.to_string())),
        };
        Ok(body)
    }
}

/// Chart angles treated as aspect participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Angle {
    Ascendant,
    Midheaven,
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Ascendant => f.write_str("Ascendant"),
            Angle::Midheaven => f.write_str("Midheaven"),
        }
    }
}

/// Anything that can sit at one end of an aspect. Bodies sort before angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartPoint {
    Body(Body),
    Angle(Angle),
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartPoint::Body(body) => body.fmt(f),
            ChartPoint::Angle(angle) => angle.fmt(f),
        }
    }
}

impl From<Body> for ChartPoint {
    fn from(body: Body) -> Self {
        ChartPoint::Body(body)
    }
}

impl From<Angle> for ChartPoint {
    fn from(angle: Angle) -> Self {
        ChartPoint::Angle(angle)
    }
}

/// Reject anything that is not a finite longitude in [0, 360).
pub fn validate_longitude(point: ChartPoint, value: f64) -> Result<f64, EngineError> {
    if !value.is_finite() {
        return Err(EngineError::NonFiniteLongitude { point, value });
    }
    if !(0.0..360.0).contains(&value) {
        return Err(EngineError::LongitudeOutOfRange { point, value });
    }
    Ok(value)
}

/// Validated position of a single body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude in degrees [0, 360)
    pub longitude: f64,
    /// Meaningless for the luminaries; carried through untouched
    pub retrograde: bool,
}

/// Duplicate-free collection of body positions, always iterated in
/// canonical body order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionSet {
    positions: Vec<BodyPosition>,
}

impl PositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        body: Body,
        longitude: f64,
        retrograde: bool,
    ) -> Result<(), EngineError> {
        let longitude = validate_longitude(body.into(), longitude)?;
        match self.positions.binary_search_by_key(&body, |p| p.body) {
            Ok(_) => Err(EngineError::DuplicateBody(body)),
            Err(slot) => {
                self.positions.insert(
                    slot,
                    BodyPosition {
                        body,
                        longitude,
                        retrograde,
                    },
                );
                Ok(())
            }
        }
    }

    /// Build from `(identifier, longitude, retrograde)` triples as handed over
    /// by the ephemeris collaborator.
    pub fn from_named<'a, I>(entries: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (&'a str, f64, bool)>,
    {
        let mut set = Self::new();
        for (name, longitude, retrograde) in entries {
            let body: Body = name.parse()?;
            set.insert(body, longitude, retrograde)?;
        }
        Ok(set)
    }

    pub fn get(&self, body: Body) -> Option<&BodyPosition> {
        self.positions
            .binary_search_by_key(&body, |p| p.body)
            .ok()
            .map(|idx| &self.positions[idx])
    }

    pub fn longitude(&self, body: Body) -> Option<f64> {
        self.get(body).map(|p| p.longitude)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyPosition> {
        self.positions.iter()
    }

    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.positions.iter().map(|p| p.body)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Validated ascendant / midheaven pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
}

impl ChartAngles {
    pub fn new(ascendant: f64, midheaven: f64) -> Result<Self, EngineError> {
        Ok(Self {
            ascendant: validate_longitude(Angle::Ascendant.into(), ascendant)?,
            midheaven: validate_longitude(Angle::Midheaven.into(), midheaven)?,
        })
    }

    pub fn longitude(&self, angle: Angle) -> f64 {
        match angle {
            Angle::Ascendant => self.ascendant,
            Angle::Midheaven => self.midheaven,
        }
    }
}

/// Body entry exactly as received from the ephemeris lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBodyPosition {
    #[serde(alias = "name", alias = "id")]
    pub body: String,
    #[serde(alias = "lon")]
    pub longitude: f64,
    #[serde(default)]
    pub retrograde: bool,
}

/// Unvalidated position snapshot for one chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartInput {
    pub bodies: Vec<RawBodyPosition>,
    #[serde(alias = "asc")]
    pub ascendant: f64,
    #[serde(alias = "mc")]
    pub midheaven: f64,
    /// House cusps 1..12, if the collaborator computed them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cusps: Option<Vec<f64>>,
}

impl ChartInput {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidJson(e.to_string()))
    }

    pub fn positions(&self) -> Result<PositionSet, EngineError> {
        PositionSet::from_named(
            self.bodies
                .iter()
                .map(|raw| (raw.body.as_str(), raw.longitude, raw.retrograde)),
        )
    }

    pub fn angles(&self) -> Result<ChartAngles, EngineError> {
        ChartAngles::new(self.ascendant, self.midheaven)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_from_str_variants() {
        assert_eq!("Sun".parse::<Body>().unwrap(), Body::Sun);
        assert_eq!("Mean Node".parse::<Body>().unwrap(), Body::MeanNode);
        assert_eq!("north_node".parse::<Body>().unwrap(), Body::MeanNode);
        assert_eq!("SOUTH-NODE".parse::<Body>().unwrap(), Body::SouthNode);
        assert_eq!(
            "vulcan".parse::<Body>(),
            Err(EngineError::UnknownBody("vulcan".to_string()))
        );
    }

    #[test]
    fn test_position_set_canonical_order() {
        let set = PositionSet::from_named([
            ("pluto", 10.0, true),
            ("moon", 20.0, false),
            ("sun", 30.0, false),
        ])
        .unwrap();
        let order: Vec<Body> = set.bodies().collect();
        assert_eq!(order, vec![Body::Sun, Body::Moon, Body::Pluto]);
        assert!(set.get(Body::Pluto).unwrap().retrograde);
    }

    #[test]
    fn test_position_set_rejects_duplicates() {
        let mut set = PositionSet::new();
        set.insert(Body::Mars, 12.0, false).unwrap();
        assert_eq!(
            set.insert(Body::Mars, 13.0, false),
            Err(EngineError::DuplicateBody(Body::Mars))
        );
    }

    #[test]
    fn test_validate_longitude() {
        let point = ChartPoint::Body(Body::Sun);
        assert_eq!(validate_longitude(point, 0.0), Ok(0.0));
        assert!(matches!(
            validate_longitude(point, 360.0),
            Err(EngineError::LongitudeOutOfRange { .. })
        ));
        assert!(matches!(
            validate_longitude(point, -10.0),
            Err(EngineError::LongitudeOutOfRange { .. })
        ));
        assert!(matches!(
            validate_longitude(point, f64::NAN),
            Err(EngineError::NonFiniteLongitude { .. })
        ));
    }

    #[test]
    fn test_chart_point_ordering() {
        assert!(ChartPoint::Body(Body::Chiron) < ChartPoint::Angle(Angle::Ascendant));
        assert!(ChartPoint::Angle(Angle::Ascendant) < ChartPoint::Angle(Angle::Midheaven));
        assert!(ChartPoint::Body(Body::Sun) < ChartPoint::Body(Body::Moon));
    }

    #[test]
    fn test_chart_input_from_json() {
        let json = r#"{
            "bodies": [{"name": "Sun", "lon": 280.37}, {"body": "moon", "longitude": 223.3, "retrograde": false}],
            "asc": 12.5,
            "mc": 270.1
        }"#;
        let input = ChartInput::from_json(json).unwrap();
        assert_eq!(input.bodies.len(), 2);
        assert!(input.cusps.is_none());
        let positions = input.positions().unwrap();
        assert_eq!(positions.longitude(Body::Sun), Some(280.37));
    }
}
