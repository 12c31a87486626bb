//! House placement from externally computed cusps.

use crate::error::EngineError;
use crate::zodiac::normalize_degrees;

/// Twelve validated house cusps, house 1 first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    cusps: [f64; 12],
}

impl HouseCusps {
    pub fn new(cusps: &[f64]) -> Result<Self, EngineError> {
        let cusps: [f64; 12] = cusps.try_into().map_err(|_| {
            EngineError::InvalidCusps(format!("expected 12 cusps, got {}", cusps.len()))
        })?;
        if let Some((idx, value)) = cusps
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite() || !(0.0..360.0).contains(*c))
        {
            return Err(EngineError::InvalidCusps(format!(
                "cusp {} is not a longitude in [0, 360): {}",
                idx + 1,
                value
            )));
        }
        Ok(Self { cusps })
    }

    pub fn cusps(&self) -> &[f64; 12] {
        &self.cusps
    }

    /// House (1..=12) containing `longitude`. A cusp belongs to the house it
    /// opens; houses spanning Aries 0° wrap.
    pub fn house_of(&self, longitude: f64) -> u8 {
        let lon = normalize_degrees(longitude);
        for house in 0..12 {
            let start = self.cusps[house];
            let end = self.cusps[(house + 1) % 12];
            let span = normalize_degrees(end - start);
            let offset = normalize_degrees(lon - start);
            if offset < span {
                return house as u8 + 1;
            }
        }
        log::warn!("degenerate cusps, no house contains {lon}; placing in house 1");
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_houses(ascendant: f64) -> HouseCusps {
        let cusps: Vec<f64> = (0..12)
            .map(|i| normalize_degrees(ascendant + 30.0 * i as f64))
            .collect();
        HouseCusps::new(&cusps).unwrap()
    }

    #[test]
    fn test_house_of_equal_houses() {
        let houses = equal_houses(0.0);
        assert_eq!(houses.house_of(0.0), 1);
        assert_eq!(houses.house_of(29.9), 1);
        assert_eq!(houses.house_of(30.0), 2);
        assert_eq!(houses.house_of(359.0), 12);
    }

    #[test]
    fn test_house_of_wraps_through_aries() {
        let houses = equal_houses(350.0);
        assert_eq!(houses.house_of(355.0), 1);
        assert_eq!(houses.house_of(10.0), 1);
        assert_eq!(houses.house_of(20.0), 2);
        assert_eq!(houses.house_of(345.0), 12);
    }

    #[test]
    fn test_rejects_wrong_count_and_range() {
        assert!(matches!(
            HouseCusps::new(&[0.0; 11]),
            Err(EngineError::InvalidCusps(_))
        ));
        let mut cusps = [0.0; 12];
        cusps[4] = 400.0;
        assert!(matches!(
            HouseCusps::new(&cusps),
            Err(EngineError::InvalidCusps(_))
        ));
    }
}
