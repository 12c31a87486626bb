use crate::aspects::table::AspectSettings;
use crate::aspects::types::{Aspect, AspectDefinition};
use crate::positions::{Angle, ChartAngles, ChartPoint, PositionSet};
use crate::zodiac::circular_separation;

/// One side of a candidate aspect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectEndpoint {
    pub point: ChartPoint,
    pub longitude: f64,
    pub retrograde: bool,
}

impl AspectEndpoint {
    pub fn new(point: impl Into<ChartPoint>, longitude: f64, retrograde: bool) -> Self {
        Self {
            point: point.into(),
            longitude,
            retrograde,
        }
    }
}

const CHART_ANGLES: [Angle; 2] = [Angle::Ascendant, Angle::Midheaven];

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Aspects between every unordered pair of bodies, strongest first.
    pub fn compute_body_aspects(
        &self,
        positions: &PositionSet,
        settings: &AspectSettings,
    ) -> Vec<Aspect> {
        let endpoints: Vec<AspectEndpoint> = positions
            .iter()
            .map(|p| AspectEndpoint::new(p.body, p.longitude, p.retrograde))
            .collect();

        if endpoints.len() < 2 {
            return Vec::new();
        }

        let mut aspects = Vec::new();
        for i in 0..endpoints.len() {
            for j in (i + 1)..endpoints.len() {
                if let Some(aspect) = self.calculate_aspect(endpoints[i], endpoints[j], settings) {
                    aspects.push(aspect);
                }
            }
        }

        sort_aspects(&mut aspects);
        log::debug!(
            "matched {} body aspects across {} bodies",
            aspects.len(),
            endpoints.len()
        );
        aspects
    }

    /// Aspects from every body to the ascendant and midheaven. The two
    /// angles are never paired with each other.
    pub fn compute_angle_aspects(
        &self,
        positions: &PositionSet,
        angles: &ChartAngles,
        settings: &AspectSettings,
    ) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for position in positions.iter() {
            let body = AspectEndpoint::new(position.body, position.longitude, position.retrograde);
            for angle in CHART_ANGLES {
                let target = AspectEndpoint::new(angle, angles.longitude(angle), false);
                if let Some(aspect) = self.calculate_aspect(body, target, settings) {
                    aspects.push(aspect);
                }
            }
        }

        sort_aspects(&mut aspects);
        log::debug!("matched {} aspects to chart angles", aspects.len());
        aspects
    }

    /// Best-matching aspect between two endpoints, if any row of the table
    /// is within orb. The closest orb wins; ties keep table order.
    pub fn calculate_aspect(
        &self,
        a: AspectEndpoint,
        b: AspectEndpoint,
        settings: &AspectSettings,
    ) -> Option<Aspect> {
        let (first, second) = if b.point < a.point { (b, a) } else { (a, b) };
        let separation = circular_separation(first.longitude, second.longitude);
        let factor = settings.scaling.pair_factor(first.point, second.point);

        let mut best: Option<(&AspectDefinition, f64, f64)> = None;
        for def in settings.table.definitions() {
            if !settings.filter.admits(def.class) {
                continue;
            }
            let max_orb = def.orb * factor;
            let orb = (separation - def.angle).abs();
            if orb > max_orb {
                continue;
            }
            match best {
                Some((_, best_orb, _)) if orb >= best_orb => {}
                _ => best = Some((def, orb, max_orb)),
            }
        }

        let (def, orb, max_orb) = best?;
        let strength = orb_strength(orb, max_orb);

        Some(Aspect {
            first: first.point,
            second: second.point,
            kind: def.kind,
            class: def.class,
            exact_angle: def.angle,
            separation,
            orb,
            signed_orb: separation - def.angle,
            max_orb,
            strength,
            important: strength >= settings.important_threshold,
            exact: orb < settings.exact_threshold,
            involves_retrograde: first.retrograde || second.retrograde,
        })
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear falloff from 1 at exact to 0 at the orb boundary.
fn orb_strength(orb: f64, max_orb: f64) -> f64 {
    if max_orb <= 0.0 {
        return if orb <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - orb / max_orb).clamp(0.0, 1.0)
}

/// Strength descending, then pair order, then aspect kind.
fn sort_aspects(aspects: &mut [Aspect]) {
    aspects.sort_by(|a, b| {
        b.strength
            .total_cmp(&a.strength)
            .then_with(|| a.first.cmp(&b.first))
            .then_with(|| a.second.cmp(&b.second))
            .then_with(|| a.kind.cmp(&b.kind))
    });
}
