//! Plain-text rendering of a chart analysis.

use natal_core::aspects::Aspect;
use natal_core::patterns::ChartPatterns;
use natal_core::positions::Body;
use natal_core::zodiac::format_position;
use natal_core::ChartAnalysis;
use std::fmt;

fn join_bodies(bodies: &[Body]) -> String {
    bodies
        .iter()
        .map(|b| b.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_aspects(f: &mut fmt::Formatter<'_>, title: &str, aspects: &[Aspect]) -> fmt::Result {
    writeln!(f, "{title}")?;
    if aspects.is_empty() {
        writeln!(f, "  (none)")?;
    }
    for a in aspects {
        let marker = if a.important { " *" } else { "" };
        writeln!(
            f,
            "  {:<10} {:<15} {:<10} orb {:>5.2}  strength {:.2}{}",
            a.first.to_string(),
            a.kind.name(),
            a.second.to_string(),
            a.orb,
            a.strength,
            marker
        )?;
    }
    Ok(())
}

fn write_patterns(f: &mut fmt::Formatter<'_>, patterns: &ChartPatterns) -> fmt::Result {
    writeln!(f, "Patterns")?;
    if patterns.is_empty() {
        return writeln!(f, "  (none)");
    }
    for s in &patterns.stelliums {
        writeln!(f, "  Stellium in {}: {}", s.sign, join_bodies(&s.members))?;
    }
    for t in &patterns.grand_trines {
        let element = t.element.map(|e| format!(" ({e:?})")).unwrap_or_default();
        writeln!(f, "  Grand trine: {}{}", join_bodies(&t.members), element)?;
    }
    for t in &patterns.t_squares {
        let modality = t.modality.map(|m| format!(" ({m:?})")).unwrap_or_default();
        writeln!(
            f,
            "  T-square: {} opposite, apex {}{}",
            join_bodies(&t.opposition),
            t.apex,
            modality
        )?;
    }
    for y in &patterns.yods {
        writeln!(f, "  Yod: {} sextile, apex {}", join_bodies(&y.sextile), y.apex)?;
    }
    for k in &patterns.kites {
        writeln!(
            f,
            "  Kite: {}, tail {} opposite {}",
            join_bodies(&k.grand_trine),
            k.tail,
            k.apex
        )?;
    }
    for g in &patterns.grand_crosses {
        let modality = g.modality.map(|m| format!(" ({m:?})")).unwrap_or_default();
        writeln!(f, "  Grand cross: {}{}", join_bodies(&g.members), modality)?;
    }
    Ok(())
}

/// Text table view of an analysis.
pub struct Report<'a>(pub &'a ChartAnalysis);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;

        writeln!(f, "Placements")?;
        for p in &analysis.placements {
            let house = p.house.map(|h| format!("house {h:>2}")).unwrap_or_default();
            let retro = if p.retrograde { "R" } else { "" };
            writeln!(
                f,
                "  {:<10} {:>7.2}  {:<18} {:<9} {}",
                p.body.name(),
                p.longitude,
                p.formatted,
                house,
                retro
            )?;
        }
        for (name, lon) in [
            ("Ascendant", analysis.angles.ascendant),
            ("Midheaven", analysis.angles.midheaven),
        ] {
            writeln!(f, "  {:<10} {:>7.2}  {}", name, lon, format_position(lon))?;
        }
        writeln!(f)?;

        write_aspects(f, "Aspects", &analysis.aspects)?;
        writeln!(f)?;
        write_aspects(f, "Aspects to angles", &analysis.angle_aspects)?;
        writeln!(f)?;
        write_patterns(f, &analysis.patterns)?;
        writeln!(f)?;

        writeln!(
            f,
            "Chart ruler: {} ({} rising)",
            analysis.chart_ruler.ruler, analysis.chart_ruler.rising_sign
        )?;
        writeln!(f)?;

        writeln!(f, "Dignities")?;
        for d in &analysis.dignities {
            let exact = if d.exact_exaltation { " (exact exaltation)" } else { "" };
            writeln!(
                f,
                "  {:<10} {:<12} {:?}{}",
                d.body.name(),
                d.sign.name(),
                d.primary,
                exact
            )?;
        }
        Ok(())
    }
}
