use natal_core::aspects::{AspectFilter, AspectKind, AspectSettings, AspectTable, OrbScaling};
use natal_core::positions::Body;
use natal_core::western::RulershipScheme;
use natal_core::EngineSettings;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const CONFIG_PATHS: [&str; 2] = ["configs/natal.toml", "../../configs/natal.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AspectsToml {
    #[serde(default)]
    filter: Option<AspectFilter>,
    #[serde(default)]
    important_threshold: Option<f64>,
    #[serde(default)]
    exact_threshold: Option<f64>,
    /// aspect name -> orb in degrees
    #[serde(default)]
    orbs: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    rulership: Option<RulershipScheme>,
    #[serde(default)]
    stellium_min: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    aspects: AspectsToml,
    /// body name -> orb multiplier
    #[serde(default)]
    orb_factors: BTreeMap<String, f64>,
    #[serde(default)]
    chart: ChartToml,
}

/// Try common relative paths for `configs/natal.toml`.
pub fn read_natal_toml_text() -> anyhow::Result<String> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("loaded engine config from {p}");
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load natal.toml from {:?}", CONFIG_PATHS);
}

/// Parse TOML text into engine settings. Anything not mentioned keeps its
/// default; unknown aspects, bodies or keys are errors.
pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse natal.toml: {e}"))?;
    let RootConfigToml {
        aspects,
        orb_factors,
        chart,
    } = root;

    let mut table = AspectTable::default();
    for (name, orb) in aspects.orbs {
        let kind: AspectKind = name.parse()?;
        if table.get(kind).is_none() {
            anyhow::bail!("aspects.orbs.{name}: aspect is not part of the table");
        }
        table = table.with_orb(kind, orb)?;
    }

    let mut scaling = OrbScaling::uniform();
    for (name, factor) in orb_factors {
        let body: Body = name.parse()?;
        scaling = scaling
            .with_factor(body, factor)
            .map_err(|e| anyhow::anyhow!("orb_factors.{name}: {e}"))?;
    }

    let defaults = AspectSettings::default();
    let important_threshold = aspects
        .important_threshold
        .unwrap_or(defaults.important_threshold);
    if !(0.0..=1.0).contains(&important_threshold) {
        anyhow::bail!("aspects.important_threshold must be within [0, 1], got {important_threshold}");
    }
    let exact_threshold = aspects.exact_threshold.unwrap_or(defaults.exact_threshold);
    if !exact_threshold.is_finite() || exact_threshold < 0.0 {
        anyhow::bail!("aspects.exact_threshold must be a non-negative number, got {exact_threshold}");
    }

    let stellium_min = chart.stellium_min.unwrap_or(3);
    if stellium_min < 2 {
        anyhow::bail!("chart.stellium_min must be at least 2, got {stellium_min}");
    }

    Ok(EngineSettings {
        aspects: AspectSettings {
            table,
            filter: aspects.filter.unwrap_or(defaults.filter),
            scaling,
            important_threshold,
            exact_threshold,
        },
        rulership: chart.rulership.unwrap_or_default(),
        stellium_min,
    })
}

pub fn load_engine_settings_from_path(path: &Path) -> anyhow::Result<EngineSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_engine_settings(&text)
}

/// Load settings from `configs/natal.toml`, falling back to defaults when
/// no file is present. A file that exists but fails to parse is an error.
pub fn load_engine_settings() -> anyhow::Result<EngineSettings> {
    match read_natal_toml_text() {
        Ok(text) => parse_engine_settings(&text),
        Err(e) => {
            log::warn!("{e}; using default engine settings");
            Ok(EngineSettings::default())
        }
    }
}
