use crate::aspects::AspectSettings;
use crate::western::RulershipScheme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub aspects: AspectSettings,
    pub rulership: RulershipScheme,
    /// Minimum number of bodies in one sign to call it a stellium
    pub stellium_min: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            aspects: AspectSettings::default(),
            rulership: RulershipScheme::Traditional,
            stellium_min: 3,
        }
    }
}
