//! Run configuration, readable from TOML.
//!
//! ```toml
//! tide_system = "mean"
//! ```

use serde::{Deserialize, Serialize};

use crate::tide::TideSystem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TideConfig {
    #[serde(default)]
    pub tide_system: TideSystem,
}

impl TideConfig {
    pub fn from_toml_str(content: &str) -> Result<TideConfig, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn with_tide_system(self, tide_system: TideSystem) -> TideConfig {
        TideConfig { tide_system }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let config = TideConfig::from_toml_str("tide_system = \"mean\"").unwrap();
        assert_eq!(config.tide_system, TideSystem::Mean);
        let config = TideConfig::from_toml_str("tide_system = \"tide-free\"\n").unwrap();
        assert_eq!(config.tide_system, TideSystem::TideFree);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        assert_eq!(TideConfig::from_toml_str("").unwrap(), TideConfig::default());
    }

    #[test]
    fn test_rejects_unknown_system() {
        assert!(TideConfig::from_toml_str("tide_system = \"zero\"").is_err());
    }

    #[test]
    fn test_serialize_round_trip_text() {
        let config = TideConfig::default().with_tide_system(TideSystem::Mean);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(text.trim(), "tide_system = \"mean\"");
    }
}
