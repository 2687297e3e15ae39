use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub recommendation: RecommendationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON listing to load; the built-in sample is used when unset.
    pub source: Option<PathBuf>,
    pub fallback_to_sample: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub default_limit: usize,
    pub max_limit: usize,
    pub jitter_max: f64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: None,
            fallback_to_sample: true,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 50,
            jitter_max: crate::algorithms::JITTER_MAX,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix("MOVIEREC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog.source.is_none());
        assert!(config.catalog.fallback_to_sample);
        assert_eq!(config.recommendation.default_limit, 10);
        assert_eq!(config.recommendation.max_limit, 50);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"recommendation": {"max_limit": 5}}"#).unwrap();
        assert_eq!(config.recommendation.max_limit, 5);
        assert_eq!(config.recommendation.default_limit, 10);
        assert!(config.catalog.fallback_to_sample);
    }

    #[test]
    fn test_from_file_with_env_override() {
        let path = std::env::temp_dir()
            .join(format!("movierec-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[recommendation]\ndefault_limit = 7\nmax_limit = 20\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        std::env::set_var("MOVIEREC_RECOMMENDATION__MAX_LIMIT", "30");

        let loaded = Config::from_file(path.to_str().unwrap());

        std::env::remove_var("MOVIEREC_RECOMMENDATION__MAX_LIMIT");
        std::fs::remove_file(&path).unwrap();

        let config = loaded.unwrap();
        assert_eq!(config.recommendation.default_limit, 7);
        assert_eq!(config.recommendation.max_limit, 30);
        assert_eq!(config.logging.level, "debug");
        assert!(config.catalog.fallback_to_sample);
    }
}
