use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::taxonomy::{Category, Taxonomy, TaxonomyError};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub taxonomy: TaxonomySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_candidates: default_max_candidates(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_max_candidates() -> usize { 5000 }
fn default_parallel_threshold() -> usize { crate::core::matcher::DEFAULT_PARALLEL_THRESHOLD }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_exact_weight")]
    pub exact: f64,
    #[serde(default = "default_related_weight")]
    pub related: f64,
    #[serde(default = "default_balance_weight")]
    pub balance: f64,
    #[serde(default = "default_diversity_weight")]
    pub diversity: f64,
    #[serde(default = "default_diversity_divisor")]
    pub diversity_divisor: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            exact: default_exact_weight(),
            related: default_related_weight(),
            balance: default_balance_weight(),
            diversity: default_diversity_weight(),
            diversity_divisor: default_diversity_divisor(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            exact: config.exact,
            related: config.related,
            balance: config.balance,
            diversity: config.diversity,
            diversity_divisor: config.diversity_divisor,
        }
    }
}

fn default_exact_weight() -> f64 { 25.0 }
fn default_related_weight() -> f64 { 10.0 }
fn default_balance_weight() -> f64 { 10.0 }
fn default_diversity_weight() -> f64 { 5.0 }
fn default_diversity_divisor() -> f64 { 10.0 }

/// Optional replacement for the built-in taxonomy
///
/// Categories are kept in file order, which is also the tie-break order for
/// skill pairs that share more than one category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxonomySettings {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl TaxonomySettings {
    /// Build the process-wide taxonomy, falling back to the built-in one
    pub fn build(&self) -> Result<Taxonomy, TaxonomyError> {
        if self.categories.is_empty() {
            Ok(Taxonomy::builtin())
        } else {
            Taxonomy::new(self.categories.clone())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SWAP_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SWAP__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Parse settings from a TOML document, without environment overrides
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}
