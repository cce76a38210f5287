use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{ReasonThresholds, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub supabase: Option<SupabaseSettings>,
    #[serde(default)]
    pub database: Option<DatabaseSettings>,
    #[serde(default)]
    pub memory: Option<MemorySettings>,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Which profile store backs the matcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Supabase,
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_candidate_table")]
    pub candidate_table: String,
    #[serde(default = "default_mentor_table")]
    pub mentor_table: String,
    pub timeout_secs: Option<u64>,
}

fn default_candidate_table() -> String { "candidate_profiles".to_string() }
fn default_mentor_table() -> String { "mentor_profiles".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemorySettings {
    pub fixtures_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_quick_limit")]
    pub quick_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            quick_limit: default_quick_limit(),
        }
    }
}

fn default_limit() -> u16 { 10 }
fn default_max_limit() -> u16 { 100 }
fn default_quick_limit() -> u16 { 5 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_industry_weight")]
    pub industry: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            industry: default_industry_weight(),
            availability: default_availability_weight(),
            experience: default_experience_weight(),
            rating: default_rating_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 0.35 }
fn default_industry_weight() -> f64 { 0.20 }
fn default_availability_weight() -> f64 { 0.15 }
fn default_experience_weight() -> f64 { 0.15 }
fn default_rating_weight() -> f64 { 0.15 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skill: config.skill,
            industry: config.industry,
            availability: config.availability,
            experience: config.experience,
            rating: config.rating,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_strong_skill")]
    pub strong_skill: f64,
    #[serde(default = "default_related_skill")]
    pub related_skill: f64,
    #[serde(default = "default_industry_threshold")]
    pub industry: f64,
    #[serde(default = "default_availability_threshold")]
    pub availability: f64,
    #[serde(default = "default_experience_threshold")]
    pub experience: f64,
    #[serde(default = "default_rating_threshold")]
    pub rating: f64,
    #[serde(default = "default_endorsements_threshold")]
    pub endorsements: i32,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            strong_skill: default_strong_skill(),
            related_skill: default_related_skill(),
            industry: default_industry_threshold(),
            availability: default_availability_threshold(),
            experience: default_experience_threshold(),
            rating: default_rating_threshold(),
            endorsements: default_endorsements_threshold(),
        }
    }
}

fn default_strong_skill() -> f64 { 70.0 }
fn default_related_skill() -> f64 { 40.0 }
fn default_industry_threshold() -> f64 { 75.0 }
fn default_availability_threshold() -> f64 { 70.0 }
fn default_experience_threshold() -> f64 { 80.0 }
fn default_rating_threshold() -> f64 { 4.5 }
fn default_endorsements_threshold() -> i32 { 5 }

impl From<&ThresholdsConfig> for ReasonThresholds {
    fn from(config: &ThresholdsConfig) -> Self {
        Self {
            strong_skill: config.strong_skill,
            related_skill: config.related_skill,
            industry: config.industry,
            availability: config.availability,
            experience: config.experience,
            rating: config.rating,
            endorsements: config.endorsements,
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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ACADEMY__)
    /// 5. SUPABASE_URL, SUPABASE_SERVICE_ROLE_KEY and DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ACADEMY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ACADEMY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = apply_env_overrides(settings)?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ACADEMY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    pub fn reason_thresholds(&self) -> ReasonThresholds {
        ReasonThresholds::from(&self.scoring.thresholds)
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring_weights().validate().map_err(ConfigError::Message)?;

        if self.matching.max_limit == 0 {
            return Err(ConfigError::Message("matching.max_limit must be positive".into()));
        }

        let missing = match self.store.backend {
            StoreBackend::Supabase if self.supabase.is_none() => Some("supabase"),
            StoreBackend::Postgres if self.database.is_none() => Some("database"),
            StoreBackend::Memory if self.memory.is_none() => Some("memory"),
            _ => None,
        };

        match missing {
            Some(section) => Err(ConfigError::Message(format!(
                "store backend {:?} requires a [{}] section",
                self.store.backend, section
            ))),
            None => Ok(()),
        }
    }
}

/// Apply well-known environment variables on top of the layered config
///
/// These are the names the Supabase tooling exports, so deployments can reuse them
/// without the ACADEMY__ prefix.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("SUPABASE_URL") {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Ok(key) = env::var("SUPABASE_SERVICE_ROLE_KEY") {
        builder = builder.set_override("supabase.api_key", key)?;
    }
    if let Ok(url) = env::var("DATABASE_URL") {
        builder = builder.set_override("database.url", url)?;
    }

    builder.build()
}
