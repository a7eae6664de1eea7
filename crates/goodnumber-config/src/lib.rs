//! Configuration system for Good Number.
//!
//! Load server, finder and solver settings from TOML or YAML files without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use goodnumber_config::GoodNumberConfig;
//! use goodnumber_core::Family;
//!
//! let config = GoodNumberConfig::from_toml_str(r#"
//!     [server]
//!     port = 9090
//!
//!     [finder]
//!     families = ["round", "pi_digit"]
//!
//!     [solver]
//!     gap_limit = 50000
//! "#).unwrap();
//!
//! assert_eq!(config.server.port, 9090);
//! assert_eq!(config.finder.families, vec![Family::Round, Family::PiDigit]);
//! assert_eq!(config.planner().unwrap().solver().gap_limit(), 50000);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use goodnumber_config::GoodNumberConfig;
//!
//! let config = GoodNumberConfig::load("goodnumber.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use goodnumber_core::{
    Family, GapSolver, GoodNumberError, Increment, IncrementSet, Planner, TargetFinder,
    DEFAULT_GAP_LIMIT,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Increment names that collide with fields of the plan response.
pub const RESERVED_INCREMENT_NAMES: &[&str] = &["target"];

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid increment set: {0}")]
    Increments(#[from] GoodNumberError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GoodNumberConfig {
    /// HTTP shell settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Target finder settings.
    #[serde(default)]
    pub finder: FinderConfig,

    /// Gap solver settings.
    #[serde(default)]
    pub solver: SolverConfig,
}

impl GoodNumberConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Loads a file, picking the format from its extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Sets the listening host.
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.server.host = host;
        self
    }

    /// Sets the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Sets the solver gap limit.
    pub fn with_gap_limit(mut self, gap_limit: u64) -> Self {
        self.solver.gap_limit = gap_limit;
        self
    }

    /// Sets the enabled families.
    pub fn with_families(mut self, families: Vec<Family>) -> Self {
        self.finder.families = families;
        self
    }

    /// Replaces the increment set.
    pub fn with_increments(mut self, increments: Vec<Increment>) -> Self {
        self.solver.increments = Some(increments);
        self
    }

    /// Sets how many plans the server computes at once.
    pub fn with_max_concurrent_plans(mut self, limit: usize) -> Self {
        self.server.max_concurrent_plans = limit;
        self
    }

    /// Checks the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.max_concurrent_plans == 0 {
            return Err(ConfigError::Invalid(
                "server.max_concurrent_plans must be positive".to_string(),
            ));
        }
        self.planner().map(|_| ())
    }

    /// Builds the configured increment set, the Ingress gains by default.
    ///
    /// Names in [`RESERVED_INCREMENT_NAMES`] are rejected.
    pub fn increment_set(&self) -> Result<IncrementSet, ConfigError> {
        match &self.solver.increments {
            Some(increments) => {
                if let Some(reserved) = increments
                    .iter()
                    .find(|inc| RESERVED_INCREMENT_NAMES.contains(&inc.name.as_str()))
                {
                    return Err(ConfigError::Invalid(format!(
                        "increment name '{}' is reserved",
                        reserved.name
                    )));
                }
                Ok(IncrementSet::new(increments.clone())?)
            }
            None => Ok(IncrementSet::ingress()),
        }
    }

    /// Builds the configured target finder.
    pub fn finder(&self) -> Result<TargetFinder, ConfigError> {
        if self.finder.families.is_empty() {
            return Err(ConfigError::Invalid(
                "finder.families must name at least one family".to_string(),
            ));
        }
        Ok(TargetFinder::new()
            .with_families(self.finder.families.iter().copied())
            .with_parallel(self.finder.parallel))
    }

    /// Builds the configured gap solver.
    pub fn solver(&self) -> Result<GapSolver, ConfigError> {
        if self.solver.gap_limit == 0 {
            return Err(ConfigError::Invalid(
                "solver.gap_limit must be positive".to_string(),
            ));
        }
        Ok(GapSolver::new(self.increment_set()?).with_gap_limit(self.solver.gap_limit))
    }

    /// Builds the configured planner.
    pub fn planner(&self) -> Result<Planner, ConfigError> {
        Ok(Planner::new(self.finder()?, self.solver()?))
    }
}

/// HTTP shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding `main.css` and `main.js`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Plans computed at the same time; further requests wait.
    #[serde(default = "default_max_concurrent_plans")]
    pub max_concurrent_plans: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            max_concurrent_plans: default_max_concurrent_plans(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_max_concurrent_plans() -> usize {
    4
}

/// Target finder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FinderConfig {
    /// Families considered when picking a target.
    #[serde(default = "default_families")]
    pub families: Vec<Family>,

    /// Evaluate families on the rayon pool.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            families: default_families(),
            parallel: true,
        }
    }
}

fn default_families() -> Vec<Family> {
    Family::ALL.to_vec()
}

fn default_true() -> bool {
    true
}

/// Gap solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Largest gap the solver will sweep.
    #[serde(default = "default_gap_limit")]
    pub gap_limit: u64,

    /// Increment set override; the Ingress gains when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increments: Option<Vec<Increment>>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gap_limit: DEFAULT_GAP_LIMIT,
            increments: None,
        }
    }
}

fn default_gap_limit() -> u64 {
    DEFAULT_GAP_LIMIT
}
