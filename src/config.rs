//! # Configuration
//!
//! Solver and logging settings, read from a TOML file. Every field has a default, so an empty file
//! is a valid configuration.
//!
//! ```toml
//! [solver]
//! epsilon = 1e-8
//! max_iterations = 1000
//! method = "two_phase"
//! pivot_rule = "dantzig"
//! record_trace = false
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use crate::algorithm::{Method, PivotRuleKind, SolverOptions};
use crate::data::number_types::traits::Real;

/// Errors while loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// The contents are not valid TOML, or don't match the expected structure.
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// The complete configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parameters of the solve.
    pub solver: SolverConfig,
    /// Where and how to log.
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// If the content is malformed or a value is out of range.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.solver.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// If the file can't be read, the content is malformed or a value is out of range.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }
}

/// Solver configuration, see `SolverOptions` for the meaning of the fields.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub epsilon: f64,
    pub max_iterations: usize,
    pub method: Method,
    pub pivot_rule: PivotRuleKind,
    pub record_trace: bool,
    pub big_m_penalty: Option<f64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-8,
            max_iterations: 1000,
            method: Method::default(),
            pivot_rule: PivotRuleKind::default(),
            record_trace: false,
            big_m_penalty: None,
        }
    }
}

impl SolverConfig {
    /// Solver options in the number type of the problem.
    pub fn options<F: Real>(&self) -> SolverOptions<F> {
        SolverOptions {
            epsilon: F::cast(self.epsilon),
            max_iterations: self.max_iterations,
            method: self.method,
            pivot_rule: self.pivot_rule,
            record_trace: self.record_trace,
            big_m_penalty: self.big_m_penalty.map(F::cast),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0f64) {
            return Err(ConfigError::InvalidValue {
                field: "epsilon",
                reason: "must be a positive number".to_string(),
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_iterations",
                reason: "must be greater than 0".to_string(),
            });
        }
        if let Some(penalty) = self.big_m_penalty {
            if !(penalty.is_finite() && penalty > 0f64) {
                return Err(ConfigError::InvalidValue {
                    field: "big_m_penalty",
                    reason: "must be a positive number".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG` when set.
    pub level: String,
    /// `"json"` for structured output, anything else for human readable output.
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).with_writer(io::stderr).init();
            },
            _ => {
                fmt().with_env_filter(filter).with_writer(io::stderr).init();
            },
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
