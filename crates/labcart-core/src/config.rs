//! Storefront configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Furthest ahead the first bookable date may open.
pub const MAX_LEAD_DAYS: u32 = 30;

/// Longest span of bookable dates after the first one.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorefrontConfig {
    pub payment: PaymentConfig,
    pub schedule: ScheduleConfig,
}

/// Payment submission settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaymentConfig {
    /// Delay of the simulated gateway
    pub simulated_latency_ms: u64,
    /// Upper bound on one charge attempt
    pub attempt_timeout_ms: u64,
    /// Total charge attempts for transient failures
    pub max_attempts: u32,
    /// Pause between attempts
    pub retry_backoff_ms: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1500,
            attempt_timeout_ms: 10_000,
            max_attempts: 3,
            retry_backoff_ms: 250,
        }
    }
}

/// Home collection scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Days between today and the first bookable date
    pub lead_days: u32,
    /// Additional bookable days after the first one
    pub window_days: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            lead_days: 1,
            window_days: 7,
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file, or defaults when the file is absent.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(Self::from_toml_str(&content)?)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject settings the checkout cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.payment.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "payment.max_attempts must be at least 1".into(),
            ));
        }
        if self.payment.attempt_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "payment.attempt_timeout_ms must be positive".into(),
            ));
        }
        if self.schedule.lead_days == 0 {
            return Err(ConfigError::Invalid(
                "schedule.lead_days must be at least 1".into(),
            ));
        }
        if self.schedule.lead_days > MAX_LEAD_DAYS {
            return Err(ConfigError::Invalid(format!(
                "schedule.lead_days must be at most {}",
                MAX_LEAD_DAYS
            )));
        }
        if self.schedule.window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::Invalid(format!(
                "schedule.window_days must be at most {}",
                MAX_WINDOW_DAYS
            )));
        }
        Ok(())
    }
}
