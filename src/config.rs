use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::backoff::RetryPolicy;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub payment_rail: PaymentRailConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Per-request deadline; 0 disables it
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

/// Simulated payment rail + its retry policy
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaymentRailConfig {
    #[serde(flatten)]
    pub retry: RetryPolicy,
    /// Probability that a single attempt succeeds
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
    /// Fixed RNG seed for reproducible runs; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_success_rate() -> f64 {
    0.7
}

impl Default for PaymentRailConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            success_rate: default_success_rate(),
            seed: None,
        }
    }
}

impl GatewayConfig {
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        (self.request_timeout_ms > 0)
            .then(|| std::time::Duration::from_millis(self.request_timeout_ms))
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
log_level: info
log_dir: ./logs
log_file: hexledger.log
use_json: false
rotation: daily
gateway:
  host: 127.0.0.1
  port: 8080
"#;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = AppConfig::from_yaml(BASE).unwrap();
        assert_eq!(config.gateway.request_timeout_ms, 10_000);
        assert_eq!(config.payment_rail.success_rate, 0.7);
        assert_eq!(config.payment_rail.retry.max_retries, 4);
        assert_eq!(config.payment_rail.retry.base_delay_ms, 200);
        assert_eq!(config.payment_rail.retry.max_delay_ms, 3000);
        assert!(config.payment_rail.seed.is_none());
    }

    #[test]
    fn test_payment_rail_section() {
        let yaml = format!(
            "{}{}",
            BASE,
            r#"
payment_rail:
  max_retries: 2
  base_delay_ms: 50
  multiplier: 3.0
  max_delay_ms: 500
  success_rate: 0.9
  seed: 42
"#
        );
        let config = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.payment_rail.retry.max_retries, 2);
        assert_eq!(config.payment_rail.retry.multiplier, 3.0);
        assert_eq!(config.payment_rail.success_rate, 0.9);
        assert_eq!(config.payment_rail.seed, Some(42));
    }

    #[test]
    fn test_partial_payment_rail_section() {
        let yaml = format!("{}{}", BASE, "\npayment_rail:\n  seed: 7\n");
        let config = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.payment_rail.seed, Some(7));
        assert_eq!(config.payment_rail.success_rate, 0.7);
        assert_eq!(config.payment_rail.retry, RetryPolicy::default());
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let mut config = AppConfig::from_yaml(BASE).unwrap();
        assert!(config.gateway.request_timeout().is_some());
        config.gateway.request_timeout_ms = 0;
        assert!(config.gateway.request_timeout().is_none());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(AppConfig::from_yaml("log_level: [").is_err());
        assert!(AppConfig::load("does-not-exist").is_err());
    }
}
