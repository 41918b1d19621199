use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::pricing::types::OptionParameters;

/// Initial parameter values, as decimals.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_strike")]
    pub strike: f64,

    #[serde(default = "default_spot")]
    pub spot: f64,

    #[serde(default = "default_years_to_exp")]
    pub years_to_exp: f64,

    #[serde(default = "default_sigma")]
    pub sigma: f64,

    #[serde(default = "default_rate")]
    pub rate: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            strike: default_strike(),
            spot: default_spot(),
            years_to_exp: default_years_to_exp(),
            sigma: default_sigma(),
            rate: default_rate(),
        }
    }
}

impl From<DefaultsConfig> for OptionParameters {
    fn from(d: DefaultsConfig) -> Self {
        OptionParameters::new(d.strike, d.spot, d.years_to_exp, d.sigma, d.rate)
    }
}

/// How text inputs are interpreted
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InputConfig {
    /// Volatility and rate fields are entered in percent ("30" means 0.30)
    #[serde(default = "default_percent_rates")]
    pub percent_rates: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            percent_rates: default_percent_rates(),
        }
    }
}

impl InputConfig {
    /// Decimal places the point moves between sigma/rate text and value.
    pub fn rate_shift(&self) -> i32 {
        if self.percent_rates {
            2
        } else {
            0
        }
    }
}

/// Main configuration struct for the pricer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub input: InputConfig,
}

impl PricingConfig {
    /// Textbook defaults with percent-style form inputs
    pub fn textbook() -> Self {
        Self::default()
    }

    /// Same defaults, but form inputs are already decimals
    pub fn decimal_inputs() -> Self {
        Self {
            input: InputConfig {
                percent_rates: false,
            },
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: PricingConfig = toml::from_str(s).context("invalid pricing config")?;
        Ok(config)
    }

    /// Load a TOML file. Missing keys fall back to the textbook values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded pricing config");
        Ok(config)
    }

    pub fn initial_parameters(&self) -> OptionParameters {
        self.defaults.into()
    }
}

fn default_strike() -> f64 {
    50.0
}

fn default_spot() -> f64 {
    50.0
}

fn default_years_to_exp() -> f64 {
    0.5
}

fn default_sigma() -> f64 {
    0.30
}

fn default_rate() -> f64 {
    0.05
}

fn default_percent_rates() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_textbook() {
        let config = PricingConfig::from_toml_str("").unwrap();
        assert_eq!(config.initial_parameters(), OptionParameters::default());
        assert!(config.input.percent_rates);
    }

    #[test]
    fn test_partial_override() {
        let config = PricingConfig::from_toml_str(
            r#"
            [defaults]
            strike = 42.0

            [input]
            percent_rates = false
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.strike, 42.0);
        assert_eq!(config.defaults.spot, 50.0);
        assert_eq!(config.input.rate_shift(), 0);
    }

    #[test]
    fn test_bad_type_rejected() {
        assert!(PricingConfig::from_toml_str("[defaults]\nsigma = \"high\"").is_err());
    }
}
