//! Text-field inputs, as typed into a pricing form.
//!
//! Percent fields are converted by moving the decimal point in the text, not by
//! float multiplication, so `from_parameters` followed by `parse` returns the
//! exact same `f64` bits.

use anyhow::{anyhow, Result};

use crate::pricing::config::InputConfig;
use crate::pricing::types::OptionParameters;

/// Raw field contents before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub strike: String,
    pub spot: String,
    pub years_to_exp: String,
    /// Volatility, in percent when `InputConfig::percent_rates` is set
    pub sigma: String,
    /// Risk-free rate, in percent when `InputConfig::percent_rates` is set
    pub rate: String,
}

impl FormInputs {
    /// Parse every field. Values are not range-checked.
    pub fn parse(&self, units: &InputConfig) -> Result<OptionParameters> {
        let shift = units.rate_shift();
        Ok(OptionParameters {
            strike: parse_field("strike", &self.strike)?,
            spot: parse_field("spot", &self.spot)?,
            years_to_exp: parse_field("years_to_exp", &self.years_to_exp)?,
            sigma: parse_shifted_field("sigma", &self.sigma, shift)?,
            rate: parse_shifted_field("rate", &self.rate, shift)?,
        })
    }

    /// Render parameters back into field text.
    pub fn from_parameters(params: &OptionParameters, units: &InputConfig) -> Self {
        let shift = units.rate_shift();
        Self {
            strike: params.strike.to_string(),
            spot: params.spot.to_string(),
            years_to_exp: params.years_to_exp.to_string(),
            sigma: render_shifted(params.sigma, shift),
            rate: render_shifted(params.rate, shift),
        }
    }
}

fn parse_field(name: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("field '{}' is empty", name));
    }
    trimmed
        .parse::<f64>()
        .map_err(|e| anyhow!("field '{}' is not a number ({:?}): {}", name, trimmed, e))
}

/// Parse `text` and divide by `10^shift` by adjusting its decimal exponent.
fn parse_shifted_field(name: &str, text: &str, shift: i32) -> Result<f64> {
    let value = parse_field(name, text)?;
    if shift == 0 || !value.is_finite() {
        return Ok(value);
    }

    let trimmed = text.trim();
    let (mantissa, exponent) = match trimmed.find(['e', 'E']) {
        Some(pos) => (&trimmed[..pos], trimmed[pos + 1..].parse::<i64>().ok()),
        None => (trimmed, Some(0)),
    };
    let shifted = exponent
        .and_then(|exp| exp.checked_sub(i64::from(shift)))
        .and_then(|exp| format!("{}e{}", mantissa, exp).parse::<f64>().ok());

    Ok(shifted.unwrap_or(value / 10f64.powi(shift)))
}

/// Render `value * 10^shift` by moving the decimal point of its shortest
/// round-trip representation.
fn render_shifted(value: f64, shift: i32) -> String {
    let text = value.to_string();
    if shift <= 0 || !value.is_finite() {
        return text;
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut digits = format!("{}{}", int_part, frac_part);
    let point = int_part.len() + shift as usize;
    while digits.len() < point {
        digits.push('0');
    }

    let whole = digits[..point].trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    let fraction = digits[point..].trim_end_matches('0');

    if fraction.is_empty() {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(strike: &str, spot: &str, t: &str, sigma: &str, rate: &str) -> FormInputs {
        FormInputs {
            strike: strike.to_string(),
            spot: spot.to_string(),
            years_to_exp: t.to_string(),
            sigma: sigma.to_string(),
            rate: rate.to_string(),
        }
    }

    #[test]
    fn test_percent_inputs() {
        let params = form("50", " 50 ", "0.5", "30", "5")
            .parse(&InputConfig::default())
            .unwrap();
        assert_eq!(params.strike, 50.0);
        assert_eq!(params.spot, 50.0);
        assert!((params.sigma - 0.30).abs() < 1e-15);
        assert!((params.rate - 0.05).abs() < 1e-15);
    }

    #[test]
    fn test_decimal_inputs() {
        let units = InputConfig {
            percent_rates: false,
        };
        let params = form("50", "50", "0.5", "0.3", "0.05").parse(&units).unwrap();
        assert_eq!(params.sigma, 0.3);
        assert_eq!(params.rate, 0.05);
    }

    #[test]
    fn test_error_names_field() {
        let err = form("50", "abc", "0.5", "30", "5")
            .parse(&InputConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("spot"), "{}", err);

        let err = form("50", "50", "", "30", "5")
            .parse(&InputConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("years_to_exp"), "{}", err);
    }

    #[test]
    fn test_zero_maturity_is_accepted() {
        let params = form("50", "50", "0", "30", "5")
            .parse(&InputConfig::default())
            .unwrap();
        assert_eq!(params.years_to_exp, 0.0);
    }

    #[test]
    fn test_writes_back_fields() {
        let units = InputConfig::default();
        let fields = FormInputs::from_parameters(&OptionParameters::default(), &units);
        assert_eq!(fields.strike, "50");
        assert_eq!(fields.years_to_exp, "0.5");
        assert_eq!(fields.sigma, "30");
        assert_eq!(fields.rate, "5");
        assert_eq!(fields.parse(&units).unwrap(), OptionParameters::default());
    }

    #[test]
    fn test_render_shifted_moves_point() {
        assert_eq!(render_shifted(0.014, 2), "1.4");
        assert_eq!(render_shifted(0.3, 2), "30");
        assert_eq!(render_shifted(-0.005, 2), "-0.5");
        assert_eq!(render_shifted(0.0000001, 2), "0.00001");
        assert_eq!(render_shifted(12.5, 2), "1250");
        assert_eq!(render_shifted(0.014, 0), "0.014");
    }

    #[test]
    fn test_shifted_parse_accepts_exponents() {
        assert_eq!(parse_shifted_field("rate", "1.4", 2).unwrap(), 0.014);
        assert_eq!(parse_shifted_field("rate", "1.4E0", 2).unwrap(), 0.014);
        assert_eq!(parse_shifted_field("rate", "+140e-2", 2).unwrap(), 0.014);
        assert!(parse_shifted_field("rate", "inf", 2).unwrap().is_infinite());
        assert!(parse_shifted_field("rate", "1.4%", 2).is_err());
    }

    /// Percent text written back from parameters parses to identical bits.
    #[test]
    fn test_percent_round_trip_is_exact() {
        let units = InputConfig::default();
        for i in 1..1000 {
            let value = i as f64 / 1000.0;
            let params = OptionParameters::new(50.0, 50.0, 0.5, value, value / 10.0);
            let reparsed = FormInputs::from_parameters(&params, &units)
                .parse(&units)
                .unwrap();
            assert_eq!(reparsed.sigma.to_bits(), params.sigma.to_bits(), "sigma {}", value);
            assert_eq!(reparsed.rate.to_bits(), params.rate.to_bits(), "rate {}", value / 10.0);
        }
    }
}
