// Closed-form Black-Scholes for European options with cost-of-carry b = r
// (no dividend yield). Nothing here guards against degenerate inputs: K = 0,
// T = 0 or sigma = 0 flow through as IEEE NaN/Inf in d1/d2 and the prices.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

use crate::models::normal::cumulative_normal;
use crate::pricing::types::{OptionParameters, OptionResult};

/// Exercise right of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Sign `a` applied to the spot/strike terms and the CDF arguments.
    pub fn sign(self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

/// Accepts `call`/`put` and the one-letter forms `c`/`p`, any case.
impl FromStr for OptionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(anyhow!("Invalid option type: {}", other)),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

/// Standardized terms `(d1, d2)`.
pub fn d1_d2(params: &OptionParameters) -> (f64, f64) {
    let b = params.carry();
    let sigma = params.sigma;
    let sqrt_t = params.years_to_exp.sqrt();

    let d1 = ((params.spot / params.strike).ln()
        + (b + sigma * sigma / 2.0) * params.years_to_exp)
        / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;
    (d1, d2)
}

/// European option value at t = 0 given precomputed `d1`/`d2`.
///
/// `a*S*exp((b-r)T)*N(a*d1) - a*K*exp(-rT)*N(a*d2)`, with `a` taken from
/// [`OptionType::sign`].
pub fn option_value(option_type: OptionType, params: &OptionParameters, d1: f64, d2: f64) -> f64 {
    let a = option_type.sign();
    let t = params.years_to_exp;
    let exp_brt = ((params.carry() - params.rate) * t).exp();
    let exp_rt = (-params.rate * t).exp();

    a * params.spot * exp_brt * cumulative_normal(a * d1)
        - a * params.strike * exp_rt * cumulative_normal(a * d2)
}

/// Price both the call and the put, keeping the intermediate terms.
///
/// Pure: no logging, no validation. Check [`OptionResult::is_finite`] when
/// degenerate inputs are possible.
pub fn price(params: &OptionParameters) -> OptionResult {
    let (d1, d2) = d1_d2(params);
    OptionResult {
        d1,
        d2,
        call_price: option_value(OptionType::Call, params, d1, d2),
        put_price: option_value(OptionType::Put, params, d1, d2),
    }
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    price(&OptionParameters::new(K, S, T, sigma, r)).call_price
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    price(&OptionParameters::new(K, S, T, sigma, r)).put_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_convention() {
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
    }

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" put ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("C".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
        assert_eq!(OptionType::Put.to_string(), "put");
    }

    #[test]
    fn test_positional_wrappers_match_price() {
        let params = OptionParameters::default();
        let result = price(&params);
        assert_eq!(bs_call_price(50.0, 50.0, 0.05, 0.5, 0.30), result.call_price);
        assert_eq!(bs_put_price(50.0, 50.0, 0.05, 0.5, 0.30), result.put_price);
    }

    #[test]
    fn test_d2_offset() {
        let params = OptionParameters::new(40.0, 42.0, 0.5, 0.2, 0.1);
        let (d1, d2) = d1_d2(&params);
        assert!((d1 - d2 - 0.2 * 0.5_f64.sqrt()).abs() < 1e-12);
    }
}
