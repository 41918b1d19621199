use serde::{Deserialize, Serialize};

/// Market inputs for a single European option valuation.
///
/// Volatility and rate are decimals (0.30 = 30%). Nothing is validated:
/// degenerate values are priced as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Strike price K
    pub strike: f64,
    /// Spot price S of the underlying
    pub spot: f64,
    /// Time to maturity T in years
    pub years_to_exp: f64,
    /// Annualized volatility
    pub sigma: f64,
    /// Continuously-compounded risk-free rate
    pub rate: f64,
}

impl OptionParameters {
    pub fn new(strike: f64, spot: f64, years_to_exp: f64, sigma: f64, rate: f64) -> Self {
        Self {
            strike,
            spot,
            years_to_exp,
            sigma,
            rate,
        }
    }

    /// Cost-of-carry `b`. Equal to the rate since there is no dividend yield.
    pub fn carry(&self) -> f64 {
        self.rate
    }
}

impl Default for OptionParameters {
    /// Hull's textbook example: K = S = 50, six months, 30% vol, 5% rate.
    fn default() -> Self {
        Self::new(50.0, 50.0, 0.5, 0.30, 0.05)
    }
}

/// Output of one Black-Scholes evaluation. Always recomputed whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionResult {
    pub d1: f64,
    pub d2: f64,
    /// Fair value of the European call
    pub call_price: f64,
    /// Fair value of the European put
    pub put_price: f64,
}

impl OptionResult {
    pub fn is_finite(&self) -> bool {
        self.d1.is_finite()
            && self.d2.is_finite()
            && self.call_price.is_finite()
            && self.put_price.is_finite()
    }
}
