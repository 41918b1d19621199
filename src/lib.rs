//! # Option-Pricer: Closed-Form European Option Valuation
//!
//! `option-pricer` computes Black-Scholes fair values for European calls and puts
//! with cost-of-carry equal to the risk-free rate (no dividend yield), together
//! with the standardized `d1`/`d2` terms. The normal CDF uses the Zelen & Severo
//! polynomial approximation (absolute error around 1e-7).
//!
//! ## Core Features
//!
//! - **Pricing**: [`price`] returns call, put, `d1` and `d2` in one pass
//! - **Normal distribution**: [`cumulative_normal`] and [`normal_pdf`]
//! - **Observable model**: [`BlsFormula`] recomputes on every input change and
//!   notifies typed listeners
//! - **Configuration**: TOML-driven defaults and form input units via [`PricingConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use option_pricer::{price, OptionParameters};
//!
//! // K = 50, S = 50, six months, 30% vol, 5% rate
//! let params = OptionParameters::new(50.0, 50.0, 0.5, 0.30, 0.05);
//! let result = price(&params);
//!
//! assert!((result.call_price - 4.817).abs() < 1e-3);
//! assert!((result.d1 - result.d2 - 0.30 * 0.5_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! ## Degenerate Inputs
//!
//! Inputs are not validated. `K = 0`, `T = 0` or `sigma = 0` divide by zero and
//! the resulting NaN/Inf values propagate into the result; no error is raised.
//! Callers that need strictly finite output must check `K > 0`, `T > 0` and
//! `sigma > 0` themselves, or test [`OptionResult::is_finite`].

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Pricing functions
pub use models::bs::{bs_call_price, bs_put_price, d1_d2, option_value, price, OptionType};
pub use models::normal::{cumulative_normal, exact_normal_cdf, normal_pdf};

// Core types for parameters and results
pub use pricing::types::{OptionParameters, OptionResult};

// Configuration and input handling
pub use pricing::config::{DefaultsConfig, InputConfig, PricingConfig};
pub use pricing::input::FormInputs;

// Observable model
pub use pricing::observable::{BlsFormula, Field, Listener, ListenerId};

// ================================================================================================
// DEFAULT PARAMETERS
// ================================================================================================

/// Ready-made parameter sets.
pub mod default_params {
    use crate::pricing::types::OptionParameters;

    /// Hull's textbook example: K = 50, S = 50, T = 0.5, sigma = 30%, r = 5%.
    ///
    /// The call is worth about 4.817.
    ///
    /// # Example
    ///
    /// ```rust
    /// use option_pricer::{default_params, price};
    ///
    /// let result = price(&default_params::textbook());
    /// assert!((result.call_price - 4.817).abs() < 1e-3);
    /// ```
    pub fn textbook() -> OptionParameters {
        OptionParameters::default()
    }

    /// Strike equal to spot.
    pub fn at_the_money(spot: f64, years_to_exp: f64, sigma: f64, rate: f64) -> OptionParameters {
        OptionParameters::new(spot, spot, years_to_exp, sigma, rate)
    }
}
