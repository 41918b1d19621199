//! Standard normal distribution helpers (mean 0, standard deviation 1).

/// 1 / sqrt(2π)
const RSQRT2PI: f64 = 0.398_942_280_401_432_7;

/// Zelen & Severo polynomial coefficients.
const A: [f64; 5] = [
    0.31938153,
    -0.356563782,
    1.781477937,
    -1.821255978,
    1.330274429,
];

const P: f64 = 0.2316419;

/// Normal probability density function.
pub fn normal_pdf(x: f64) -> f64 {
    RSQRT2PI * (-0.5 * x * x).exp()
}

/// Cumulative normal distribution, Zelen & Severo approximation.
///
/// Absolute error is around 1e-7 for finite `x`. The upper tail is mirrored
/// from the lower one, so `cumulative_normal(x) + cumulative_normal(-x)` is
/// exactly 1 for any `x != 0`.
///
/// ```rust
/// use option_pricer::cumulative_normal;
///
/// assert!((cumulative_normal(0.0) - 0.5).abs() < 1e-6);
/// assert!(cumulative_normal(1.96) > 0.975 - 1e-6);
/// ```
pub fn cumulative_normal(x: f64) -> f64 {
    let k = 1.0 / (1.0 + P * x.abs());
    let c = normal_pdf(x) * k * (A[0] + k * (A[1] + k * (A[2] + k * (A[3] + k * A[4]))));
    if x > 0.0 {
        1.0 - c
    } else {
        c
    }
}

/// Erf-based normal CDF, used as an accuracy reference.
pub fn exact_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}
