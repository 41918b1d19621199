// Example: plot_prices.rs
// Plots Black-Scholes call and put values against spot for the configured
// strike, maturity, volatility and rate.
//
// Usage:
//     cargo run --example plot_prices -- [config.toml] [output.svg]
//
// The output image defaults to bs_prices.svg in the working directory.

use std::env;
use std::error::Error;

use option_pricer::{price, OptionParameters, PricingConfig};
use plotters::prelude::*;

fn price_curve(base: &OptionParameters, lo: f64, hi: f64, steps: usize) -> Vec<(f64, f64, f64)> {
    (0..=steps)
        .map(|i| {
            let spot = lo + (hi - lo) * i as f64 / steps as f64;
            let result = price(&OptionParameters { spot, ..*base });
            (spot, result.call_price, result.put_price)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => PricingConfig::load(path)?,
        None => PricingConfig::textbook(),
    };
    let output = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "bs_prices.svg".to_string());

    let params = config.initial_parameters();
    let lo = params.strike * 0.5;
    let hi = params.strike * 1.5;
    let curve = price_curve(&params, lo, hi, 200);

    let y_max = curve
        .iter()
        .map(|(_, c, p)| c.max(*p))
        .fold(0.0_f64, f64::max)
        * 1.05;

    let root = SVGBackend::new(&output, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Black-Scholes K={} T={} sigma={:.0}% r={:.1}%",
                params.strike,
                params.years_to_exp,
                params.sigma * 100.0,
                params.rate * 100.0
            ),
            ("sans-serif", 22),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(lo..hi, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Spot")
        .y_desc("Option value")
        .draw()?;

    // Call in blue, put in red
    let call_line: Vec<(f64, f64)> = curve.iter().map(|(s, c, _)| (*s, *c)).collect();
    let put_line: Vec<(f64, f64)> = curve.iter().map(|(s, _, p)| (*s, *p)).collect();
    chart.draw_series(vec![PathElement::new(call_line, BLUE)])?;
    chart.draw_series(vec![PathElement::new(put_line, RED)])?;

    // Strike marker
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(params.strike, 0.0), (params.strike, y_max)],
        BLACK.stroke_width(1),
    )))?;

    root.present()?;
    println!("Wrote {}", output);
    Ok(())
}
