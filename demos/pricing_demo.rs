// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and the observable formula
//!
//! This example shows how to:
//! 1. Load initial parameters from an optional TOML config
//! 2. Price a European call and put
//! 3. Parse form-style text inputs
//! 4. Drive the observable model and react to changes
//!
//! Usage:
//!     cargo run --example pricing_demo -- [config.toml]

use std::env;

use anyhow::Result;
use option_pricer::{price, BlsFormula, FormInputs, PricingConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let config = match env::args().nth(1) {
        Some(path) => PricingConfig::load(&path)?,
        None => PricingConfig::textbook(),
    };

    println!("\nStep 1: Pricing the configured parameters...");
    let params = config.initial_parameters();
    let result = price(&params);

    println!("  Strike K:        {:.4}", params.strike);
    println!("  Spot S:          {:.4}", params.spot);
    println!("  Maturity T:      {:.4} years", params.years_to_exp);
    println!("  Volatility:      {:.2}%", params.sigma * 100.0);
    println!("  Rate:            {:.2}%", params.rate * 100.0);
    println!("  d1 = {:.6}  d2 = {:.6}", result.d1, result.d2);
    println!("  Call price:      {:.4}", result.call_price);
    println!("  Put price:       {:.4}", result.put_price);

    println!("\nStep 2: Parsing form inputs...");
    let fields = FormInputs {
        strike: "42".to_string(),
        spot: "40".to_string(),
        years_to_exp: "0.5".to_string(),
        sigma: "20".to_string(),
        rate: "10".to_string(),
    };
    let parsed = fields.parse(&config.input)?;
    println!("  Parsed: {:?}", parsed);

    println!("\nStep 3: Observable formula...");
    let mut formula = BlsFormula::new(params);
    formula.subscribe(|field, params, result| {
        println!(
            "  {} changed -> S={:.2} call={:.4} put={:.4}",
            field, params.spot, result.call_price, result.put_price
        );
    });

    for spot in [40.0, 45.0, 50.0, 55.0, 60.0] {
        formula.set_spot(spot);
    }
    let changed = formula.replace(parsed);
    println!("  Form replaced fields: {:?}", changed);

    println!("\n{:<8} {:<12} {:<12}", "Spot", "Call", "Put");
    println!("{}", "-".repeat(32));
    for spot in (30..=70).step_by(5) {
        let mut p = params;
        p.spot = spot as f64;
        let r = price(&p);
        println!("{:<8} {:<12.4} {:<12.4}", spot, r.call_price, r.put_price);
    }

    Ok(())
}
