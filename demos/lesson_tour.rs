//! Tour of the calculation services
//!
//! Walks through each service the tutorial pages use:
//! - Arithmetic, including the two failing operations
//! - Percentage discounts, promo codes and progressive discounts
//! - Temperature conversion, classification and averaging
//!
//! Run with: cargo run --example lesson_tour
//!
//! To see rejected inputs logged:
//!   RUST_LOG=lesson_services=debug cargo run --example lesson_tour

use lesson_services::{
    apply_promo_code, arithmetic, average_temperature, calculate_discount_details,
    can_apply_promo_code, celsius_to_fahrenheit, celsius_to_kelvin, fahrenheit_to_celsius,
    is_comfortable_temperature, kelvin_to_celsius, progressive_discount, temperature_category,
    PromoCodeConfig, Result,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("Lesson Services Tour");
    println!("====================\n");

    println!("=== Arithmetic ===");
    println!("  7 + 5        = {}", arithmetic::add(7.0, 5.0));
    println!("  7 - 5        = {}", arithmetic::subtract(7.0, 5.0));
    println!("  7 * 5        = {}", arithmetic::multiply(7.0, 5.0));
    println!("  7 / 5        = {}", arithmetic::divide(7.0, 5.0)?);
    println!("  15% of 80    = {}", arithmetic::percentage(80.0, 15.0));
    println!("  2 ^ 8        = {}", arithmetic::power(2.0, 8.0));
    println!("  sqrt(81)     = {}", arithmetic::square_root(81.0)?);
    match arithmetic::divide(1.0, 0.0) {
        Ok(value) => println!("  1 / 0        = {}", value),
        Err(e) => println!("  1 / 0        -> error: {}", e),
    }
    match arithmetic::square_root(-4.0) {
        Ok(value) => println!("  sqrt(-4)     = {}", value),
        Err(e) => println!("  sqrt(-4)     -> error: {}", e),
    }
    println!();

    println!("=== Discounts ===");
    let details = calculate_discount_details(249.99, 20.0);
    println!(
        "  {:.2} at {}% off: save {:.2}, pay {:.2}",
        details.original_price, details.discount_percent, details.discount_amount, details.final_price
    );

    let order = 120.0;
    println!("\n  Promo codes for a {:.2} order:", order);
    for (code, config) in PromoCodeConfig::TABLE {
        let status = if can_apply_promo_code(code, order) {
            format!("applies -> {:.2}", apply_promo_code(order, code))
        } else {
            format!("needs at least {:.2}", config.minimum())
        };
        println!("    {:<9} {:>3}%  {}", code, config.discount, status);
    }

    println!("\n  Progressive discount:");
    for amount in [25.0, 50.0, 150.0, 200.0] {
        println!("    {:>7.2} -> {}%", amount, progressive_discount(amount));
    }
    println!();

    println!("=== Temperature ===");
    for celsius in [-10.0, 0.0, 21.0, 30.0, 37.0] {
        println!(
            "  {:>6.1}°C = {:>7.2}°F = {:>7.2}K  [{}{}]",
            celsius,
            celsius_to_fahrenheit(celsius)?,
            celsius_to_kelvin(celsius)?,
            temperature_category(celsius),
            if is_comfortable_temperature(celsius) {
                ", comfortable"
            } else {
                ""
            }
        );
    }
    println!("  98.6°F = {}°C", fahrenheit_to_celsius(98.6)?);
    println!("  0K     = {}°C", kelvin_to_celsius(0.0)?);
    match celsius_to_fahrenheit(-300.0) {
        Ok(value) => println!("  -300°C = {}°F", value),
        Err(e) => println!("  -300°C -> error: {}", e),
    }

    let week = [18.5, 21.0, 23.5, 19.0, 22.0, 24.5, 20.0];
    println!("  Weekly average: {}°C", average_temperature(&week)?);
    match average_temperature(&[]) {
        Ok(value) => println!("  Empty average: {}", value),
        Err(e) => println!("  Empty average -> error: {}", e),
    }

    Ok(())
}
