//! # Lifeval Basic Usage Example
//!
//! Demonstrates the basic usage of the lifeval crate for pricing a
//! whole-life policy and inspecting life-table statistics.

use lifeval::prelude::*;

fn main() -> LifevalResult<()> {
    println!("Lifeval Basic Usage Example");
    println!("===========================");
    println!();

    // Build a mortality table from {age, rate} entries (AT-2000 male pivots);
    // unmapped ages fall back to the default rate
    println!("Building mortality table...");
    let table = MortalityTable::builder()
        .entries(vec![
            MortalityEntry { age: 30, rate: 0.000814 },
            MortalityEntry { age: 35, rate: 0.000923 },
            MortalityEntry { age: 40, rate: 0.001139 },
            MortalityEntry { age: 45, rate: 0.001530 },
            MortalityEntry { age: 50, rate: 0.002187 },
            MortalityEntry { age: 60, rate: 0.004892 },
            MortalityEntry { age: 70, rate: 0.011732 },
        ])
        .radix(100_000) // Default radix - might even not need to be declared
        .build()?;

    println!("✓ Table loaded: {} mapped ages", table.len());
    println!();

    // Insurance and annuity valuations
    println!("=== Valuations (age 35, 6% interest) ===");
    let ax = whole_life_value()
        .mt(&table)
        .x(35)
        .benefit(100_000.0)
        .i(0.06)
        .call();
    let annuity = life_annuity_value()
        .mt(&table)
        .x(65)
        .payment(12_000.0)
        .i(0.06)
        .call();

    println!("Whole life benefit (100,000 capital): {ax:.2}");
    println!("Life annuity from 65 (12,000/yr):     {annuity:.2}");
    println!();

    // Full policy pricing
    println!("=== Policy pricing (20-year payment term) ===");
    let valuation = full_policy_valuation()
        .mt(&table)
        .x(35)
        .face_amount(100_000.0)
        .i(0.06)
        .payment_years(20)
        .call();

    println!("Annual premium:        {:.2}", valuation.annual_premium);
    println!("PV of benefits:        {:.2}", valuation.present_value_of_benefits);
    println!("First-year reserve:    {:.2}", valuation.technical_reserve);
    println!();

    // Life-table statistics as a DataFrame
    println!("=== Life table (ages 35-45) ===");
    let rows = build_life_table().mt(&table).start_age(35).end_age(45).call();
    let df = life_table_df(&rows)?;
    println!("{df}");

    let e35 = life_expectancy().mt(&table).x(35).call();
    println!("Life expectancy at 35: {e35:.2} years");

    Ok(())
}
