//! Output formatting module

use frakt_domain::model::ModeConfigSet;
use frakt_types::{OutputFormat, QuoteResult, QuoteResultSet, Result, TransportMode};

pub fn output_quotes(output_format: OutputFormat, results: &QuoteResultSet) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(results)?;
        println!("{}", content);
    } else {
        println!("\nQuote Results");
        println!("=============");
        for (mode, result) in results {
            print_result(*mode, result);
        }
    }

    Ok(())
}

fn print_result(mode: TransportMode, result: &QuoteResult) {
    println!("\n[{}]", mode);
    println!("Status:          {}", result.status);

    if !result.status.is_success() {
        return;
    }

    if let Some(distance) = result.distance_km {
        println!("Distance:        {:.0} km", distance);
    }
    if let Some(total) = result.total_price_eur {
        println!("Total price:     {:.0} EUR", total);
    }
    if let Some(ftl) = result.ftl_price_eur {
        println!("FTL price:       {:.0} EUR", ftl);
    }
    if let Some([min, max]) = result.transit_time_days {
        println!("Transit time:    {}-{} days", min, max);
    }
    if let Some(pickup) = result.earliest_pickup_date {
        println!("Earliest pickup: {}", pickup);
    }
    if let Some(grams) = result.co2_emissions_grams {
        println!("CO2 estimate:    {:.1} kg", grams / 1000.0);
    }
}

pub fn output_modes(output_format: OutputFormat, snapshot: &ModeConfigSet) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(snapshot)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nConfigured Modes");
    println!("================");
    if snapshot.modes.is_empty() {
        println!("(none)");
    }
    for (mode, config) in &snapshot.modes {
        println!("\n[{}]", mode);
        if !config.description.is_empty() {
            println!("Description:     {}", config.description);
        }
        println!(
            "Weight range:    {:.0} - {:.0} kg",
            config.min_allowed_weight_kg, config.max_allowed_weight_kg
        );
        let countries: Vec<&str> =
            config.available_zones.keys().map(String::as_str).collect();
        println!("Countries:       {}", countries.join(", "));
    }

    Ok(())
}

pub fn output_booking(
    mode: TransportMode,
    result: &QuoteResult,
    reference: Option<&str>,
) -> Result<()> {
    println!("\nBooking");
    println!("=======");
    println!("Mode:            {}", mode);
    println!("Status:          {}", result.status);

    if let Some(reference) = reference {
        println!("Reference:       {}", reference);
    }
    if let Some(total) = result.total_price_eur {
        println!("Total price:     {:.0} EUR", total);
    }
    if let Some(pickup) = result.earliest_pickup_date {
        println!("Earliest pickup: {}", pickup);
    }

    Ok(())
}
