use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::info;

mod config;
mod epa;
mod models;
mod pbp;
mod report;

use config::Config;
use epa::{aggregate_net_epa, calculate_epa, generate_recommendations};
use pbp::{fetch_with_fallback, NflversePbp};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let season = match config.season {
        Some(year) => year,
        None => prompt_for_season(config.fallback_season)?,
    };
    info!("Analysing the {} season", season);

    let provider = NflversePbp::new(Some(&config.pbp_api_url))?;
    let plays = fetch_with_fallback(&provider, season, config.fallback_season).await?;
    info!("Fetched {} play records", plays.len());

    let scored = calculate_epa(plays);
    let net_epa = aggregate_net_epa(&scored);
    let recommendations = generate_recommendations(net_epa, config.confidence_threshold);

    println!("\nBetting Recommendations (Net EPA):");
    println!(
        "{}",
        report::render_recommendations(&recommendations, config.top_rows)
    );

    Ok(())
}

/// Read a season year from stdin. Non-numeric input selects the fallback
/// season.
fn prompt_for_season(fallback_season: u16) -> Result<u16> {
    print!("Enter season year (e.g., 2025): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_season(&line, fallback_season))
}

fn parse_season(input: &str, fallback_season: u16) -> u16 {
    input.trim().parse().unwrap_or(fallback_season)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_season_valid() {
        assert_eq!(parse_season("2025\n", 2024), 2025);
        assert_eq!(parse_season("  2019  ", 2024), 2019);
    }

    #[test]
    fn test_parse_season_invalid_uses_fallback() {
        assert_eq!(parse_season("next year", 2024), 2024);
        assert_eq!(parse_season("", 2024), 2024);
        assert_eq!(parse_season("20.25", 2024), 2024);
    }
}
