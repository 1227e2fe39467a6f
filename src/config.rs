use clap::Parser;

/// NFL betting recommendation tool based on per-play Expected Points Added
#[derive(Parser, Debug, Clone)]
#[command(name = "epa-bot", version, about)]
pub struct Config {
    /// Season year to analyse; prompts on stdin when omitted
    #[arg(long, env = "SEASON")]
    pub season: Option<u16>,

    /// Season substituted when the requested one is unavailable or empty
    #[arg(long, env = "FALLBACK_SEASON", default_value = "2024")]
    pub fallback_season: u16,

    /// Play-by-play API base URL
    #[arg(
        long,
        env = "PBP_API_URL",
        default_value = "https://api.nflverse.app/v1"
    )]
    pub pbp_api_url: String,

    /// Minimum confidence (|net EPA per play|) for a Spread recommendation
    #[arg(
        long,
        env = "CONFIDENCE_THRESHOLD",
        default_value = "0.05",
        allow_negative_numbers = true
    )]
    pub confidence_threshold: f64,

    /// Number of recommendation rows to print
    #[arg(long, env = "TOP_ROWS", default_value = "10")]
    pub top_rows: usize,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.confidence_threshold < 0.0 {
            anyhow::bail!("confidence_threshold must be non-negative");
        }
        if self.top_rows == 0 {
            anyhow::bail!("top_rows must be at least 1");
        }
        Ok(())
    }
}
