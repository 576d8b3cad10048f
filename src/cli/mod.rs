use crate::game::consts::TERMINAL_EFFECTS_DELAY;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(about = "Daily city-guessing game server")]
pub struct Args {
    #[arg(long, env = "KOTLA_LISTEN_ADDRESS")]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// NDJSON file with one `{"name", "latitude", "longitude"}` city per line.
    #[arg(long, env = "KOTLA_CITIES")]
    #[arg(default_value = "cities.ndjson")]
    pub cities: PathBuf,
    #[arg(long, env = "KOTLA_DATA_DIR")]
    #[arg(default_value = "data")]
    pub data_dir: PathBuf,
    /// Keep records in memory instead of `data_dir`.
    #[arg(long)]
    pub in_memory: bool,
    /// Remote number-of-the-day endpoint. Seeds are derived locally from
    /// `seed_secret` when absent.
    #[arg(long, env = "KOTLA_SEED_URL")]
    pub seed_url: Option<Url>,
    #[arg(long, env = "KOTLA_SEED_SECRET")]
    pub seed_secret: String,
    #[arg(long, env = "KOTLA_COMPASS_POINTS")]
    #[arg(default_value_t = 8, value_parser = parse_compass_points)]
    pub compass_points: u8,
    #[arg(long, env = "KOTLA_TERMINAL_EFFECTS_DELAY_MS")]
    #[arg(default_value_t = TERMINAL_EFFECTS_DELAY.as_millis() as u64)]
    pub terminal_effects_delay_ms: u64,
    #[arg(long, env = "KOTLA_ALLOWED_ORIGINS", value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
}

fn parse_compass_points(raw: &str) -> Result<u8, String> {
    match raw.parse::<u8>() {
        Ok(points @ (8 | 16)) => Ok(points),
        _ => Err(format!("expected 8 or 16, got `{raw}`")),
    }
}
