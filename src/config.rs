use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub premium_file: PathBuf,
    pub log_premium_ops: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let premium_file = env::var("PREMIUM_FILE")
            .unwrap_or_else(|_| "./data/premium_users.txt".to_string())
            .into();

        let log_premium_ops = env::var("LOG_PREMIUM_OPS")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .map_err(|_| "Invalid LOG_PREMIUM_OPS")?;

        Ok(Config {
            premium_file,
            log_premium_ops,
        })
    }
}
