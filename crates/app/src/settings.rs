//! Handles settings for the application. Configuration is read from
//! `settings.toml` (optional) and `EXPENSE_TRACKER__*` environment variables.
//!
//! See `settings.example.toml` for the available keys.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    /// Public URL used in pagination links; defaults to `http://{bind}:{port}`.
    pub base_url: Option<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
            base_url: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Data {
    /// JSON file with the expense groups to serve.
    pub seed: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub data: Data,
}

#[derive(Debug, Parser)]
#[command(name = "expense_tracker", disable_version_flag = true)]
struct Args {
    /// Optional settings file path (TOML, without extension is fine).
    #[arg(long)]
    config: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        let path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("EXPENSE_TRACKER").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
