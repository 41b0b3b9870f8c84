use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "vacancyhub", about = "Vacancy search, normalization and export portal")]
pub struct Config {
    /// Base URL of the HeadHunter-compatible vacancy API
    #[arg(long, env = "HH_BASE_URL", default_value = "https://api.hh.ru")]
    pub api_base_url: String,

    /// Vacancies requested per API page
    #[arg(long, env = "HH_PER_PAGE", default_value = "100")]
    pub per_page: u32,

    /// Directory for exported vacancy files
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the web server (default when no subcommand given)
    Serve {
        /// Listen address
        #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
        listen_addr: String,
    },
    /// Run one fetch-normalize-export pass and exit
    Fetch {
        /// Search keyword passed to the vacancy API
        #[arg(long)]
        keyword: String,

        /// Number of result pages to request
        #[arg(long, default_value = "1")]
        pages: u32,

        /// Export format: json, csv or xlsx
        #[arg(long, default_value = "json")]
        format: String,
    },
}

impl Config {
    /// Resolve the command, defaulting to Serve if none specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}
