use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use securepass::cli::{self, Args};
use securepass::core::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    // Logger first so configuration warnings are not dropped.
    // Logs go to stderr so stdout carries only passwords and JSON
    env_logger::Builder::new()
        .filter_level(Config::log_level_from_env())
        .format_timestamp_secs()
        .format_target(true)
        .target(env_logger::Target::Stderr)
        .parse_default_env()
        .init();

    let config = Config::load();
    log::debug!("Loaded config: {:?}", config);

    match cli::run(args, &config).await {
        Ok(code) => code,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
