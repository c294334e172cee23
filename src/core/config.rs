// src/core/config.rs
use std::env;
use log::LevelFilter;

use crate::generators::charset::DEFAULT_SYMBOLS;
use crate::models::PasswordPolicy;

// Runtime configuration for the generator CLI
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_symbols: String,
    pub min_recommended_length: usize,
    pub max_password_length: usize,

    // Digests
    pub generate_hashes: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_symbols: DEFAULT_SYMBOLS.to_string(),
            min_recommended_length: 12,
            max_password_length: 128,

            // Digests
            generate_hashes: true,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Log level alone, so the logger can be up before the rest of the config is read
    pub fn log_level_from_env() -> LevelFilter {
        env::var("LOG_LEVEL")
            .ok()
            .and_then(|level| parse_log_level(&level))
            .unwrap_or(Config::default().log_level)
    }

    // Build configuration from an arbitrary key lookup (environment, test map, ...)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if length > 0 => config.default_password_length = length,
                _ => log::warn!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val),
            }
        }

        if let Some(symbols) = lookup("DEFAULT_SYMBOLS") {
            if symbols.is_empty() {
                log::warn!("Ignoring empty DEFAULT_SYMBOLS");
            } else {
                config.default_symbols = symbols;
            }
        }

        if let Some(val) = lookup("MIN_RECOMMENDED_LENGTH") {
            match val.parse() {
                Ok(length) => config.min_recommended_length = length,
                Err(_) => log::warn!("Ignoring invalid MIN_RECOMMENDED_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if length > 0 => config.max_password_length = length,
                _ => log::warn!("Ignoring invalid MAX_PASSWORD_LENGTH '{}'", val),
            }
        }

        // Digests
        if let Some(val) = lookup("GENERATE_HASHES") {
            match val.parse() {
                Ok(enabled) => config.generate_hashes = enabled,
                Err(_) => log::warn!("Ignoring invalid GENERATE_HASHES '{}'", val),
            }
        }

        if config.default_password_length > config.max_password_length {
            log::warn!(
                "DEFAULT_PASSWORD_LENGTH {} exceeds MAX_PASSWORD_LENGTH {}, using {}",
                config.default_password_length,
                config.max_password_length,
                config.max_password_length
            );
            config.default_password_length = config.max_password_length;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(filter) => config.log_level = filter,
                None => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        config
    }

    // Starting policy when no preset or flags are given
    pub fn default_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            length: self.default_password_length,
            custom_symbols: Some(self.default_symbols.clone()),
            ..PasswordPolicy::default()
        }
    }
}

fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
