use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use crate::constants::{DEFAULT_CORS_ORIGINS, DEFAULT_PORT, DEFAULT_RECOMMEND_LIMIT};
use crate::insights::config::EngineConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub cors_origins: Vec<String>,
    pub engine: EngineConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env_or_parse("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: env_or_parse("PORT", DEFAULT_PORT),
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            cors_origins: split_list(&env_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
            engine: EngineConfig {
                predictor: env_or_parse("PREDICTOR_VARIANT", Default::default()),
                profile: env_or_parse("PROFILE_VARIANT", Default::default()),
                recommend_strategy: env_or_parse("RECOMMEND_STRATEGY", Default::default()),
                recommend_limit: env_or_parse("RECOMMEND_LIMIT", DEFAULT_RECOMMEND_LIMIT),
                rng_seed: env_opt_parse("ENGINE_RNG_SEED"),
                catalog_path: env::var("CATALOG_PATH")
                    .ok()
                    .filter(|p| !p.trim().is_empty()),
            },
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    env_opt_parse(key).unwrap_or(default)
}

/// Parses an optional variable; unparsable values are logged and treated as unset.
pub fn env_opt_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(
                key,
                value = %raw,
                "Failed to parse env var, using default"
            );
            None
        }
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse boolean env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
