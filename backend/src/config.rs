//! Server configuration.
//!
//! Values come from an optional TOML file (path in `VAMOS_CONFIG`, default
//! `vamos.toml`) and are then overridden by `VAMOS_*` environment variables.
//! A missing file is not an error: defaults apply.
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//! database_path = "vamos.sqlite"
//! seed_file = "sources.json"
//! rng_seed = 42
//! ```

use crate::errors::{MixError, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;

const CONFIG_ENV: &str = "VAMOS_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "vamos.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// JSON array of sources inserted at startup when their link is new.
    pub seed_file: Option<PathBuf>,
    /// Fixed seed for the mix generator; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("vamos.sqlite"),
            seed_file: None,
            rng_seed: None,
        }
    }
}

impl ServerConfig {
    /// Reads the config file named by `VAMOS_CONFIG` and applies environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => Some(c),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(MixError::Config(format!("read {path}: {e}"))),
        };

        Self::from_parts(content.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds a config from file contents (if any) and an environment lookup.
    pub fn from_parts<F>(file: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg: ServerConfig = match file {
            Some(content) => {
                toml::from_str(content).map_err(|e| MixError::Config(e.to_string()))?
            }
            None => ServerConfig::default(),
        };

        if let Some(host) = env("VAMOS_HOST") {
            cfg.host = host;
        }
        if let Some(port) = env("VAMOS_PORT") {
            cfg.port = port
                .parse()
                .map_err(|_| MixError::Config(format!("VAMOS_PORT is not a port: {port}")))?;
        }
        if let Some(db) = env("VAMOS_DB") {
            cfg.database_path = PathBuf::from(db);
        }
        if let Some(seed_file) = env("VAMOS_SEED_FILE") {
            cfg.seed_file = Some(PathBuf::from(seed_file));
        }
        if let Some(seed) = env("VAMOS_RNG_SEED") {
            cfg.rng_seed = Some(
                seed.parse()
                    .map_err(|_| MixError::Config(format!("VAMOS_RNG_SEED is not a u64: {seed}")))?,
            );
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_file_and_env_yield_defaults() {
        let cfg = ServerConfig::from_parts(None, env_of(&[])).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn file_values_are_read_and_partial_files_keep_defaults() {
        let cfg = ServerConfig::from_parts(
            Some("port = 9000\nrng_seed = 3\n"),
            env_of(&[]),
        )
        .unwrap();

        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.rng_seed, Some(3));
        assert_eq!(cfg.host, "127.0.0.1");
    }

    #[test]
    fn env_overrides_file() {
        let cfg = ServerConfig::from_parts(
            Some("host = \"10.0.0.1\"\ndatabase_path = \"file.sqlite\"\n"),
            env_of(&[("VAMOS_HOST", "0.0.0.0"), ("VAMOS_DB", "env.sqlite")]),
        )
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.database_path, PathBuf::from("env.sqlite"));
    }

    #[test]
    fn bad_port_is_a_config_error() {
        let err = ServerConfig::from_parts(None, env_of(&[("VAMOS_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, MixError::Config(_)));
    }
}
