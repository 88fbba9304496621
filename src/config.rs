use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_JSON_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub json_limit: usize,
    /// Serve Swagger UI and the OpenAPI document next to the mock routes.
    pub swagger_ui: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            json_limit: DEFAULT_JSON_LIMIT,
            swagger_ui: false,
        }
    }
}

impl Settings {
    /// Reads `BIND_HOST`, `PORT`, `JSON_LIMIT` and `SWAGGER_UI`; unset keys keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(host) = lookup("BIND_HOST").filter(|h| !h.trim().is_empty()) {
            settings.host = host.trim().to_string();
        }
        if let Some(raw) = lookup("PORT") {
            settings.port = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                expected: "a port number",
                value: raw,
            })?;
        }
        if let Some(raw) = lookup("JSON_LIMIT") {
            settings.json_limit = match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "JSON_LIMIT",
                        expected: "a positive byte count",
                        value: raw,
                    });
                }
            };
        }
        if let Some(raw) = lookup("SWAGGER_UI") {
            settings.swagger_ui = parse_flag(&raw).ok_or(ConfigError::Invalid {
                key: "SWAGGER_UI",
                expected: "a boolean",
                value: raw.clone(),
            })?;
        }

        Ok(settings)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
