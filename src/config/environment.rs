// Start of file: /src/config/environment.rs

// * Environment configuration loaded once at startup and handed to AppState.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::routing::MatchOptions;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PROTOCOL: &str = "http";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub protocol: Cow<'static, str>,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub router_strict: bool,
    pub router_case_sensitive: bool,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            protocol: Cow::Borrowed(DEFAULT_PROTOCOL),
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
            router_strict: false,
            router_case_sensitive: false,
        }
    }
}

impl EnvironmentVariables {
    // * Reads the process environment.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        let config: EnvironmentVariables = Self::from_map(&vars)?;

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", config);
        }

        Ok(config)
    }

    // * Builds the configuration from an explicit variable map, providing defaults if missing
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        // * A small helper closure to fetch a variable by key
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            protocol: get_var("PROTOCOL")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_PROTOCOL)),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            router_strict: get_var("ROUTER_STRICT")
                .map(|s| parse_flag("ROUTER_STRICT", s))
                .transpose()?
                .unwrap_or(false),

            router_case_sensitive: get_var("ROUTER_CASE_SENSITIVE")
                .map(|s| parse_flag("ROUTER_CASE_SENSITIVE", s))
                .transpose()?
                .unwrap_or(false),
        })
    }

    // * Route table matching options derived from the ROUTER_* flags
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            strict: self.router_strict,
            case_sensitive: self.router_case_sensitive,
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("Invalid {key} value '{other}', expected true or false"),
    }
}


// End of file: /src/config/environment.rs
