//! Configuration management for the Doctext server
//!
//! Read once at startup from the environment (after `.env` has been
//! loaded) and never changed afterwards.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::extract::{
    BatchLimits, CleanOptions, ExtractorOptions, DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_SIZE,
};

/// Slack on top of `max_file_size * max_files` for multipart framing
const REQUEST_OVERHEAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Wall-clock limit for one request, 0 disables
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitsConfig {
    pub max_file_size: u64,
    pub max_files: usize,
    /// HTTP body limit for one upload request
    pub max_request_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    pub empty_text_is_error: bool,
    pub preserve_line_breaks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8001,
                log_level: "info".to_string(),
                request_timeout_secs: 0,
            },
            limits: LimitsConfig {
                max_file_size: DEFAULT_MAX_FILE_SIZE,
                max_files: DEFAULT_MAX_FILES,
                max_request_bytes: default_request_bytes(DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES),
            },
            extraction: ExtractionConfig {
                empty_text_is_error: false,
                preserve_line_breaks: true,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any key/value source
    ///
    /// Missing keys take their defaults; present but malformed values are
    /// an error rather than silently replaced.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let max_file_size: u64 = parse(&lookup, "MAX_FILE_SIZE", defaults.limits.max_file_size)?;
        let max_files: usize = parse(&lookup, "MAX_FILES", defaults.limits.max_files)?;
        if max_file_size == 0 {
            return Err(invalid("MAX_FILE_SIZE", "0", "must be greater than zero"));
        }
        if max_files == 0 {
            return Err(invalid("MAX_FILES", "0", "must be greater than zero"));
        }

        let max_request_bytes = parse(
            &lookup,
            "MAX_REQUEST_BYTES",
            default_request_bytes(max_file_size, max_files),
        )?;

        Ok(Config {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or(defaults.server.host),
                port: parse(&lookup, "PORT", defaults.server.port)?,
                log_level: lookup("LOG_LEVEL")
                    .map(|level| level.to_lowercase())
                    .unwrap_or(defaults.server.log_level),
                request_timeout_secs: parse(
                    &lookup,
                    "REQUEST_TIMEOUT_SECS",
                    defaults.server.request_timeout_secs,
                )?,
            },
            limits: LimitsConfig {
                max_file_size,
                max_files,
                max_request_bytes,
            },
            extraction: ExtractionConfig {
                empty_text_is_error: parse_bool(
                    &lookup,
                    "EMPTY_TEXT_IS_ERROR",
                    defaults.extraction.empty_text_is_error,
                )?,
                preserve_line_breaks: parse_bool(
                    &lookup,
                    "PRESERVE_LINE_BREAKS",
                    defaults.extraction.preserve_line_breaks,
                )?,
            },
        })
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.server.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Tracing filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> String {
        let level = &self.server.log_level;
        format!("doctext_server={level},tower_http={level}")
    }

    pub fn batch_limits(&self) -> BatchLimits {
        BatchLimits {
            max_file_size: self.limits.max_file_size,
            max_files: self.limits.max_files,
        }
    }

    pub fn extractor_options(&self) -> ExtractorOptions {
        ExtractorOptions {
            clean: CleanOptions {
                preserve_line_breaks: self.extraction.preserve_line_breaks,
            },
            empty_text_is_error: self.extraction.empty_text_is_error,
        }
    }

    /// Request body limit as accepted by axum
    pub fn body_limit(&self) -> usize {
        usize::try_from(self.limits.max_request_bytes).unwrap_or(usize::MAX)
    }
}

fn default_request_bytes(max_file_size: u64, max_files: usize) -> u64 {
    max_file_size
        .saturating_mul(max_files as u64)
        .saturating_add(REQUEST_OVERHEAD_BYTES)
}

fn invalid(name: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(name, &raw, e.to_string())),
    }
}

fn parse_bool<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(invalid(name, &raw, "expected true or false")),
        },
    }
}
