//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the TutorMatch
//! API server. It retrieves configuration values from environment variables
//! and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: SQLite connection string (default: "sqlite://tutormatch.db")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `AVAILABILITY_MAX_SLOTS`: Slot capacity per profile (default: 20)
//! - `AVAILABILITY_SLOT_MINUTES`: Slot time granularity (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;
use tutormatch_core::schedule::SlotPolicy;

/// Configuration for the TutorMatch API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// SQLite database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Maximum number of availability slots per profile
    pub max_slots: usize,

    /// Required time alignment of slot boundaries, in minutes
    pub slot_granularity_minutes: u16,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables, providing
    /// defaults where possible.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The AVAILABILITY_MAX_SLOTS or AVAILABILITY_SLOT_MINUTES values
    ///   cannot be parsed as integers
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings; the store is a local file, so a missing
        // DATABASE_URL falls back to one next to the binary.
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://tutormatch.db".to_string());

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Schedule limits
        let max_slots = env::var("AVAILABILITY_MAX_SLOTS")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .wrap_err("Invalid AVAILABILITY_MAX_SLOTS value")?;
        let slot_granularity_minutes = env::var("AVAILABILITY_SLOT_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .wrap_err("Invalid AVAILABILITY_SLOT_MINUTES value")?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            max_slots,
            slot_granularity_minutes,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The slot limits handed to every schedule built by the handlers.
    pub fn slot_policy(&self) -> SlotPolicy {
        SlotPolicy {
            max_slots: self.max_slots,
            granularity_minutes: self.slot_granularity_minutes,
        }
    }
}
