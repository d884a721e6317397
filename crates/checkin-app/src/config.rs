//! Config file discovery and parsing.
//!
//! The file is either a JSON array of account objects or an object with an
//! `accounts` key holding such an array. Every error here is fatal to the
//! whole run and happens before any HTTP call is made.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use checkin_domain::{AccountConfig, DomainError};

pub const CONFIG_FILE_ENV: &str = "VELOERA_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config must be a JSON array of accounts or an object with an \"accounts\" array")]
    WrongShape,

    #[error("Account #{index} does not match the expected schema: {source}")]
    AccountSchema {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Account #{index} is invalid: {source}")]
    InvalidAccount {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("No accounts configured")]
    NoAccounts,
}

/// Path of the config file, from `VELOERA_CONFIG_FILE` or the default.
pub fn config_path() -> PathBuf {
    env::var(CONFIG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load and validate the account list. Account indices in errors are 1-based.
pub fn load_accounts(path: &Path) -> Result<Vec<AccountConfig>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&text)?;

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("accounts") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ConfigError::WrongShape),
        },
        _ => return Err(ConfigError::WrongShape),
    };

    if entries.is_empty() {
        return Err(ConfigError::NoAccounts);
    }

    let mut accounts = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        let account: AccountConfig = serde_json::from_value(entry)
            .map_err(|source| ConfigError::AccountSchema {
                index: idx + 1,
                source,
            })?;
        account
            .validate()
            .map_err(|source| ConfigError::InvalidAccount {
                index: idx + 1,
                source,
            })?;
        accounts.push(account);
    }

    Ok(accounts)
}
