//! # Configuration
//!
//! Where the contacts backend lives and how deep the store mailboxes are.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `CONTACTS_API_URL` | Base URL of the contacts backend (`http` or `https`) | required |
//! | `PHONEBOOK_STORE_BUFFER` | Mailbox capacity of each store actor | `32` |
//!
//! The binary loads a `.env` file before calling [`PhonebookConfig::from_env`].

use thiserror::Error;
use url::Url;

pub const BASE_URL_ENV: &str = "CONTACTS_API_URL";
pub const STORE_BUFFER_ENV: &str = "PHONEBOOK_STORE_BUFFER";
pub const DEFAULT_STORE_BUFFER: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    #[error("Invalid store buffer {0:?}: expected a positive integer")]
    InvalidBuffer(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookConfig {
    pub api_base_url: Url,
    pub store_buffer: usize,
}

impl PhonebookConfig {
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let api_base_url = Url::parse(api_base_url)?;
        match api_base_url.scheme() {
            "http" | "https" => Ok(Self {
                api_base_url,
                store_buffer: DEFAULT_STORE_BUFFER,
            }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Reads `CONTACTS_API_URL` and the optional `PHONEBOOK_STORE_BUFFER`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Keeps the given base URL and applies `PHONEBOOK_STORE_BUFFER` if it is set.
    pub fn with_buffer_from_env(self) -> Result<Self, ConfigError> {
        self.buffer_from_vars(|key| std::env::var(key).ok())
    }

    /// Mailbox capacity of each store. Zero is rejected.
    pub fn with_store_buffer(mut self, store_buffer: usize) -> Result<Self, ConfigError> {
        if store_buffer == 0 {
            return Err(ConfigError::InvalidBuffer(store_buffer.to_string()));
        }
        self.store_buffer = store_buffer;
        Ok(self)
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = var(BASE_URL_ENV).ok_or(ConfigError::Missing(BASE_URL_ENV))?;
        Self::new(&base_url)?.buffer_from_vars(var)
    }

    fn buffer_from_vars(self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match var(STORE_BUFFER_ENV) {
            Some(raw) => {
                let store_buffer = raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidBuffer(raw.clone()))?;
                self.with_store_buffer(store_buffer)
            }
            None => Ok(self),
        }
    }
}
