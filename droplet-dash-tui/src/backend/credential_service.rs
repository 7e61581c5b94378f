//! Token storage service
//!
//! Keeps the DigitalOcean API token in the system keyring:
//! - Windows: Credential Manager
//! - macOS: Keychain
//! - Linux: Secret Service (GNOME Keyring / KWallet)

use anyhow::{Context, Result};
use keyring::Entry;

use super::AppConfig;

const SERVICE_NAME: &str = "droplet-dash";
const TOKEN_KEY: &str = "digitalocean-api-token";

/// Somewhere an API token can be kept between runs.
pub trait TokenStore {
    fn get(&self) -> Result<Option<String>>;
    fn set(&self, token: &str) -> Result<()>;
}

/// System keyring token store
pub struct KeyringTokenStore;

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> Result<Entry> {
        Entry::new(SERVICE_NAME, TOKEN_KEY).context("failed to open keyring entry")
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for KeyringTokenStore {
    fn get(&self) -> Result<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("failed to read token from keyring"),
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        Self::entry()?
            .set_password(token)
            .context("failed to save token to keyring")
    }
}

/// Pick the API token: environment or config file first, then the keyring.
///
/// Keyring failures are logged and treated as "no token"; the panel then shows
/// the uninitialized-client error instead of refusing to start.
pub fn resolve_token(config: &AppConfig, store: &dyn TokenStore) -> Option<String> {
    if let Some(token) = config.api_key.as_deref().filter(|t| !t.trim().is_empty()) {
        return Some(token.to_string());
    }
    match store.get() {
        Ok(Some(token)) if !token.trim().is_empty() => {
            log::debug!("Using API token from the system keyring");
            Some(token)
        }
        Ok(_) => {
            log::warn!("No API token configured");
            None
        }
        Err(e) => {
            log::warn!("Keyring unavailable: {e:#}");
            None
        }
    }
}
