//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use droplet_dash_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No provider client exists (e.g. the API token was missing at startup).
    #[error("client could not be initialized")]
    ClientUninitialized,

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (bad token, droplet gone, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ClientUninitialized => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_message() {
        assert_eq!(
            CoreError::ClientUninitialized.to_string(),
            "client could not be initialized"
        );
    }

    #[test]
    fn provider_error_is_transparent() {
        let e = CoreError::from(ProviderError::Timeout {
            provider: "digitalocean".into(),
            detail: "30s".into(),
        });
        assert_eq!(e.to_string(), "[digitalocean] Request timeout: 30s");
        assert!(!e.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_string(&CoreError::ClientUninitialized).unwrap();
        assert_eq!(json, r#"{"code":"ClientUninitialized"}"#);
    }
}
