//! Provider factory

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::providers::DigitalOceanProvider;
use crate::traits::DropletProvider;
use crate::types::ProviderCredentials;

/// Creates a [`DropletProvider`] instance from the given credentials.
///
/// The returned provider is wrapped in `Arc<dyn DropletProvider>` for sharing
/// across async tasks.
///
/// # Errors
///
/// Returns [`ProviderError::InvalidCredentials`] when the token is empty; no
/// client is constructed in that case.
///
/// # Examples
///
/// ```rust,no_run
/// use droplet_dash_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::DigitalOcean {
///     api_token: "your-token".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DropletProvider>> {
    match credentials {
        ProviderCredentials::DigitalOcean { api_token } => {
            let api_token = api_token.trim().to_string();
            if api_token.is_empty() {
                return Err(ProviderError::InvalidCredentials {
                    provider: "digitalocean".to_string(),
                    raw_message: Some("API token is empty".to_string()),
                });
            }
            Ok(Arc::new(DigitalOceanProvider::new(api_token)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        let res = create_provider(ProviderCredentials::DigitalOcean {
            api_token: "   ".to_string(),
        });
        assert!(matches!(
            res,
            Err(ProviderError::InvalidCredentials { .. })
        ));
    }

    #[test]
    fn token_creates_provider() {
        let res = create_provider(ProviderCredentials::DigitalOcean {
            api_token: "dop_v1_token".to_string(),
        });
        assert!(res.is_ok());
        let Ok(provider) = res else {
            return;
        };
        assert_eq!(provider.id(), "digitalocean");
    }
}
