//! # droplet-dash-provider
//!
//! Remote client for the droplets of a `DigitalOcean` account: page-by-page
//! listing, deletion, and droplet actions behind one async trait.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use droplet_dash_provider::{
//!     create_provider, DropletProvider, PaginationParams, ProviderCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::DigitalOcean {
//!         api_token: "your-token".to_string(),
//!     })?;
//!
//!     let mut params = PaginationParams::default();
//!     loop {
//!         let page = provider.list_droplets(&params).await?;
//!         for droplet in &page.droplets {
//!             println!("{} {} {}", droplet.id, droplet.name, droplet.status);
//!         }
//!         match page.next_page {
//!             Some(next) => params = params.with_page(next),
//!             None => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//!
//! - [`ProviderError::InvalidCredentials`]: token missing, malformed or revoked
//! - [`ProviderError::DropletNotFound`]: the droplet no longer exists
//! - [`ProviderError::RateLimited`]: API rate limit exceeded
//! - [`ProviderError::ParseError`]: unreadable body or pagination link
//!
//! Calls are made once. Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DropletProvider;

// Re-export types
pub use types::{
    Droplet, DropletAction, DropletPage, DropletStatus, FieldType, Image, NetworkType, NetworkV4,
    NetworkV6, Networks, PaginationParams, ProviderCredentialField, ProviderCredentials,
    ProviderLimits, ProviderMetadata, ProviderType, Region,
};

// Re-export utils
pub use utils::datetime;
pub use utils::log_sanitizer::{mask_token, truncate_for_log};

// Re-export concrete providers
pub use providers::DigitalOceanProvider;
