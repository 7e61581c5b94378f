use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{DropletAction, DropletPage, PaginationParams, ProviderMetadata};

/// Raw API error (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error id (e.g. `not_found`), if the body carried one.
    pub code: Option<String>,
    /// HTTP status of the failed response.
    pub status: Option<u16>,
    /// Original error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            status: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            status: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Extra information used while mapping errors (internal use)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Droplet the request targeted (for `DropletNotFound`).
    pub droplet_id: Option<u64>,
    /// Request parameter most likely at fault (for `InvalidParameter`).
    pub param: Option<&'static str>,
}

impl ErrorContext {
    pub fn droplet(droplet_id: u64) -> Self {
        Self {
            droplet_id: Some(droplet_id),
            param: None,
        }
    }

    #[must_use]
    pub fn param(mut self, param: &'static str) -> Self {
        self.param = Some(param);
        self
    }
}

/// Provider error mapping trait (internal use)
///
/// Each provider implements this to map raw API errors onto [`ProviderError`].
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: parse error.
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote droplet API.
///
/// Every call is a single attempt; failures are returned to the caller as-is.
/// `delete_droplet` and `droplet_action` only report whether the request was
/// accepted, not whether the remote operation has completed.
#[async_trait]
pub trait DropletProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Provider metadata (type level).
    ///
    /// Can be called before a provider instance exists.
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// Check whether the credentials are accepted by the API.
    async fn validate_credentials(&self) -> Result<bool>;

    /// Fetch one page of the account's droplets.
    ///
    /// The returned [`DropletPage::next_page`] is `None` on the last page.
    async fn list_droplets(&self, params: &PaginationParams) -> Result<DropletPage>;

    /// Request deletion of a droplet.
    async fn delete_droplet(&self, droplet_id: u64) -> Result<()>;

    /// Request a power or networking action on a droplet.
    async fn droplet_action(&self, droplet_id: u64, action: DropletAction) -> Result<()>;
}
