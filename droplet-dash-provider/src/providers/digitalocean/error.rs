//! `DigitalOcean` error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::DigitalOceanProvider;

/// `DigitalOcean` error id / status mapping
/// Reference: <https://docs.digitalocean.com/reference/api/api-reference/#section/Introduction/HTTP-Statuses>
impl ProviderErrorMapper for DigitalOceanProvider {
    fn provider_name(&self) -> &'static str {
        "digitalocean"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match (raw.code.as_deref(), raw.status) {
            // 401: missing, malformed or revoked token
            (Some("unauthorized"), _) | (_, Some(401)) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 403: token lacks write scope, or account is locked
            (Some("forbidden"), _) | (_, Some(403)) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 404: droplet already gone
            (Some("not_found"), _) | (_, Some(404)) => ProviderError::DropletNotFound {
                provider: self.provider_name().to_string(),
                droplet_id: context
                    .droplet_id
                    .map_or_else(|| "<unknown>".to_string(), |id| id.to_string()),
                raw_message: Some(raw.message),
            },

            // 429: rate limit (normally caught earlier with Retry-After)
            (Some("too_many_requests"), _) | (_, Some(429)) => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // 400 / 422: e.g. shutdown of a droplet that is already off
            (Some("bad_request" | "unprocessable_entity"), _) | (_, Some(400 | 422)) => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: context.param.unwrap_or("request").to_string(),
                    detail: raw.message,
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DigitalOceanProvider {
        DigitalOceanProvider::new(String::new())
    }

    fn ctx() -> ErrorContext {
        ErrorContext::default()
    }

    #[test]
    fn unauthorized_id() {
        let err = provider().map_error(
            RawApiError::with_code("unauthorized", "Unable to authenticate you"),
            ctx(),
        );
        assert!(matches!(
            err,
            ProviderError::InvalidCredentials { raw_message: Some(ref m), .. } if m == "Unable to authenticate you"
        ));
    }

    #[test]
    fn status_401_without_id() {
        let err = provider().map_error(RawApiError::new("HTTP 401").status(401), ctx());
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn forbidden() {
        let err = provider().map_error(
            RawApiError::with_code("forbidden", "You do not have access").status(403),
            ctx(),
        );
        assert!(matches!(err, ProviderError::PermissionDenied { .. }));
    }

    #[test]
    fn not_found_uses_droplet_context() {
        let err = provider().map_error(
            RawApiError::with_code("not_found", "not found").status(404),
            ErrorContext::droplet(3_164_444),
        );
        assert!(matches!(
            err,
            ProviderError::DropletNotFound { ref droplet_id, .. } if droplet_id == "3164444"
        ));
    }

    #[test]
    fn not_found_without_context() {
        let err = provider().map_error(RawApiError::with_code("not_found", "not found"), ctx());
        assert!(matches!(
            err,
            ProviderError::DropletNotFound { ref droplet_id, .. } if droplet_id == "<unknown>"
        ));
    }

    #[test]
    fn too_many_requests() {
        let err = provider().map_error(
            RawApiError::with_code("too_many_requests", "API Rate limit exceeded."),
            ctx(),
        );
        assert!(matches!(
            err,
            ProviderError::RateLimited {
                retry_after: None,
                ..
            }
        ));
    }

    #[test]
    fn unprocessable_entity_reports_param() {
        let err = provider().map_error(
            RawApiError::with_code("unprocessable_entity", "Droplet is already powered off")
                .status(422),
            ErrorContext::droplet(1).param("type"),
        );
        assert!(matches!(
            err,
            ProviderError::InvalidParameter { ref param, ref detail, .. }
                if param == "type" && detail == "Droplet is already powered off"
        ));
    }

    #[test]
    fn bad_request_defaults_param() {
        let err = provider().map_error(RawApiError::new("bad").status(400), ctx());
        assert!(matches!(
            err,
            ProviderError::InvalidParameter { ref param, .. } if param == "request"
        ));
    }

    #[test]
    fn unmapped_falls_back_to_unknown() {
        let err = provider().map_error(
            RawApiError::with_code("server_error", "Server Error").status(500),
            ctx(),
        );
        assert!(matches!(
            err,
            ProviderError::Unknown { raw_code: Some(ref c), ref raw_message, .. }
                if c == "server_error" && raw_message == "Server Error"
        ));
    }

    #[test]
    fn status_401_is_checked_before_later_ids() {
        let err = provider().map_error(
            RawApiError::with_code("forbidden", "locked").status(401),
            ctx(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }
}
