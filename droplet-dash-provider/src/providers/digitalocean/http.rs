//! `DigitalOcean` HTTP request methods

use reqwest::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ApiErrorBody, DO_API_BASE, DigitalOceanProvider};

impl DigitalOceanProvider {
    // ==================== Helpers ====================

    /// Build an absolute API URL from a path and query pairs.
    pub(crate) fn api_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{DO_API_BASE}{path}"))
            .map_err(|e| self.parse_error(format!("invalid request URL '{path}': {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Turn a non-2xx response into a mapped error.
    pub(crate) fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        if let Ok(body) = serde_json::from_str::<ApiErrorBody>(response_text)
            && (body.id.is_some() || body.message.is_some())
        {
            let message = body
                .message
                .unwrap_or_else(|| format!("HTTP {status}"));
            let raw = match body.id {
                Some(id) => RawApiError::with_code(id, message),
                None => RawApiError::new(message),
            };
            return Err(self.map_error(raw.status(status), ctx));
        }

        // Unstructured body: map on status alone.
        Err(self.map_error(
            RawApiError::new(format!("HTTP {status}: {response_text}")).status(status),
            ctx,
        ))
    }

    // ==================== Requests ====================

    /// Perform a GET request and parse the JSON body.
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
        ctx: ErrorContext,
    ) -> Result<T> {
        let url = self.api_url(path, query)?;
        let request = self.authorized(self.client.get(url.as_str()));

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", url.as_str())
                .await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// Perform a POST request with a JSON body and parse the JSON response.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B, ctx: ErrorContext) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize,
    {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;
        log::debug!("Request Body: {payload}");

        let url = self.api_url(path, &[])?;
        let request = self.authorized(self.client.post(url.as_str())).body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", url.as_str())
                .await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// Perform a DELETE request; success is `204 No Content`.
    pub(crate) async fn delete(&self, path: &str, ctx: ErrorContext) -> Result<()> {
        let url = self.api_url(path, &[])?;
        let request = self.authorized(self.client.delete(url.as_str()));

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "DELETE", url.as_str())
                .await?;

        self.handle_response_error(status, &response_text, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DigitalOceanProvider {
        DigitalOceanProvider::new("token".to_string())
    }

    #[test]
    fn api_url_appends_query() {
        let url = provider()
            .api_url(
                "/droplets",
                &[("page", "2".to_string()), ("per_page", "50".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.digitalocean.com/v2/droplets?page=2&per_page=50"
        );
    }

    #[test]
    fn api_url_without_query() {
        let url = provider().api_url("/droplets/42/actions", &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.digitalocean.com/v2/droplets/42/actions"
        );
    }

    #[test]
    fn success_status_is_not_an_error() {
        let p = provider();
        assert!(p.handle_response_error(200, "{}", ErrorContext::default()).is_ok());
        assert!(p.handle_response_error(204, "", ErrorContext::default()).is_ok());
    }

    #[test]
    fn structured_error_body_uses_id() {
        let p = provider();
        let err = p
            .handle_response_error(
                404,
                r#"{"id":"not_found","message":"The resource you were accessing could not be found."}"#,
                ErrorContext::droplet(42),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::DropletNotFound { ref droplet_id, .. } if droplet_id == "42"
        ));
    }

    #[test]
    fn unstructured_error_body_maps_on_status() {
        let p = provider();
        let err = p
            .handle_response_error(401, "<html>nope</html>", ErrorContext::default())
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn unexpected_status_is_unknown() {
        let p = provider();
        let err = p
            .handle_response_error(
                500,
                r#"{"id":"server_error","message":"Server Error"}"#,
                ErrorContext::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Unknown { raw_code: Some(ref c), .. } if c == "server_error"
        ));
    }
}
