//! `DigitalOcean` `DropletProvider` trait implementation

use async_trait::async_trait;
use url::Url;

use crate::error::{ProviderError, Result};
use crate::traits::{DropletProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    DropletAction, DropletPage, FieldType, PaginationParams, ProviderCredentialField,
    ProviderLimits, ProviderMetadata, ProviderType,
};

use super::{
    AccountResponse, ActionRequest, ActionResponse, DO_API_BASE, DigitalOceanProvider,
    DropletsResponse, Links, MAX_PER_PAGE,
};

impl DigitalOceanProvider {
    /// Work out the page to request after `current` from the response links.
    ///
    /// Absent `links`, absent `links.pages` and absent `pages.next` all mean
    /// "last page". A `next` link whose `page` parameter is missing, not a number,
    /// or not past `current` is a parse error.
    pub(crate) fn next_page(&self, links: Option<&Links>, current: u32) -> Result<Option<u32>> {
        let Some(next) = links
            .and_then(|l| l.pages.as_ref())
            .and_then(|p| p.next.as_deref())
        else {
            return Ok(None);
        };

        // `join` accepts both absolute and API-relative links.
        let url = Url::parse(DO_API_BASE)
            .and_then(|base| base.join(next))
            .map_err(|e| self.parse_error(format!("invalid next page link '{next}': {e}")))?;

        let page = url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| self.parse_error(format!("next page link '{next}' has no page")))?;

        let page: u32 = page.parse().map_err(|e| {
            self.parse_error(format!("next page link '{next}' has invalid page '{page}': {e}"))
        })?;

        if page <= current {
            return Err(self.parse_error(format!(
                "next page link '{next}' does not advance past page {current}"
            )));
        }

        Ok(Some(page))
    }
}

#[async_trait]
impl DropletProvider for DigitalOceanProvider {
    fn id(&self) -> &'static str {
        "digitalocean"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::DigitalOcean,
            name: "DigitalOcean".to_string(),
            description: "DigitalOcean droplets via the public API v2".to_string(),
            required_fields: vec![ProviderCredentialField {
                key: "apiToken".to_string(),
                label: "API Token".to_string(),
                field_type: FieldType::Password,
                placeholder: Some("dop_v1_...".to_string()),
                help_text: Some(
                    "Personal access token with read and write scope for droplets".to_string(),
                ),
            }],
            limits: ProviderLimits {
                max_per_page: MAX_PER_PAGE,
            },
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self
            .get::<AccountResponse>("/account", &[], ErrorContext::default())
            .await
        {
            Ok(resp) => Ok(resp.account.status == "active"),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn list_droplets(&self, params: &PaginationParams) -> Result<DropletPage> {
        let params = params.validated(MAX_PER_PAGE);
        let resp: DropletsResponse = self
            .get(
                "/droplets",
                &[
                    ("page", params.page.to_string()),
                    ("per_page", params.per_page.to_string()),
                ],
                ErrorContext::default(),
            )
            .await?;

        let next_page = self.next_page(resp.links.as_ref(), params.page)?;
        log::debug!(
            "[{}] page {} returned {} droplets, next page: {next_page:?}",
            self.provider_name(),
            params.page,
            resp.droplets.len()
        );

        Ok(DropletPage {
            droplets: resp.droplets,
            next_page,
            total: resp.meta.and_then(|m| m.total),
        })
    }

    async fn delete_droplet(&self, droplet_id: u64) -> Result<()> {
        self.delete(
            &format!("/droplets/{droplet_id}"),
            ErrorContext::droplet(droplet_id),
        )
        .await
    }

    async fn droplet_action(&self, droplet_id: u64, action: DropletAction) -> Result<()> {
        let body = ActionRequest {
            action_type: action.as_str(),
        };
        let resp: ActionResponse = self
            .post(
                &format!("/droplets/{droplet_id}/actions"),
                &body,
                ErrorContext::droplet(droplet_id).param("type"),
            )
            .await?;

        log::debug!(
            "[{}] droplet {droplet_id} action {} accepted as #{} ({})",
            self.provider_name(),
            resp.action.action_type,
            resp.action.id,
            resp.action.status
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DigitalOceanProvider {
        DigitalOceanProvider::new("token".to_string())
    }

    fn links(json: &str) -> Option<Links> {
        let resp: DropletsResponse =
            serde_json::from_str(&format!(r#"{{"droplets":[],"links":{json}}}"#)).unwrap();
        resp.links
    }

    #[test]
    fn null_links_is_last_page() {
        let p = provider();
        assert_eq!(p.next_page(links("null").as_ref(), 1).unwrap(), None);
    }

    #[test]
    fn missing_links_is_last_page() {
        let resp: DropletsResponse = serde_json::from_str(r#"{"droplets":[]}"#).unwrap();
        assert_eq!(provider().next_page(resp.links.as_ref(), 1).unwrap(), None);
    }

    #[test]
    fn empty_pages_is_last_page() {
        let p = provider();
        assert_eq!(p.next_page(links("{}").as_ref(), 1).unwrap(), None);
        assert_eq!(p.next_page(links(r#"{"pages":{}}"#).as_ref(), 3).unwrap(), None);
    }

    #[test]
    fn last_page_has_only_prev_links() {
        let l = links(
            r#"{"pages":{"first":"https://api.digitalocean.com/v2/droplets?page=1&per_page=2","prev":"https://api.digitalocean.com/v2/droplets?page=1&per_page=2"}}"#,
        );
        assert_eq!(provider().next_page(l.as_ref(), 2).unwrap(), None);
    }

    #[test]
    fn next_link_yields_page_number() {
        let l = links(
            r#"{"pages":{"next":"https://api.digitalocean.com/v2/droplets?page=2&per_page=1","last":"https://api.digitalocean.com/v2/droplets?page=3&per_page=1"}}"#,
        );
        assert_eq!(provider().next_page(l.as_ref(), 1).unwrap(), Some(2));
    }

    #[test]
    fn relative_next_link_is_accepted() {
        let l = links(r#"{"pages":{"next":"droplets?per_page=1&page=5"}}"#);
        assert_eq!(provider().next_page(l.as_ref(), 4).unwrap(), Some(5));
    }

    #[test]
    fn next_link_without_page_is_parse_error() {
        let l = links(r#"{"pages":{"next":"https://api.digitalocean.com/v2/droplets?per_page=1"}}"#);
        let err = provider().next_page(l.as_ref(), 1).unwrap_err();
        assert!(matches!(err, ProviderError::ParseError { .. }));
    }

    #[test]
    fn non_numeric_page_is_parse_error() {
        let l = links(r#"{"pages":{"next":"https://api.digitalocean.com/v2/droplets?page=two"}}"#);
        let err = provider().next_page(l.as_ref(), 1).unwrap_err();
        assert!(matches!(err, ProviderError::ParseError { .. }));
    }

    #[test]
    fn non_advancing_page_is_parse_error() {
        let l = links(r#"{"pages":{"next":"https://api.digitalocean.com/v2/droplets?page=2"}}"#);
        let err = provider().next_page(l.as_ref(), 2).unwrap_err();
        assert!(
            matches!(err, ProviderError::ParseError { ref detail, .. } if detail.contains("does not advance"))
        );
    }

    #[test]
    fn metadata_describes_token_field() {
        let meta = DigitalOceanProvider::metadata();
        assert_eq!(meta.id, ProviderType::DigitalOcean);
        assert_eq!(meta.limits.max_per_page, 200);
        assert_eq!(meta.required_fields.len(), 1);
        assert_eq!(meta.required_fields[0].key, "apiToken");
        assert_eq!(meta.required_fields[0].field_type, FieldType::Password);
    }

    #[test]
    fn droplets_response_reads_meta_total() {
        let resp: DropletsResponse = serde_json::from_str(
            r#"{"droplets":[{"id":1,"name":"a","status":"active"}],"links":{},"meta":{"total":1}}"#,
        )
        .unwrap();
        assert_eq!(resp.droplets.len(), 1);
        assert_eq!(resp.meta.and_then(|m| m.total), Some(1));
    }

    #[test]
    fn action_body_shape() {
        let body = ActionRequest {
            action_type: DropletAction::EnablePrivateNetworking.as_str(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"type":"enable_private_networking"}"#
        );
    }

    #[test]
    fn debug_masks_token() {
        let p = DigitalOceanProvider::new("dop_v1_abcdefgh".to_string());
        let dbg = format!("{p:?}");
        assert!(!dbg.contains("dop_v1_abcdefgh"));
        assert!(dbg.contains("efgh"));
    }
}
