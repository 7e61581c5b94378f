//! Paginated droplet listing

use thiserror::Error;

use droplet_dash_provider::{Droplet, DropletProvider, PaginationParams, ProviderError};

use crate::error::{CoreError, CoreResult};

/// Page size used when the configuration does not set one.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// A listing that stopped part-way.
///
/// `partial` holds every droplet received before the failure, in order.
#[derive(Debug, Error)]
#[error("droplet listing failed after {} droplets: {source}", partial.len())]
pub struct FetchError {
    pub partial: Vec<Droplet>,
    pub source: ProviderError,
}

impl From<FetchError> for CoreError {
    /// The partial pages are dropped; a failed listing is never shown.
    fn from(e: FetchError) -> Self {
        Self::Provider(e.source)
    }
}

/// Fetch every droplet of the account, page after page.
///
/// Stops at the first page without a next-page marker. Any failing page ends the
/// walk with a [`FetchError`]; a next-page marker that does not move forward is
/// treated as a parse error so the loop always terminates.
pub async fn fetch_all(
    provider: &dyn DropletProvider,
    per_page: u32,
) -> Result<Vec<Droplet>, FetchError> {
    let (droplets, pages) = fetch_pages(provider, per_page).await?;
    log::debug!(
        "[{}] fetched {} droplets in {pages} page(s)",
        provider.id(),
        droplets.len()
    );
    Ok(droplets)
}

/// [`fetch_all`] as a refresh needs it: no client is
/// [`CoreError::ClientUninitialized`], and the partial list of a failed walk is
/// logged and dropped.
pub async fn fetch_for_refresh(
    provider: Option<&dyn DropletProvider>,
    per_page: u32,
) -> CoreResult<Vec<Droplet>> {
    let provider = provider.ok_or(CoreError::ClientUninitialized)?;
    fetch_all(provider, per_page).await.map_err(|e| {
        log::warn!(
            "Droplet refresh failed, discarding {} partial droplets: {}",
            e.partial.len(),
            e.source
        );
        CoreError::from(e)
    })
}

/// Walk the listing; returns the droplets and the number of pages requested.
async fn fetch_pages(
    provider: &dyn DropletProvider,
    per_page: u32,
) -> Result<(Vec<Droplet>, u32), FetchError> {
    let mut droplets = Vec::new();
    let mut pages = 0;
    let mut params = PaginationParams {
        page: 1,
        per_page,
    };

    loop {
        let page = match provider.list_droplets(&params).await {
            Ok(page) => page,
            Err(source) => {
                return Err(FetchError {
                    partial: droplets,
                    source,
                });
            }
        };
        pages += 1;
        droplets.extend(page.droplets);

        match page.next_page {
            None => return Ok((droplets, pages)),
            Some(next) if next > params.page => params = params.with_page(next),
            Some(next) => {
                let source = ProviderError::ParseError {
                    provider: provider.id().to_string(),
                    detail: format!("next page {next} does not advance past page {}", params.page),
                };
                return Err(FetchError {
                    partial: droplets,
                    source,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use droplet_dash_provider::DropletPage;

    use super::*;
    use crate::test_utils::{MockCall, MockDropletProvider, droplets, network_error};

    fn ids(list: &[Droplet]) -> Vec<u64> {
        list.iter().map(|d| d.id).collect()
    }

    #[tokio::test]
    async fn concatenates_pages_in_order() {
        let mock = MockDropletProvider::with_pages(vec![
            droplets(&[1, 2]),
            droplets(&[3, 4]),
            droplets(&[5]),
        ]);

        let all = fetch_all(&mock, 2).await.unwrap();
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            mock.calls().await,
            vec![
                MockCall::List { page: 1 },
                MockCall::List { page: 2 },
                MockCall::List { page: 3 },
            ]
        );
    }

    #[tokio::test]
    async fn stops_at_page_without_next_marker() {
        let mock = MockDropletProvider::with_raw_pages(vec![
            DropletPage {
                droplets: droplets(&[1]),
                next_page: None,
                total: Some(3),
            },
            DropletPage {
                droplets: droplets(&[2]),
                next_page: None,
                total: Some(3),
            },
        ]);

        let all = fetch_all(&mock, 1).await.unwrap();
        assert_eq!(ids(&all), vec![1]);
        assert_eq!(mock.list_calls().await, 1);
    }

    #[tokio::test]
    async fn empty_account() {
        let mock = MockDropletProvider::new();
        let all = fetch_all(&mock, 50).await.unwrap();
        assert!(all.is_empty());
        assert_eq!(mock.list_calls().await, 1);
    }

    #[tokio::test]
    async fn error_returns_partial_accumulator() {
        let mock = MockDropletProvider::with_pages(vec![
            droplets(&[1, 2]),
            droplets(&[3, 4]),
            droplets(&[5]),
        ]);
        mock.fail_page(2, network_error()).await;

        let err = fetch_all(&mock, 2).await.unwrap_err();
        assert_eq!(ids(&err.partial), vec![1, 2]);
        assert!(matches!(err.source, ProviderError::NetworkError { .. }));
        assert_eq!(mock.list_calls().await, 2);
    }

    #[tokio::test]
    async fn non_advancing_marker_is_parse_error() {
        let mock = MockDropletProvider::with_raw_pages(vec![DropletPage {
            droplets: droplets(&[1]),
            next_page: Some(1),
            total: None,
        }]);

        let err = fetch_all(&mock, 1).await.unwrap_err();
        assert_eq!(ids(&err.partial), vec![1]);
        assert!(matches!(
            err.source,
            ProviderError::ParseError { ref provider, .. } if provider == "mock"
        ));
        assert_eq!(mock.list_calls().await, 1);
    }

    #[tokio::test]
    async fn follows_skipping_markers() {
        let mock = MockDropletProvider::with_raw_pages(vec![
            DropletPage {
                droplets: droplets(&[1]),
                next_page: Some(3),
                total: None,
            },
            DropletPage::default(),
            DropletPage {
                droplets: droplets(&[3]),
                next_page: None,
                total: None,
            },
        ]);

        let (all, pages) = fetch_pages(&mock, 1).await.unwrap();
        assert_eq!(ids(&all), vec![1, 3]);
        assert_eq!(pages, 2);
        assert_eq!(
            mock.calls().await,
            vec![MockCall::List { page: 1 }, MockCall::List { page: 3 }]
        );
    }

    #[tokio::test]
    async fn refresh_fetch_without_client() {
        let res = fetch_for_refresh(None, 50).await;
        assert!(matches!(res, Err(CoreError::ClientUninitialized)));
    }

    #[tokio::test]
    async fn refresh_fetch_drops_partial_list() {
        let mock = MockDropletProvider::with_pages(vec![droplets(&[1, 2]), droplets(&[3])]);
        mock.fail_page(2, network_error()).await;

        let res = fetch_for_refresh(Some(&mock as &dyn DropletProvider), 2).await;
        assert!(matches!(
            res,
            Err(CoreError::Provider(ProviderError::NetworkError { .. }))
        ));
    }

    #[tokio::test]
    async fn refresh_fetch_returns_every_page() {
        let mock = MockDropletProvider::with_pages(vec![droplets(&[1, 2]), droplets(&[3])]);
        let all = fetch_for_refresh(Some(&mock as &dyn DropletProvider), 2).await.unwrap();
        assert_eq!(ids(&all), vec![1, 2, 3]);
    }
}
