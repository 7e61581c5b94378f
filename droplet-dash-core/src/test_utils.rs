//! Test helpers
//!
//! A scripted in-memory provider plus droplet factories.

use std::collections::HashMap;

use async_trait::async_trait;
use droplet_dash_provider::{
    Droplet, DropletAction, DropletPage, DropletProvider, PaginationParams, ProviderError,
    ProviderLimits, ProviderMetadata, ProviderType, Result,
};
use tokio::sync::Mutex;

/// A droplet named `droplet-{id}`.
pub fn droplet(id: u64) -> Droplet {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("droplet-{id}"),
        "status": "active",
        "region": { "slug": "nyc3", "name": "New York 3" },
        "size_slug": "s-1vcpu-1gb",
    }))
    .unwrap()
}

pub fn droplets(ids: &[u64]) -> Vec<Droplet> {
    ids.iter().copied().map(droplet).collect()
}

pub fn network_error() -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: "connection reset".to_string(),
    }
}

/// A call the mock received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    List { page: u32 },
    Delete(u64),
    Action(u64, DropletAction),
}

// ===== MockDropletProvider =====

pub struct MockDropletProvider {
    /// Page `n` (1-based) is `pages[n - 1]`.
    pages: Mutex<Vec<DropletPage>>,
    page_errors: Mutex<HashMap<u32, ProviderError>>,
    /// If Some, delete and actions fail with this error.
    action_error: Mutex<Option<ProviderError>>,
    calls: Mutex<Vec<MockCall>>,
    last_per_page: Mutex<Option<u32>>,
}

impl MockDropletProvider {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(Vec::new()),
            page_errors: Mutex::new(HashMap::new()),
            action_error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            last_per_page: Mutex::new(None),
        }
    }

    /// Serve `pages` in order, each but the last pointing at the next.
    pub fn with_pages(pages: Vec<Vec<Droplet>>) -> Self {
        let mock = Self::new();
        *mock.pages.try_lock().unwrap() = chain_pages(pages);
        mock
    }

    /// Serve `pages` exactly as given, next-page markers included.
    pub fn with_raw_pages(pages: Vec<DropletPage>) -> Self {
        let mock = Self::new();
        *mock.pages.try_lock().unwrap() = pages;
        mock
    }

    pub async fn set_pages(&self, pages: Vec<Vec<Droplet>>) {
        *self.pages.lock().await = chain_pages(pages);
    }

    pub async fn fail_page(&self, page: u32, err: ProviderError) {
        self.page_errors.lock().await.insert(page, err);
    }

    pub async fn fail_actions(&self, err: ProviderError) {
        *self.action_error.lock().await = Some(err);
    }

    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().await.clone()
    }

    pub async fn list_calls(&self) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|c| matches!(c, MockCall::List { .. }))
            .count()
    }

    pub async fn last_per_page(&self) -> Option<u32> {
        *self.last_per_page.lock().await
    }

    async fn check_action(&self) -> Result<()> {
        match self.action_error.lock().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn chain_pages(pages: Vec<Vec<Droplet>>) -> Vec<DropletPage> {
    let count = pages.len();
    pages
        .into_iter()
        .enumerate()
        .map(|(i, droplets)| DropletPage {
            droplets,
            next_page: (i + 1 < count).then(|| u32::try_from(i + 2).unwrap()),
            total: None,
        })
        .collect()
}

#[async_trait]
impl DropletProvider for MockDropletProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::DigitalOcean,
            name: "Mock".to_string(),
            description: "Scripted provider for tests".to_string(),
            required_fields: Vec::new(),
            limits: ProviderLimits { max_per_page: 200 },
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        Ok(true)
    }

    async fn list_droplets(&self, params: &PaginationParams) -> Result<DropletPage> {
        self.calls
            .lock()
            .await
            .push(MockCall::List { page: params.page });
        *self.last_per_page.lock().await = Some(params.per_page);

        if let Some(err) = self.page_errors.lock().await.get(&params.page) {
            return Err(err.clone());
        }

        let pages = self.pages.lock().await;
        let index = usize::try_from(params.page).unwrap() - 1;
        Ok(pages.get(index).cloned().unwrap_or(DropletPage {
            droplets: Vec::new(),
            next_page: None,
            total: None,
        }))
    }

    async fn delete_droplet(&self, droplet_id: u64) -> Result<()> {
        self.calls.lock().await.push(MockCall::Delete(droplet_id));
        self.check_action().await?;
        for page in self.pages.lock().await.iter_mut() {
            page.droplets.retain(|d| d.id != droplet_id);
        }
        Ok(())
    }

    async fn droplet_action(&self, droplet_id: u64, action: DropletAction) -> Result<()> {
        self.calls
            .lock()
            .await
            .push(MockCall::Action(droplet_id, action));
        self.check_action().await
    }
}
