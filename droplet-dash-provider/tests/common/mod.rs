//! Shared helpers for live API tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use droplet_dash_provider::{
    Droplet, DropletProvider, PaginationParams, ProviderCredentials, create_provider,
};

/// Skip the test (return early) when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: environment variable {} is not set", $var);
                return;
            }
        )+
    };
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        match $expr {
            Ok(val) => val,
            Err(e) => panic!("expected Ok(..), got Err({e:?})"),
        }
    }};
    ($expr:expr, $($msg:tt)+) => {{
        match $expr {
            Ok(val) => val,
            Err(e) => panic!("{}: Err({e:?})", format_args!($($msg)+)),
        }
    }};
}

/// A droplet id far outside anything the API hands out.
pub const MISSING_DROPLET_ID: u64 = 1;

/// Test context wrapping a provider built from `DIGITALOCEAN_TOKEN`.
pub struct TestContext {
    pub provider: Arc<dyn DropletProvider>,
}

impl TestContext {
    pub fn digitalocean() -> Option<Self> {
        let api_token = env::var("DIGITALOCEAN_TOKEN").ok()?;
        let provider = create_provider(ProviderCredentials::DigitalOcean { api_token }).ok()?;
        Some(Self { provider })
    }

    /// Walk every page with the given page size.
    pub async fn list_all(&self, per_page: u32) -> droplet_dash_provider::Result<Vec<Droplet>> {
        let mut params = PaginationParams { page: 1, per_page };
        let mut all = Vec::new();
        loop {
            let page = self.provider.list_droplets(&params).await?;
            all.extend(page.droplets);
            match page.next_page {
                Some(next) => params = params.with_page(next),
                None => return Ok(all),
            }
        }
    }
}
