//! `DigitalOcean` droplet provider (API v2)

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_token;

pub(crate) use types::{
    AccountResponse, ActionRequest, ActionResponse, ApiErrorBody, DropletsResponse, Links,
};

pub(crate) const DO_API_BASE: &str = "https://api.digitalocean.com/v2";
/// Largest `per_page` the droplet listing accepts
pub(crate) const MAX_PER_PAGE: u32 = 200;

/// `DigitalOcean` droplet provider
pub struct DigitalOceanProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
}

impl DigitalOceanProvider {
    pub fn new(api_token: String) -> Self {
        Self {
            client: create_http_client(),
            api_token,
        }
    }
}

impl std::fmt::Debug for DigitalOceanProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigitalOceanProvider")
            .field("api_token", &mask_token(&self.api_token))
            .finish_non_exhaustive()
    }
}
