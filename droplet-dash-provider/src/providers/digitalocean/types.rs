//! `DigitalOcean` API wire types

use serde::{Deserialize, Serialize};

use crate::types::Droplet;

/// `GET /droplets` response
#[derive(Debug, Deserialize)]
pub struct DropletsResponse {
    #[serde(default)]
    pub droplets: Vec<Droplet>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Pagination links; both this object and `pages` may be absent on the last page.
#[derive(Debug, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub pages: Option<Pages>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Pages {
    /// Only `next` matters; `first`, `prev` and `last` are ignored.
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub total: Option<u32>,
}

/// Error body returned with any non-2xx status
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /droplets/{id}/actions` body
#[derive(Debug, Serialize)]
pub struct ActionRequest<'a> {
    #[serde(rename = "type")]
    pub action_type: &'a str,
}

/// `POST /droplets/{id}/actions` response
#[derive(Debug, Deserialize)]
pub struct ActionResponse {
    pub action: ActionInfo,
}

#[derive(Debug, Deserialize)]
pub struct ActionInfo {
    pub id: u64,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type", default)]
    pub action_type: String,
}

/// `GET /account` response
#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    pub account: Account,
}

#[derive(Debug, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub status: String,
}
