//! src/backend/mod.rs
//! Backend layer: everything that talks to the outside world
//!
//! The backend never touches the model. It runs provider calls on its own tokio
//! runtime and reports results as `AppMessage::Backend(...)` over the channel the
//! main loop drains, so the UI keeps drawing while a fetch is in flight.
//!
//!
//! Module layout:
//!     src/backend/mod.rs
//!         mod config_service;      // config.json + environment overrides
//!         mod credential_service;  // API token in the system keyring
//!         mod droplet_service;     // runtime, provider client, spawned jobs
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 1. Configuration (JsonConfigService)
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Location: <config dir>/droplet-dash/config.json, or --config <path>.
//!     A missing default file yields defaults; a malformed file is an error.
//!     DIGITALOCEAN_TOKEN / DO_API_TOKEN replace `api_key` when set.
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 2. Token storage (KeyringTokenStore)
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Fallback when neither the environment nor the config file has a token.
//!     `droplet-dash --login` writes it.
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 3. Data flow
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     update() returns Command::Refresh(ticket)
//!         ↓
//!     DropletService::spawn_refresh  (fetch_all on the runtime)
//!         ↓
//!     AppMessage::Backend(BackendMessage::Refreshed { ticket, result })
//!         ↓
//!     update() -> DropletsState::finish_refresh
//!

mod config_service;
mod credential_service;
mod droplet_service;

pub use config_service::{AppConfig, ConfigService, JsonConfigService, app_dir};
pub use credential_service::{KeyringTokenStore, TokenStore, resolve_token};
pub use droplet_service::DropletService;
