//! Provider-facing services
//!
//! `fetch_all` walks the paginated listing, `execute_action` runs one droplet
//! command, and [`DropletPanel`] ties both to a [`DropletsState`](crate::DropletsState).

mod action_service;
mod droplet_panel;
mod fetch_service;

pub use action_service::{ActionOutcome, execute_action};
pub use droplet_panel::DropletPanel;
pub use fetch_service::{DEFAULT_PER_PAGE, FetchError, fetch_all, fetch_for_refresh};
