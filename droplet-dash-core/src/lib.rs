//! Droplet Dash Core Library
//!
//! The data and selection engine behind the droplet panel:
//! - Droplet collection with swap-remove for optimistic deletes
//! - Selection tracking that stays in range across list mutations
//! - Paginated fetch and the Idle/Fetching/Ready/Failed refresh cycle
//! - Action dispatch (destroy, reboot, shutdown, private networking)
//!
//! This library has no terminal dependencies; front ends drive [`DropletPanel`]
//! directly or hold a [`DropletsState`] and run the provider calls themselves.

pub mod error;
pub mod services;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    ActionOutcome, DropletPanel, FetchError, execute_action, fetch_all, fetch_for_refresh,
};
pub use state::{DropletCollection, DropletsState, RefreshPhase, RefreshTicket, SelectionTracker};
pub use types::{Column, DropletDetails, PanelAction, default_columns, display_line, header_line};
