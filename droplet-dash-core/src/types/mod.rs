//! Type definitions
//!
//! Droplet records come straight from the provider crate; this module adds the
//! presentation-side types built on top of them.

mod action;
mod column;
mod details;

pub use action::PanelAction;
pub use column::{Column, ParseColumnError, default_columns, display_line, header_line};
pub use details::DropletDetails;

// Re-export library types
pub use droplet_dash_provider::{
    Droplet, DropletAction, DropletStatus, PaginationParams, ProviderCredentials,
};
