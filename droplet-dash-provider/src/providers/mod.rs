//! Droplet provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod digitalocean;

pub use digitalocean::DigitalOceanProvider;
