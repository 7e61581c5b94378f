//! Backend results

use droplet_dash_core::{ActionOutcome, CoreResult, PanelAction, RefreshTicket};
use droplet_dash_provider::Droplet;

/// Result of a spawned backend job
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// A full listing finished.
    Refreshed {
        ticket: RefreshTicket,
        result: CoreResult<Vec<Droplet>>,
    },

    /// A droplet command finished.
    ActionFinished {
        droplet_id: u64,
        action: PanelAction,
        outcome: ActionOutcome,
    },
}
