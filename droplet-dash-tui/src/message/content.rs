//! Droplet list messages

use droplet_dash_core::PanelAction;

/// Droplet list message
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== Navigation ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    /// Open the detail overlay for the highlighted droplet
    ShowDetails,

    /// Run a command on the highlighted droplet
    Action(PanelAction),
}
