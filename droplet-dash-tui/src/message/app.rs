//! Top-level application message

use super::{BackendMessage, ContentMessage, ModalMessage};

/// Application message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Re-fetch the droplet list
    Refresh,

    /// Show the key binding help
    ShowHelp,

    /// Close the open modal, or drop the list highlight
    GoBack,

    /// Droplet list messages
    Content(ContentMessage),

    /// Modal messages
    Modal(ModalMessage),

    /// Results from backend jobs
    Backend(BackendMessage),

    /// No operation (unhandled input)
    Noop,
}
