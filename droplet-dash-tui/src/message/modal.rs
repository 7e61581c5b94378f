//! Modal messages

/// Modal message
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Close the modal
    Close,

    /// Confirm (activate the focused button)
    Confirm,

    /// Move focus between the confirm dialog buttons
    ToggleFocus,
}
