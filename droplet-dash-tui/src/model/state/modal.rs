//! Modal dialog state

use droplet_dash_core::DropletDetails;

/// Focused button of the destroy confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmFocus {
    #[default]
    Cancel,
    Destroy,
}

impl ConfirmFocus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Cancel => Self::Destroy,
            Self::Destroy => Self::Cancel,
        }
    }
}

/// Modal type
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Ask before destroying a droplet
    ConfirmDestroy {
        droplet_id: u64,
        droplet_name: String,
        focus: ConfirmFocus,
    },

    /// Read-only properties of one droplet
    Details(DropletDetails),

    /// Key bindings
    Help,
}

/// Modal state container
#[derive(Debug, Default)]
pub struct ModalState {
    /// Currently open modal (None = no modal)
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_details(&mut self, details: DropletDetails) {
        self.active = Some(Modal::Details(details));
    }

    /// Open the destroy confirmation with "Cancel" focused.
    pub fn show_confirm_destroy(&mut self, droplet_id: u64, droplet_name: impl Into<String>) {
        self.active = Some(Modal::ConfirmDestroy {
            droplet_id,
            droplet_name: droplet_name.into(),
            focus: ConfirmFocus::default(),
        });
    }
}
