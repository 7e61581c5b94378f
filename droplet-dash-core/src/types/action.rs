//! User-facing droplet commands

use serde::{Deserialize, Serialize};

use droplet_dash_provider::DropletAction;

/// A command the user can run against the selected droplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelAction {
    /// Delete the droplet.
    Destroy,
    /// Reboot the droplet.
    Reboot,
    /// Shut the droplet down.
    Shutdown,
    /// Enable private networking.
    EnablePrivateNetworking,
}

impl PanelAction {
    /// All actions, in help-screen order.
    pub const ALL: [Self; 4] = [
        Self::Destroy,
        Self::Reboot,
        Self::Shutdown,
        Self::EnablePrivateNetworking,
    ];

    /// The remote droplet action, or `None` for `Destroy` which uses the delete endpoint.
    pub fn droplet_action(self) -> Option<DropletAction> {
        match self {
            Self::Destroy => None,
            Self::Reboot => Some(DropletAction::Reboot),
            Self::Shutdown => Some(DropletAction::Shutdown),
            Self::EnablePrivateNetworking => Some(DropletAction::EnablePrivateNetworking),
        }
    }

    /// Whether the action removes the droplet from the list right away.
    pub fn removes_droplet(self) -> bool {
        matches!(self, Self::Destroy)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Destroy => "Destroy",
            Self::Reboot => "Reboot",
            Self::Shutdown => "Shutdown",
            Self::EnablePrivateNetworking => "Enable private networking",
        }
    }
}

impl std::fmt::Display for PanelAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
