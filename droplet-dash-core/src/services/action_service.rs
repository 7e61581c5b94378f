//! Droplet command dispatch

use droplet_dash_provider::DropletProvider;

use crate::error::CoreError;
use crate::types::PanelAction;

/// What happened to a droplet command.
///
/// A rejected command is reported to the caller only. It never reaches the
/// panel's last-error slot.
#[derive(Debug, Clone)]
pub enum ActionOutcome {
    /// No droplet was highlighted; nothing was sent.
    NoSelection,
    /// The API accepted the request. The droplet may not have changed yet.
    Accepted,
    /// The request failed or could not be sent.
    Rejected(CoreError),
}

impl ActionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Send `action` for `droplet_id` once.
///
/// Without a provider the command is rejected with
/// [`CoreError::ClientUninitialized`] and nothing is sent.
pub async fn execute_action(
    provider: Option<&dyn DropletProvider>,
    droplet_id: u64,
    action: PanelAction,
) -> ActionOutcome {
    let Some(provider) = provider else {
        log::warn!("{action} on droplet {droplet_id} skipped: client not initialized");
        return ActionOutcome::Rejected(CoreError::ClientUninitialized);
    };

    let result = match action.droplet_action() {
        None => provider.delete_droplet(droplet_id).await,
        Some(remote) => provider.droplet_action(droplet_id, remote).await,
    };

    match result {
        Ok(()) => {
            log::info!("{action} accepted for droplet {droplet_id}");
            ActionOutcome::Accepted
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("{action} on droplet {droplet_id} rejected: {e}");
            } else {
                log::error!("{action} on droplet {droplet_id} failed: {e}");
            }
            ActionOutcome::Rejected(CoreError::Provider(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use droplet_dash_provider::{DropletAction, ProviderError};

    use super::*;
    use crate::test_utils::{MockCall, MockDropletProvider};

    fn provider(mock: &MockDropletProvider) -> Option<&dyn DropletProvider> {
        Some(mock)
    }

    #[tokio::test]
    async fn destroy_uses_delete_endpoint() {
        let mock = MockDropletProvider::new();
        let outcome = execute_action(provider(&mock), 9, PanelAction::Destroy).await;
        assert!(outcome.is_accepted());
        assert_eq!(mock.calls().await, vec![MockCall::Delete(9)]);
    }

    #[tokio::test]
    async fn power_actions_use_action_endpoint() {
        let mock = MockDropletProvider::new();
        execute_action(provider(&mock), 1, PanelAction::Reboot).await;
        execute_action(provider(&mock), 1, PanelAction::Shutdown).await;
        execute_action(provider(&mock), 1, PanelAction::EnablePrivateNetworking).await;
        assert_eq!(
            mock.calls().await,
            vec![
                MockCall::Action(1, DropletAction::Reboot),
                MockCall::Action(1, DropletAction::Shutdown),
                MockCall::Action(1, DropletAction::EnablePrivateNetworking),
            ]
        );
    }

    #[tokio::test]
    async fn failure_is_reported_as_rejected() {
        let mock = MockDropletProvider::new();
        mock.fail_actions(ProviderError::DropletNotFound {
            provider: "mock".to_string(),
            droplet_id: "4".to_string(),
            raw_message: None,
        })
        .await;

        let outcome = execute_action(provider(&mock), 4, PanelAction::Reboot).await;
        assert!(matches!(
            outcome,
            ActionOutcome::Rejected(CoreError::Provider(ProviderError::DropletNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn missing_client_is_rejected() {
        let outcome = execute_action(None, 4, PanelAction::Destroy).await;
        assert!(matches!(
            outcome,
            ActionOutcome::Rejected(CoreError::ClientUninitialized)
        ));
    }
}
