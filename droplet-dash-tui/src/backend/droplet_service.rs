//! Droplet service
//!
//! Owns the tokio runtime and the provider client. Jobs are spawned and their
//! results sent back to the main loop; nothing here blocks the UI thread.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use droplet_dash_core::{PanelAction, RefreshTicket, execute_action, fetch_for_refresh};
use droplet_dash_provider::{DropletProvider, ProviderCredentials, create_provider};

use crate::message::{AppMessage, BackendMessage};

/// Provider calls for the panel.
pub struct DropletService {
    runtime: Runtime,
    /// `None` when no usable token was found.
    provider: Option<Arc<dyn DropletProvider>>,
    per_page: u32,
    tx: Sender<AppMessage>,
}

impl DropletService {
    pub fn new(token: Option<String>, per_page: u32, tx: Sender<AppMessage>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("droplet-dash-backend")
            .enable_all()
            .build()
            .context("failed to start the async runtime")?;

        let provider = token.and_then(|api_token| {
            match create_provider(ProviderCredentials::DigitalOcean { api_token }) {
                Ok(provider) => Some(provider),
                Err(e) => {
                    log::warn!("Could not create the DigitalOcean client: {e}");
                    None
                }
            }
        });

        Ok(Self {
            runtime,
            provider,
            per_page,
            tx,
        })
    }

    /// Fetch every page and report `BackendMessage::Refreshed`.
    pub fn spawn_refresh(&self, ticket: RefreshTicket) {
        let provider = self.provider.clone();
        let per_page = self.per_page;
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let result = fetch_for_refresh(provider.as_deref(), per_page).await;
            send(&tx, BackendMessage::Refreshed { ticket, result });
        });
    }

    /// Run `action` once and report `BackendMessage::ActionFinished`.
    pub fn spawn_action(&self, droplet_id: u64, action: PanelAction) {
        let provider = self.provider.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let outcome = execute_action(provider.as_deref(), droplet_id, action).await;
            send(
                &tx,
                BackendMessage::ActionFinished {
                    droplet_id,
                    action,
                    outcome,
                },
            );
        });
    }
}

fn send(tx: &Sender<AppMessage>, msg: BackendMessage) {
    if tx.send(AppMessage::Backend(msg)).is_err() {
        log::debug!("UI is gone, dropping backend result");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use droplet_dash_core::CoreError;

    use super::*;

    #[test]
    fn missing_token_reports_uninitialized_client() {
        let (tx, rx) = mpsc::channel();
        let service = DropletService::new(None, 50, tx).unwrap();
        let mut state = droplet_dash_core::DropletsState::new();
        let ticket = state.begin_refresh().unwrap();

        service.spawn_refresh(ticket.clone());
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppMessage::Backend(BackendMessage::Refreshed {
                ticket: got,
                result,
            }) => {
                assert_eq!(got, ticket);
                assert!(matches!(result, Err(CoreError::ClientUninitialized)));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn blank_token_means_no_client() {
        let (tx, rx) = mpsc::channel();
        let service = DropletService::new(Some("   ".to_string()), 50, tx).unwrap();
        assert!(service.provider.is_none());

        service.spawn_action(7, PanelAction::Reboot);
        let msg = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(
            msg,
            AppMessage::Backend(BackendMessage::ActionFinished {
                droplet_id: 7,
                action: PanelAction::Reboot,
                outcome: droplet_dash_core::ActionOutcome::Rejected(CoreError::ClientUninitialized),
            })
        ));
    }
}
