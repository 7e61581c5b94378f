//! Async panel driver

use std::sync::Arc;

use droplet_dash_provider::{Droplet, DropletProvider};

use crate::error::CoreResult;
use crate::state::DropletsState;
use crate::types::{DropletDetails, PanelAction};

use super::{ActionOutcome, DEFAULT_PER_PAGE, execute_action, fetch_for_refresh};

/// One droplet panel: a provider plus the state it feeds.
///
/// Methods take `&mut self`, so a panel can never run two refreshes at once.
/// Front ends that run fetches on other tasks hold a [`DropletsState`] directly
/// and use its ticket API instead.
pub struct DropletPanel {
    provider: Option<Arc<dyn DropletProvider>>,
    state: DropletsState,
    per_page: u32,
}

impl DropletPanel {
    /// Create a panel. `provider` is `None` when the client could not be built;
    /// every refresh then fails with [`CoreError::ClientUninitialized`](crate::CoreError::ClientUninitialized).
    #[must_use]
    pub fn new(provider: Option<Arc<dyn DropletProvider>>) -> Self {
        Self {
            provider,
            state: DropletsState::new(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    #[must_use]
    pub fn state(&self) -> &DropletsState {
        &self.state
    }

    /// Fetch the full list and publish the result.
    ///
    /// Leaves the state in `Ready` or `Failed` until [`mark_rendered`](Self::mark_rendered).
    pub async fn refresh(&mut self) {
        let Some(mut ticket) = self.state.begin_refresh() else {
            return;
        };
        loop {
            let result = self.fetch().await;
            if !self.state.finish_refresh(ticket, result) {
                break;
            }
            match self.state.begin_refresh() {
                Some(next) => ticket = next,
                None => break,
            }
        }
    }

    async fn fetch(&self) -> CoreResult<Vec<Droplet>> {
        fetch_for_refresh(self.provider.as_deref(), self.per_page).await
    }

    pub fn mark_rendered(&mut self) {
        self.state.mark_rendered();
    }

    /// Run `action` on the highlighted droplet, then refresh.
    ///
    /// Destroy drops the droplet from the local list before the refresh. The
    /// refresh runs whatever the API answered.
    pub async fn dispatch(&mut self, action: PanelAction) -> ActionOutcome {
        let Some(droplet_id) = self.state.current().map(|d| d.id) else {
            return ActionOutcome::NoSelection;
        };

        let outcome = execute_action(self.provider.as_deref(), droplet_id, action).await;

        if action.removes_droplet() {
            self.state.remove_current();
        }
        self.refresh().await;
        outcome
    }

    pub async fn destroy(&mut self) -> ActionOutcome {
        self.dispatch(PanelAction::Destroy).await
    }

    pub async fn reboot(&mut self) -> ActionOutcome {
        self.dispatch(PanelAction::Reboot).await
    }

    pub async fn shutdown(&mut self) -> ActionOutcome {
        self.dispatch(PanelAction::Shutdown).await
    }

    pub async fn enable_private_networking(&mut self) -> ActionOutcome {
        self.dispatch(PanelAction::EnablePrivateNetworking).await
    }

    /// Properties of the highlighted droplet, if any.
    #[must_use]
    pub fn show_info(&self) -> Option<DropletDetails> {
        self.state.current().map(DropletDetails::from_droplet)
    }

    pub fn select_next(&mut self) {
        self.state.select_next();
    }

    pub fn select_prev(&mut self) {
        self.state.select_prev();
    }

    pub fn select_first(&mut self) {
        self.state.select_first();
    }

    pub fn select_last(&mut self) {
        self.state.select_last();
    }

    pub fn unselect(&mut self) {
        self.state.unselect();
    }
}
