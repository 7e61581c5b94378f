//! The panel's single owned state struct

use chrono::{DateTime, Utc};

use droplet_dash_provider::Droplet;

use crate::error::CoreError;
use crate::types::{Column, display_line};

use super::{DropletCollection, RefreshPhase, RefreshTicket, SelectionTracker};

/// Droplets, selection, and refresh bookkeeping for one panel.
///
/// Every mutation goes through `&mut self`, so whoever owns the value is the only
/// writer. Collection-changing methods re-clamp the selection before returning.
#[derive(Debug, Default)]
pub struct DropletsState {
    collection: DropletCollection,
    selection: SelectionTracker,
    last_error: Option<CoreError>,
    item_count: usize,
    phase: RefreshPhase,
    refresh_pending: bool,
    generation: u64,
    last_refreshed: Option<DateTime<Utc>>,
}

impl DropletsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Refresh cycle =====

    /// Enter `Fetching` and hand out the ticket for the new fetch.
    ///
    /// Returns `None` while a fetch is already outstanding; the request is then
    /// remembered and reported by [`finish_refresh`](Self::finish_refresh).
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        if self.phase == RefreshPhase::Fetching {
            self.refresh_pending = true;
            log::debug!("Refresh requested while fetching, queued");
            return None;
        }
        self.generation += 1;
        self.phase = RefreshPhase::Fetching;
        Some(RefreshTicket {
            generation: self.generation,
        })
    }

    /// Apply the result of the fetch started with `ticket`.
    ///
    /// On success the collection is replaced wholesale and the error cleared. On
    /// failure the collection is emptied and the error kept for display; any
    /// partial pages are never shown. Results for an outdated ticket are ignored.
    ///
    /// Returns `true` when another refresh was requested during the fetch and must
    /// be started now.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Droplet>, CoreError>,
    ) -> bool {
        if ticket.generation != self.generation || self.phase != RefreshPhase::Fetching {
            log::debug!(
                "Ignoring stale refresh result (ticket {}, current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(droplets) => {
                self.collection.replace(droplets);
                self.selection.clamp(self.collection.len());
                self.item_count = self.collection.len();
                self.last_error = None;
                self.last_refreshed = Some(Utc::now());
                self.phase = RefreshPhase::Ready;
            }
            Err(e) => {
                self.collection.clear();
                self.selection.clamp(0);
                self.item_count = 0;
                self.last_error = Some(e);
                self.phase = RefreshPhase::Failed;
            }
        }

        std::mem::take(&mut self.refresh_pending)
    }

    /// The new list has been drawn; settle back to `Idle`.
    pub fn mark_rendered(&mut self) {
        if matches!(self.phase, RefreshPhase::Ready | RefreshPhase::Failed) {
            self.phase = RefreshPhase::Idle;
        }
    }

    // ===== Selection =====

    /// The highlighted droplet, or `None` when nothing is highlighted or the
    /// index no longer points into the list.
    #[must_use]
    pub fn current(&self) -> Option<&Droplet> {
        self.selection
            .index_in(self.collection.len())
            .and_then(|i| self.collection.get(i))
    }

    pub fn select_next(&mut self) {
        self.selection.next(self.collection.len());
    }

    pub fn select_prev(&mut self) {
        self.selection.prev(self.collection.len());
    }

    pub fn select_first(&mut self) {
        self.selection.first(self.collection.len());
    }

    pub fn select_last(&mut self) {
        self.selection.last(self.collection.len());
    }

    pub fn unselect(&mut self) {
        self.selection.clear();
    }

    /// Highlight the droplet with `id`, if it is in the list.
    pub fn select_id(&mut self, id: u64) -> bool {
        let Some(index) = self.collection.position(id) else {
            return false;
        };
        self.selection.select(index, self.collection.len());
        true
    }

    /// Swap-remove the highlighted droplet and keep the cursor in range.
    ///
    /// The cursor keeps its index, so it now points at the droplet that was last.
    pub fn remove_current(&mut self) -> Option<Droplet> {
        let index = self.selection.index_in(self.collection.len())?;
        let removed = self.collection.swap_remove(index)?;
        self.selection.clamp(self.collection.len());
        self.item_count = self.collection.len();
        Some(removed)
    }

    // ===== Accessors =====

    #[must_use]
    pub fn droplets(&self) -> &[Droplet] {
        self.collection.as_slice()
    }

    #[must_use]
    pub fn selection(&self) -> SelectionTracker {
        self.selection
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&CoreError> {
        self.last_error.as_ref()
    }

    /// Count published to the display; 0 while an error is shown.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.phase == RefreshPhase::Fetching
    }

    #[must_use]
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    /// One display line per droplet, in list order.
    #[must_use]
    pub fn display_lines(&self, columns: &[Column]) -> Vec<String> {
        self.collection
            .iter()
            .map(|d| display_line(d, columns))
            .collect()
    }
}
