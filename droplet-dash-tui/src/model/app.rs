//! Root application state

use droplet_dash_core::{Column, DropletsState};

use super::ModalState;

/// Application state
pub struct App {
    /// Whether the main loop should stop
    pub should_quit: bool,

    /// Panel title
    pub title: String,

    /// Columns shown in the list
    pub columns: Vec<Column>,

    /// Droplet list, selection and refresh cycle
    pub droplets: DropletsState,

    /// Modal state
    pub modal: ModalState,

    /// Status bar message
    pub status_message: Option<String>,

    /// Droplet commands sent and not yet answered
    pub actions_in_flight: usize,
}

impl App {
    pub fn new(title: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            should_quit: false,
            title: title.into(),
            columns,
            droplets: DropletsState::new(),
            modal: ModalState::new(),
            status_message: None,
            actions_in_flight: 0,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
