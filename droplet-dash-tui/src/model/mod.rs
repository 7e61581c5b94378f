//! src/model/mod.rs
//! Model layer: application state
//!
//! The single source of truth for what is on screen. Plain data only; every
//! change goes through the Update layer.
//!
//!
//! Module layout:
//!     src/model/mod.rs
//!         mod app;            // App, the root state
//!         pub mod state;      // modal dialog state
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! App
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub struct App {
//!         pub should_quit: bool,
//!         pub title: String,                  // panel title from config
//!         pub columns: Vec<Column>,           // list columns from config
//!         pub droplets: DropletsState,        // list, selection, refresh cycle
//!         pub modal: ModalState,              // overlay on top of the list
//!         pub status_message: Option<String>, // last action outcome, hints
//!         pub actions_in_flight: usize,
//!     }
//!
//!     `droplets` is the panel engine from droplet-dash-core. The model owns it,
//!     so the main thread is its only writer; backend jobs only send messages.
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{Modal, ModalState};
