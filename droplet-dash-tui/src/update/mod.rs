//! src/update/mod.rs
//! Update layer: state transitions
//!
//! The only place that mutates the Model. Each message is handled to completion
//! before the next one, which keeps `DropletsState` single-writer.
//!
//!
//! Module layout:
//!     src/update/mod.rs
//!         mod backend;    // results of spawned jobs
//!         mod content;    // list navigation and droplet commands
//!         mod modal;      // confirm / details / help dialogs
//!
//!     pub fn update(app: &mut App, msg: AppMessage) -> Option<Command>
//!
//! Side effects are never run here. When a message needs the network, update
//! returns a `Command` and the main loop hands it to the backend:
//!
//!     Command::Refresh(ticket)            fetch every page
//!     Command::RunAction { id, action }   delete / reboot / shutdown / private net
//!
//! The refresh ticket comes from `DropletsState::begin_refresh`, so a refresh
//! requested while one is running is queued instead of started twice.
//!

mod backend;
mod content;
mod modal;

use droplet_dash_core::{PanelAction, RefreshTicket};

use crate::message::AppMessage;
use crate::model::App;

/// Work for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh(RefreshTicket),
    RunAction { droplet_id: u64, action: PanelAction },
}

/// Handle a message and return the backend work it requires, if any.
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Refresh => request_refresh(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::GoBack => {
            // Close the modal first; otherwise drop the highlight
            if app.modal.is_open() {
                app.modal.close();
            } else {
                app.droplets.unselect();
            }
            app.clear_status();
            None
        }

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::Noop => None,
    }
}

/// Start a refresh, or queue one behind the fetch that is running.
fn request_refresh(app: &mut App) -> Option<Command> {
    app.droplets.begin_refresh().map(Command::Refresh)
}

fn start_action(app: &mut App, droplet_id: u64, name: &str, action: PanelAction) -> Option<Command> {
    app.actions_in_flight += 1;
    app.set_status(format!("{action}: {name}..."));
    Some(Command::RunAction { droplet_id, action })
}
