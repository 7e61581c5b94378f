//! Backend result handling

use droplet_dash_core::ActionOutcome;

use super::{Command, request_refresh};
use crate::message::BackendMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: BackendMessage) -> Option<Command> {
    match msg {
        BackendMessage::Refreshed { ticket, result } => {
            if app.droplets.finish_refresh(ticket, result) {
                return request_refresh(app);
            }
            None
        }

        BackendMessage::ActionFinished {
            droplet_id,
            action,
            outcome,
        } => {
            app.actions_in_flight = app.actions_in_flight.saturating_sub(1);
            match outcome {
                ActionOutcome::Accepted => {
                    app.set_status(format!("{action}: droplet {droplet_id} accepted"));
                }
                ActionOutcome::Rejected(e) => {
                    app.set_status(format!("{action}: droplet {droplet_id} failed: {e}"));
                }
                ActionOutcome::NoSelection => {}
            }
            // Refresh after every command, whatever the outcome
            request_refresh(app)
        }
    }
}
