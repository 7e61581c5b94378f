//! Modal update logic

use droplet_dash_core::PanelAction;

use super::{Command, start_action};
use crate::message::ModalMessage;
use crate::model::App;
use crate::model::Modal;
use crate::model::state::ConfirmFocus;

pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }

        ModalMessage::ToggleFocus => {
            if let Some(Modal::ConfirmDestroy { focus, .. }) = &mut app.modal.active {
                *focus = focus.toggle();
            }
            None
        }

        ModalMessage::Confirm => confirm(app),
    }
}

fn confirm(app: &mut App) -> Option<Command> {
    let modal = app.modal.active.take()?;

    let Modal::ConfirmDestroy {
        droplet_id,
        droplet_name,
        focus: ConfirmFocus::Destroy,
    } = modal
    else {
        // Cancel, details and help all just close
        return None;
    };

    // A refresh may have landed while the dialog was open; find the row again
    if app.droplets.select_id(droplet_id) {
        app.droplets.remove_current();
    }
    start_action(app, droplet_id, &droplet_name, PanelAction::Destroy)
}
