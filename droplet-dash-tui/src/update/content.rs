//! Droplet list update logic

use droplet_dash_core::{DropletDetails, PanelAction};

use super::{Command, start_action};
use crate::message::ContentMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        ContentMessage::SelectPrevious => app.droplets.select_prev(),
        ContentMessage::SelectNext => app.droplets.select_next(),
        ContentMessage::SelectFirst => app.droplets.select_first(),
        ContentMessage::SelectLast => app.droplets.select_last(),

        ContentMessage::ShowDetails => {
            if let Some(droplet) = app.droplets.current() {
                let details = DropletDetails::from_droplet(droplet);
                app.modal.show_details(details);
            }
        }

        ContentMessage::Action(action) => return run_action(app, action),
    }
    None
}

fn run_action(app: &mut App, action: PanelAction) -> Option<Command> {
    let Some(droplet) = app.droplets.current() else {
        app.set_status("No droplet selected");
        return None;
    };
    let (id, name) = (droplet.id, droplet.name.clone());

    if action.removes_droplet() {
        app.modal.show_confirm_destroy(id, name);
        return None;
    }
    start_action(app, id, &name, action)
}
