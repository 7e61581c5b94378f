//! app.rs
//! Main loop
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))    // draw the model
//!     app.droplets.mark_rendered()                // Ready/Failed -> Idle once shown
//!     if app.should_quit { break }
//!     drain backend results                       // AppMessage::Backend(...)
//!     if let Some(event) = poll_event(100ms) {    // keyboard input
//!         let msg = handle_event(event, &app);
//!         update(&mut app, msg)                   // may return a Command
//!     }
//! }
//!
//! Commands returned by `update` are handed to the backend, which runs them on
//! its runtime and reports back through the channel.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;

use crate::backend::DropletService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Command};
use crate::util::Term;
use crate::view;

/// Run the main loop until the user quits.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &DropletService,
    rx: &Receiver<AppMessage>,
) -> Result<()> {
    // Initial load
    dispatch(backend, update::update(app, AppMessage::Refresh));

    loop {
        // 1. Draw
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;
        app.droplets.mark_rendered();

        // 2. Quit?
        if app.should_quit {
            break;
        }

        // 3. Backend results
        while let Ok(msg) = rx.try_recv() {
            dispatch(backend, update::update(app, msg));
        }

        // 4. Input (100 ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(backend, update::update(app, msg));
        }
    }

    Ok(())
}

fn dispatch(backend: &DropletService, command: Option<Command>) {
    match command {
        Some(Command::Refresh(ticket)) => backend.spawn_refresh(ticket),
        Some(Command::RunAction { droplet_id, action }) => {
            backend.spawn_action(droplet_id, action);
        }
        None => {}
    }
}
