//! Droplet Dash TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input translation (`event/`)
//! - **Backend**: provider calls on a tokio runtime (`backend/`)
//!
//!
//! Startup:
//!
//!     Cli::parse()            // --config <path>, --login, --help, --version
//!     load config             // backend/config_service.rs
//!     init_logging()          // file log, never stdout while the TUI is up
//!     DropletService::new()   // provider client + runtime
//!     init_terminal()
//!     app::run()              // main loop in app.rs
//!     restore_terminal()      // always, even when run() failed

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use backend::{
    ConfigService, DropletService, JsonConfigService, KeyringTokenStore, TokenStore, resolve_token,
};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

const ENV_HELP: &str = "\
Environment:
  DIGITALOCEAN_TOKEN, DO_API_TOKEN   API token (overrides the config file)
  DROPLET_DASH_LOG                   Log filter, e.g. debug or droplet_dash_core=trace";

/// Terminal panel for DigitalOcean droplets.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "droplet-dash", version, about, long_about = None, after_help = ENV_HELP)]
struct Cli {
    /// Use an alternative config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Store an API token in the system keyring and exit
    #[arg(long)]
    login: bool,
}

fn login() -> Result<()> {
    print!("DigitalOcean API token: ");
    io::stdout().flush()?;
    let mut token = String::new();
    io::stdin().lock().read_line(&mut token)?;
    let token = token.trim();
    if token.is_empty() {
        bail!("no token entered");
    }
    KeyringTokenStore::new().set(token)?;
    println!("Token stored in the system keyring.");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.login {
        return login();
    }

    // 1. Configuration and logging (before the terminal switches to raw mode)
    let config_service = JsonConfigService::new(cli.config)?;
    let config = config_service.load()?;
    let log_path = init_logging()?;
    tracing::info!("Starting droplet-dash {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Config: {}", config_service.path().display());
    tracing::debug!("Log file: {}", log_path.display());

    let columns = config.columns()?;
    let token = resolve_token(&config, &KeyringTokenStore::new());

    // 2. Backend (tokio runtime + provider client)
    let (tx, rx) = std::sync::mpsc::channel();
    let backend = DropletService::new(token, config.per_page, tx)?;

    // 3. Terminal
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 4. Main loop
    view::theme::set_theme(config.theme);
    let mut app = model::App::new(config.title.clone(), columns);
    let result = app::run(&mut terminal, &mut app, &backend, &rx);

    // 5. Restore the terminal whatever run() returned
    restore_terminal(&mut terminal)?;
    tracing::info!("Exiting");

    result
}
