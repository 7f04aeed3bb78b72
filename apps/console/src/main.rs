use std::{cell::RefCell, path::PathBuf, rc::Rc};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use filmstrip::bridge::{LayoutBridge, UnmountedLayoutBridge};
use filmstrip::FilmstripSyncMiddleware;
use shared::domain::HostKind;
use store::Store;

mod config;
mod scenario;

#[derive(Parser, Debug)]
struct Cli {
    /// Host flavor to emulate: desktop or mobile. Overrides console.toml
    /// and environment settings.
    #[arg(long)]
    host: Option<String>,
    /// Scenario file to replay: JSON with an optional initial state and a
    /// list of actions.
    #[arg(long)]
    scenario: PathBuf,
    /// Log filter override, e.g. "debug" or "filmstrip=trace".
    #[arg(long)]
    log: Option<String>,
}

/// Layout component owned by this host: remembers whether the filmstrip is
/// hidden and reports every toggle.
#[derive(Default)]
struct TerminalLayoutBridge {
    hidden: RefCell<bool>,
}

impl LayoutBridge for TerminalLayoutBridge {
    fn is_mounted(&self) -> bool {
        true
    }

    fn toggle_filmstrip(&self, hidden: bool) {
        *self.hidden.borrow_mut() = hidden;
        info!(hidden, "layout: filmstrip toggled");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = config::load_settings();
    if let Some(raw) = &cli.host {
        settings.host =
            config::parse_host(raw).with_context(|| format!("unknown host flavor '{raw}'"))?;
    }
    if let Some(log) = cli.log {
        settings.log_filter = log;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scenario = scenario::load_scenario(&cli.scenario)?;

    let bridge: Rc<dyn LayoutBridge> = match settings.host {
        HostKind::Desktop => Rc::new(TerminalLayoutBridge::default()),
        HostKind::Mobile => Rc::new(UnmountedLayoutBridge),
    };

    let store = Store::with_middleware(
        scenario.initial,
        vec![Box::new(FilmstripSyncMiddleware::new(
            settings.host,
            Rc::clone(&bridge),
        ))],
    );

    info!(host = ?settings.host, actions = scenario.actions.len(), "replaying scenario");
    for action in scenario.actions {
        store.dispatch(action);
    }

    let snapshot = store.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("serialize final snapshot")?
    );

    Ok(())
}
