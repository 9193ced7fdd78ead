use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod clipboard;
mod core;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::clipboard::SystemClipboard;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config)?;
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let initial = args.configuration(&config);

    match args.command.clone().unwrap_or_default() {
        CliCommand::Generate { copy } => {
            let mut generator = PasswordGenerator::new();
            let mut clipboard = SystemClipboard::new();
            let stdout = io::stdout();
            cli::handlers::handle_generate(
                &mut stdout.lock(),
                &mut generator,
                &mut clipboard,
                &initial,
                copy,
                args.json,
            )?;
        }
        CliCommand::Form => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, closing form");
                    should_exit.store(true, Ordering::SeqCst);
                })?;
            }

            log::info!("🔐 Opening password form with {:?}", initial);
            cli::menu::run_form(initial, should_exit)?;
        }
    }

    Ok(())
}
