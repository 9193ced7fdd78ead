// src/cli/handlers.rs
use std::io::{self, Write};

use rand::Rng;
use thiserror::Error;

use crate::clipboard::Clipboard;
use crate::core::DisplayField;
use crate::generators::PasswordGenerator;
use crate::models::{Configuration, GeneratedPassword};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

// Handler for `generate`: prints one password, plain or JSON
pub fn handle_generate<R: Rng, W: Write>(
    out: &mut W,
    generator: &mut PasswordGenerator<R>,
    clipboard: &mut dyn Clipboard,
    config: &Configuration,
    copy: bool,
    json: bool,
) -> Result<GeneratedPassword> {
    let password = generator.generate_password(config);
    let mut generated = GeneratedPassword::new(password, config);

    if copy {
        let mut field = DisplayField::new("Password");
        field.set_text(&generated.password);
        match crate::clipboard::copy_to_clipboard(&mut field, clipboard, &generated.password) {
            Ok(()) => generated.copied = true,
            Err(e) => {
                if !json {
                    eprintln!("❌ Failed to copy to clipboard: {}", e);
                }
            }
        }
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &generated)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", generated.password)?;
        if generated.copied {
            eprintln!("📋 Copied to clipboard");
        }
    }

    Ok(generated)
}
