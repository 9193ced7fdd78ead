// src/cli/menu.rs
use console::{style, Term};
use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, Select, Text};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::handlers::Result;
use crate::clipboard::{self, Clipboard, SystemClipboard};
use crate::core::{DisplayField, FormState};
use crate::models::{Configuration, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::utils::{checkbox, pad_to_width, slider_bar};

const PLACEHOLDER: &str = "Password";
const MIN_FIELD_WIDTH: usize = 32;
const SLIDER_WIDTH: usize = 20;

// Entries of the form menu, labelled with the current control values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Copy,
    Length(usize),
    Numbers(bool),
    Characters(bool),
    Exit,
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormAction::Copy => write!(f, "📋  Copy"),
            FormAction::Length(length) => write!(f, "📏  Length: {}", length),
            FormAction::Numbers(on) => write!(f, "{} Numbers", checkbox(*on)),
            FormAction::Characters(on) => write!(f, "{} Characters", checkbox(*on)),
            FormAction::Exit => write!(f, "❌  Exit"),
        }
    }
}

pub fn form_actions(config: &Configuration) -> Vec<FormAction> {
    vec![
        FormAction::Copy,
        FormAction::Length(config.length),
        FormAction::Numbers(config.digits_allowed),
        FormAction::Characters(config.symbols_allowed),
        FormAction::Exit,
    ]
}

/// A user input after any follow-up prompt has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    SetLength(usize),
    ToggleNumbers,
    ToggleCharacters,
    Copy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Copied,
    CopyFailed(String),
}

// Applies one input to the form. Only Copy produces a notice.
pub fn handle_event(
    event: FormEvent,
    state: &mut FormState,
    field: &mut DisplayField,
    clipboard: &mut dyn Clipboard,
) -> Option<Notice> {
    match event {
        FormEvent::SetLength(length) => {
            state.set_length(length);
        }
        FormEvent::ToggleNumbers => {
            state.toggle_digits();
        }
        FormEvent::ToggleCharacters => {
            state.toggle_symbols();
        }
        FormEvent::Copy => {
            return Some(match clipboard::copy_to_clipboard(field, clipboard, state.password()) {
                Ok(()) => Notice::Copied,
                Err(e) => Notice::CopyFailed(e.to_string()),
            });
        }
    }

    field.set_text(state.password());
    None
}

pub fn render_form(state: &FormState, field: &DisplayField, notice: Option<&Notice>) -> String {
    let config = state.config();
    let width = field.text().chars().count().max(MIN_FIELD_WIDTH);

    let text = if field.text().is_empty() {
        style(pad_to_width(field.placeholder(), width)).dim().to_string()
    } else if let Some(selected) = field.selected_text() {
        style(pad_to_width(selected, width)).reverse().to_string()
    } else {
        pad_to_width(field.text(), width)
    };

    let mut lines = vec![
        style("Password Generator").yellow().bold().to_string(),
        format!("┌{}┐", "─".repeat(width + 2)),
        format!("│ {} │ {}", text, style("[ Copy ]").blue().bold()),
        format!("└{}┘", "─".repeat(width + 2)),
        format!(
            "{} Length: {}   {} Numbers   {} Characters",
            slider_bar(config.length, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, SLIDER_WIDTH),
            config.length,
            checkbox(config.digits_allowed),
            checkbox(config.symbols_allowed),
        ),
    ];

    match notice {
        Some(Notice::Copied) => lines.push(style("✅ Copied to clipboard").green().to_string()),
        Some(Notice::CopyFailed(e)) => lines.push(style(format!("❌ Failed to copy: {}", e)).red().to_string()),
        None => {}
    }

    lines.join("\n")
}

fn validate_length(input: &str) -> std::result::Result<Validation, CustomUserError> {
    match input.trim().parse::<usize>() {
        Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => Ok(Validation::Valid),
        _ => Ok(Validation::Invalid(
            format!("Enter a number from {} to {}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH).into(),
        )),
    }
}

// Slider prompt. `None` when the user backs out with Esc.
fn prompt_length(current: usize) -> Result<Option<usize>> {
    let default = current.to_string();
    let help = format!("{}-{}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);

    let answer = Text::new("Password length:")
        .with_default(&default)
        .with_help_message(&help)
        .with_validator(validate_length)
        .prompt_skippable()?;

    match answer {
        Some(s) => {
            let length = s
                .trim()
                .parse()
                .map_err(|_| InquireError::Custom("Invalid number".into()))?;
            Ok(Some(length))
        }
        None => Ok(None),
    }
}

// Runs until Exit, Esc, Ctrl+C or `should_exit` is raised. Returns the
// number of regenerations, mount included.
pub fn run_form(initial: Configuration, should_exit: Arc<AtomicBool>) -> Result<u64> {
    let term = Term::stdout();
    let mut state = FormState::new(initial);
    let mut field = DisplayField::new(PLACEHOLDER);
    field.set_text(state.password());

    let mut clipboard = SystemClipboard::new();
    let mut notice: Option<Notice> = None;
    let mut cursor = 0;

    while !should_exit.load(Ordering::SeqCst) {
        term.clear_screen()?;
        term.write_line(&render_form(&state, &field, notice.as_ref()))?;
        term.write_line("")?;

        let actions = form_actions(state.config());
        let selection = Select::new("Choose an option:", actions.clone())
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .with_starting_cursor(cursor)
            .prompt_skippable();

        let action = match selection {
            Ok(Some(action)) => action,
            Ok(None) | Err(InquireError::OperationInterrupted) | Err(InquireError::OperationCanceled) => break,
            Err(e) => return Err(e.into()),
        };
        cursor = actions.iter().position(|a| *a == action).unwrap_or(0);

        let event = match action {
            FormAction::Exit => break,
            FormAction::Copy => FormEvent::Copy,
            FormAction::Numbers(_) => FormEvent::ToggleNumbers,
            FormAction::Characters(_) => FormEvent::ToggleCharacters,
            FormAction::Length(current) => match prompt_length(current)? {
                Some(length) => FormEvent::SetLength(length),
                None => continue,
            },
        };

        notice = handle_event(event, &mut state, &mut field, &mut clipboard);
    }

    log::info!("Form closed after {} regenerations", state.regenerations());
    println!("👋 Goodbye!");
    Ok(state.regenerations())
}
