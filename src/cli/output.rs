use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
    Prompt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
    pub color: bool,
    pub currency_symbol: String,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            plain_mode: config.plain_mode,
            high_contrast_mode: config.high_contrast_mode,
            color: config.color && !config.plain_mode,
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    if !prefs.color {
        colored::control::set_override(false);
    }
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| guard.clone())
        .unwrap_or_default()
}

fn decorate(kind: MessageKind, text: &str, prefs: &OutputPreferences) -> String {
    let (icon, plain_label) = match kind {
        MessageKind::Success => ("✔", "OK:"),
        MessageKind::Error => ("✖", "ERROR:"),
        MessageKind::Prompt => ("›", ">"),
        MessageKind::Info => return text.to_string(),
    };
    if prefs.plain_mode {
        format!("{plain_label} {text}")
    } else {
        format!("{icon} {text}")
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let formatted = decorate(kind, &message.to_string(), prefs);

    if !prefs.color {
        return formatted;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info | MessageKind::Prompt => formatted,
            _ => formatted.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Prompt => formatted.bright_cyan().to_string(),
        MessageKind::Info => formatted,
    }
}

fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    println!("{}", apply_style(kind, message, &prefs));
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn prompt(message: impl fmt::Display) {
    print(MessageKind::Prompt, message);
}

/// Prints a pre-rendered block (panels, history lines) verbatim.
pub fn block(text: impl fmt::Display) {
    println!("{text}");
}

pub fn blank_line() {
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputPreferences {
        OutputPreferences {
            plain_mode: true,
            high_contrast_mode: false,
            color: false,
            currency_symbol: "$".into(),
        }
    }

    #[test]
    fn plain_mode_uses_text_labels() {
        let prefs = plain();
        assert_eq!(apply_style(MessageKind::Error, "Boom", &prefs), "ERROR: Boom");
        assert_eq!(apply_style(MessageKind::Success, "Done", &prefs), "OK: Done");
        assert_eq!(apply_style(MessageKind::Info, "Note", &prefs), "Note");
        assert_eq!(apply_style(MessageKind::Prompt, "Amount:", &prefs), "> Amount:");
    }

    #[test]
    fn icons_without_colour_keep_text_intact() {
        let prefs = OutputPreferences {
            plain_mode: false,
            color: false,
            ..plain()
        };
        assert_eq!(apply_style(MessageKind::Error, "Careful", &prefs), "✖ Careful");
    }

    #[test]
    fn preferences_follow_config() {
        let config = Config {
            plain_mode: true,
            currency_symbol: "€".into(),
            ..Config::default()
        };
        let prefs = OutputPreferences::from(&config);
        assert!(prefs.plain_mode);
        assert!(!prefs.color);
        assert_eq!(prefs.currency_symbol, "€");
    }
}
