//! Typed prompts built on a [`Prompter`]. Malformed answers are reported as
//! `InvalidInput` and asked again; `Ok(None)` always means input ended.

use std::str::FromStr;

use tracing::debug;

use crate::currency::{parse_money, Money};

use super::core::{CliError, CommandError};
use super::io::Prompter;
use super::output;

/// Asks `prompt` until `parse` accepts the answer.
pub fn ask<T, F>(
    prompter: &mut dyn Prompter,
    prompt: &str,
    parse: F,
) -> Result<Option<T>, CliError>
where
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let Some(line) = prompter.read_line(prompt)? else {
            return Ok(None);
        };
        match parse(line.trim()) {
            Ok(value) => return Ok(Some(value)),
            Err(reason) => {
                debug!(prompt, input = %line, "rejected input");
                output::error(CommandError::InvalidInput(reason));
            }
        }
    }
}

fn parse_number<T: FromStr>(input: &str, expected: &str) -> Result<T, String> {
    if input.is_empty() {
        return Err(format!("please enter {expected}"));
    }
    input
        .parse()
        .map_err(|_| format!("`{input}` is not {expected}"))
}

/// Menu selections are parsed as integers only; range checks belong to the menu.
pub fn menu_choice(prompter: &mut dyn Prompter) -> Result<Option<i64>, CliError> {
    ask(prompter, "Enter your choice:", |input| {
        parse_number(input, "a menu number")
    })
}

pub fn number(prompter: &mut dyn Prompter, prompt: &str) -> Result<Option<f64>, CliError> {
    ask(prompter, prompt, |input| parse_number(input, "a number"))
}

pub fn integer(prompter: &mut dyn Prompter, prompt: &str) -> Result<Option<i64>, CliError> {
    ask(prompter, prompt, |input| parse_number(input, "a whole number"))
}

pub fn money(prompter: &mut dyn Prompter, prompt: &str) -> Result<Option<Money>, CliError> {
    ask(prompter, prompt, |input| {
        parse_money(input).map_err(|err| err.to_string())
    })
}

/// Free text; any line (including an empty one) is accepted.
pub fn text(prompter: &mut dyn Prompter, prompt: &str) -> Result<Option<String>, CliError> {
    Ok(prompter
        .read_line(prompt)?
        .map(|line| line.trim().to_string()))
}
