//! Line input backends.
//!
//! Interactive sessions read through a `rustyline` editor and confirm with a
//! `dialoguer` prompt. Script sessions read one stdin line per prompt so the
//! binary can be driven by piped input.

use std::io::{self, BufRead, Write};

use dialoguer::{
    theme::{ColorfulTheme, SimpleTheme, Theme},
    Confirm,
};
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::debug;

use super::core::CliError;
use super::output;

/// Source of user answers. `Ok(None)` means input has ended.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError>;
}

pub struct InteractivePrompter {
    editor: DefaultEditor,
    theme: Box<dyn Theme>,
}

impl InteractivePrompter {
    pub fn new(plain_mode: bool) -> Result<Self, CliError> {
        let theme: Box<dyn Theme> = if plain_mode {
            Box::new(SimpleTheme)
        } else {
            Box::new(ColorfulTheme::default())
        };
        Ok(Self {
            editor: DefaultEditor::new()?,
            theme,
        })
    }

    fn confirm_exit(&self) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(self.theme.as_ref())
            .with_prompt("Exit AZEx?")
            .default(false)
            .interact()?)
    }
}

impl Prompter for InteractivePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        loop {
            match self.editor.readline(&format!("{prompt} ")) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str()).ok();
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    if self.confirm_exit()? {
                        return Ok(None);
                    }
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError> {
        let answer = Confirm::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .default(false)
            .interact_opt()?;
        // Esc or `q` counts as "no".
        Ok(Some(answer.unwrap_or(false)))
    }
}

/// Reads answers line by line from any buffered reader.
pub struct ScriptPrompter<R> {
    reader: R,
    echo_prompts: bool,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: true,
        }
    }

    /// Keep prompts off stdout (used by in-process tests).
    pub fn quiet(mut self) -> Self {
        self.echo_prompts = false;
        self
    }

    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        if self.echo_prompts {
            output::prompt(prompt);
            io::stdout().flush()?;
        }
        let mut buffer = Vec::new();
        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            debug!(prompt, "script input exhausted");
            return Ok(None);
        }
        // Invalid UTF-8 is replaced so the caller's parser rejects it and asks again.
        let line = String::from_utf8_lossy(&buffer);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl ScriptPrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        self.next_line(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError> {
        Ok(self
            .next_line(&format!("{prompt} (y/n)"))?
            .map(|answer| is_yes(&answer)))
    }
}

/// Only an answer starting with `y`/`Y` confirms.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y' | 'Y'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_prompter_reads_lines_until_eof() {
        let mut prompter = ScriptPrompter::new(Cursor::new("1\r\nhello world\n")).quiet();
        assert_eq!(prompter.read_line("a").unwrap().as_deref(), Some("1"));
        assert_eq!(
            prompter.read_line("b").unwrap().as_deref(),
            Some("hello world")
        );
        assert_eq!(prompter.read_line("c").unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_read_as_a_line() {
        let mut prompter = ScriptPrompter::new(Cursor::new(b"\xff\xfe7\n8\n".to_vec())).quiet();
        assert_eq!(
            prompter.read_line("a").unwrap().as_deref(),
            Some("\u{FFFD}\u{FFFD}7")
        );
        assert_eq!(prompter.read_line("b").unwrap().as_deref(), Some("8"));
    }

    #[test]
    fn confirmation_accepts_only_yes() {
        let mut prompter = ScriptPrompter::new(Cursor::new("y\nYes\nn\n\nmaybe\n")).quiet();
        let answers: Vec<Option<bool>> = (0..6)
            .map(|_| prompter.confirm("Sure?").unwrap())
            .collect();
        assert_eq!(
            answers,
            vec![Some(true), Some(true), Some(false), Some(false), Some(false), None]
        );
    }

    #[test]
    fn is_yes_looks_at_first_character() {
        assert!(is_yes("y"));
        assert!(is_yes("  Y please"));
        assert!(!is_yes("no"));
        assert!(!is_yes(""));
    }
}
