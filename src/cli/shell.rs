use std::io::{self, IsTerminal};

use tracing::{debug, info};

use crate::config::Config;

use super::core::{CliError, CliMode, CommandError, LoopControl, MenuState};
use super::forms;
use super::io::{InteractivePrompter, Prompter, ScriptPrompter};
use super::menus::{calculator_menu, ledger_menu, main_menu};
use super::output::{self, OutputPreferences};
use super::shell_context::ShellContext;
use super::ui::banner::Banner;
use super::ui::menu_renderer::MenuUI;

type Handler<K> = fn(&mut ShellContext, K) -> Result<LoopControl, CliError>;

pub fn run_cli() -> Result<(), CliError> {
    let config = Config::load()?;
    output::set_preferences(OutputPreferences::from(&config));

    let mode = if config.script_mode || !io::stdin().is_terminal() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    let prompter: Box<dyn Prompter> = match mode {
        CliMode::Interactive => Box::new(InteractivePrompter::new(config.plain_mode)?),
        CliMode::Script => Box::new(ScriptPrompter::stdin()),
    };
    info!(?mode, "starting shell");

    let mut context = ShellContext::new(config, prompter);
    context.run()
}

impl ShellContext {
    /// Runs the menu loop until Exit is chosen or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        if self.config.show_banner {
            output::block(Banner::text(&self.prefs));
        }

        loop {
            let control = match self.state {
                MenuState::Main => self.step(&main_menu::menu(), main_menu::handle)?,
                MenuState::Ledger => {
                    let menu = ledger_menu::menu(self);
                    self.step(&menu, ledger_menu::handle)?
                }
                MenuState::Calculator => {
                    self.step(&calculator_menu::menu(), calculator_menu::handle)?
                }
            };

            match control {
                LoopControl::Continue => {}
                LoopControl::Goto(next) => {
                    debug!(from = ?self.state, to = ?next, "menu transition");
                    self.state = next;
                }
                LoopControl::Exit => break,
            }
        }
        info!("shell finished");
        Ok(())
    }

    /// Renders `menu`, reads one selection and dispatches it.
    fn step<K>(&mut self, menu: &MenuUI<K>, handle: Handler<K>) -> Result<LoopControl, CliError>
    where
        K: Copy + std::fmt::Debug,
    {
        output::blank_line();
        output::block(menu.render(&self.prefs));

        let Some(choice) = forms::menu_choice(self.prompter())? else {
            return Ok(self.end_of_input());
        };
        let selected = usize::try_from(choice)
            .ok()
            .and_then(|number| menu.select(number));
        match selected {
            Some(action) => {
                debug!(?action, "dispatching");
                handle(self, action)
            }
            None => {
                self.report_error(CommandError::InvalidMenuChoice(choice.to_string()));
                Ok(LoopControl::Continue)
            }
        }
    }
}
