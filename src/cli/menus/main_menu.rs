use crate::cli::core::{CliError, LoopControl, MenuState};
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::menu_renderer::{MenuUI, MenuUIItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    Ledger,
    Calculator,
    Exit,
}

pub fn menu() -> MenuUI<MainAction> {
    MenuUI::new("Main menu")
        .item(MenuUIItem::new(MainAction::Ledger, "Money Spending Manager"))
        .item(MenuUIItem::new(MainAction::Calculator, "Scientific Calculator"))
        .item(MenuUIItem::new(MainAction::Exit, "Exit"))
}

pub fn handle(_context: &mut ShellContext, action: MainAction) -> Result<LoopControl, CliError> {
    Ok(match action {
        MainAction::Ledger => LoopControl::Goto(MenuState::Ledger),
        MainAction::Calculator => LoopControl::Goto(MenuState::Calculator),
        MainAction::Exit => {
            output::blank_line();
            output::info("Thank you for using AZEx! Bye!");
            LoopControl::Exit
        }
    })
}
