use crate::cli::commands::ledger as commands;
use crate::cli::core::{CliError, LoopControl, MenuState};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::menu_renderer::{MenuUI, MenuUIItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerAction {
    AddIncome,
    AddExpense,
    History,
    Summary,
    Reset,
    Back,
}

/// The header carries the current balance.
pub fn menu(context: &ShellContext) -> MenuUI<LedgerAction> {
    MenuUI::new("Money spending manager")
        .with_context(format!(
            "Current Balance: {}",
            context.money(context.ledger().balance())
        ))
        .item(MenuUIItem::new(LedgerAction::AddIncome, "Add Income"))
        .item(MenuUIItem::new(LedgerAction::AddExpense, "Add Expense"))
        .item(MenuUIItem::new(LedgerAction::History, "View Transaction History"))
        .item(MenuUIItem::new(LedgerAction::Summary, "View Summary"))
        .item(MenuUIItem::new(LedgerAction::Reset, "Reset Balance"))
        .item(MenuUIItem::new(LedgerAction::Back, "Back to Main Menu"))
}

pub fn handle(context: &mut ShellContext, action: LedgerAction) -> Result<LoopControl, CliError> {
    match action {
        LedgerAction::AddIncome => commands::add_income(context),
        LedgerAction::AddExpense => commands::add_expense(context),
        LedgerAction::History => commands::show_history(context),
        LedgerAction::Summary => commands::show_summary(context),
        LedgerAction::Reset => commands::reset(context),
        LedgerAction::Back => Ok(LoopControl::Goto(MenuState::Main)),
    }
}
