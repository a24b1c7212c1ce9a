use crate::calculator::Operation;
use crate::cli::commands::calculator as commands;
use crate::cli::core::{CliError, LoopControl, MenuState};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::menu_renderer::{MenuUI, MenuUIItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorAction {
    Compute(Operation),
    Back,
}

fn operation_item(operation: Operation) -> MenuUIItem<CalculatorAction> {
    MenuUIItem::new(CalculatorAction::Compute(operation), operation.label())
        .with_hint(operation.symbol())
}

pub fn menu() -> MenuUI<CalculatorAction> {
    let mut menu = MenuUI::new("Scientific calculator");
    for (index, operation) in Operation::ALL.into_iter().enumerate() {
        menu = match index {
            0 => menu.section("Basic operations"),
            4 => menu.section("Advanced operations"),
            8 => menu.section("Trigonometric functions"),
            11 => menu.section("Other"),
            _ => menu,
        };
        menu = menu.item(operation_item(operation));
    }
    menu.item(MenuUIItem::new(CalculatorAction::Back, "Back to Main Menu"))
}

pub fn handle(
    context: &mut ShellContext,
    action: CalculatorAction,
) -> Result<LoopControl, CliError> {
    match action {
        CalculatorAction::Compute(operation) => commands::run_operation(context, operation),
        CalculatorAction::Back => Ok(LoopControl::Goto(MenuState::Main)),
    }
}
