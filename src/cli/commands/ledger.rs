use tracing::error;

use crate::cli::core::{CliError, LoopControl};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::panel::{BorderStyle, Panel};

pub fn add_income(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let Some(amount) = forms::money(context.prompter(), "Enter income amount:")? else {
        return Ok(context.end_of_input());
    };
    if let Err(err) = context.ledger().check_income(amount) {
        context.report_error(err.into());
        return Ok(LoopControl::Continue);
    }
    let Some(description) = forms::text(context.prompter(), "Enter description:")? else {
        return Ok(context.end_of_input());
    };

    match context.ledger_mut().add_income(amount, description) {
        Ok(balance) => {
            output::success("Income added successfully!");
            output::info(format!("  New Balance: {}", context.money(balance)));
        }
        Err(err) => context.report_error(err.into()),
    }
    Ok(LoopControl::Continue)
}

/// The balance check happens before the description prompt.
pub fn add_expense(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let Some(amount) = forms::money(context.prompter(), "Enter expense amount:")? else {
        return Ok(context.end_of_input());
    };
    if let Err(err) = context.ledger().check_expense(amount) {
        context.report_error(err.into());
        return Ok(LoopControl::Continue);
    }
    let Some(description) = forms::text(context.prompter(), "Enter description:")? else {
        return Ok(context.end_of_input());
    };

    match context.ledger_mut().add_expense(amount, description) {
        Ok(balance) => {
            output::success("Expense recorded successfully!");
            output::info(format!("  Remaining Balance: {}", context.money(balance)));
        }
        Err(err) => context.report_error(err.into()),
    }
    Ok(LoopControl::Continue)
}

pub fn show_history(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let symbol = context.prefs.currency_symbol.clone();
    let style = BorderStyle::for_mode(BorderStyle::Double, context.prefs.plain_mode);
    match context.ledger().history() {
        Ok(lines) => {
            output::blank_line();
            output::block(Panel::new("TRANSACTION HISTORY").render(style));
            for line in lines {
                output::block(line.display_with(&symbol));
            }
        }
        Err(err) => context.report_error(err.into()),
    }
    Ok(LoopControl::Continue)
}

pub fn show_summary(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let summary = context.ledger().summary();
    if !summary.is_consistent() {
        error!(?summary, "balance disagrees with transaction totals");
    }
    let style = BorderStyle::for_mode(BorderStyle::Double, context.prefs.plain_mode);
    let panel = Panel::new("FINANCIAL SUMMARY")
        .line(format!("Total Income:    {}", context.money(summary.total_income)))
        .line(format!("Total Expense:   {}", context.money(summary.total_expense)))
        .line(format!("Current Balance: {}", context.money(summary.balance)))
        .line(format!("Transactions:    {}", summary.transaction_count));
    output::blank_line();
    output::block(panel.render(style));
    Ok(LoopControl::Continue)
}

pub fn reset(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let Some(confirmed) = context
        .prompter()
        .confirm("Are you sure you want to reset?")?
    else {
        return Ok(context.end_of_input());
    };
    if context.ledger_mut().reset(confirmed) {
        output::success("Balance reset successfully!");
    } else {
        output::info("Reset cancelled.");
    }
    Ok(LoopControl::Continue)
}
