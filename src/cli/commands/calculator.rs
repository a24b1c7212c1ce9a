use crate::calculator::{compute, Arity, Operands, Operation};
use crate::cli::core::{CliError, LoopControl};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;

fn binary_prompts(operation: Operation) -> (&'static str, &'static str) {
    match operation {
        Operation::Divide => ("Enter numerator:", "Enter denominator:"),
        Operation::Power => ("Enter base:", "Enter exponent:"),
        _ => ("Enter first number:", "Enter second number:"),
    }
}

fn unary_prompt(operation: Operation) -> &'static str {
    match operation {
        Operation::Sine | Operation::Cosine | Operation::Tangent => "Enter angle in degrees:",
        _ => "Enter number:",
    }
}

/// Collects operands for `operation`; `None` when input ended.
fn read_operands(
    context: &mut ShellContext,
    operation: Operation,
) -> Result<Option<Operands>, CliError> {
    let prompter = context.prompter();
    let operands = match operation.arity() {
        Arity::Binary => {
            let (first, second) = binary_prompts(operation);
            let Some(a) = forms::number(prompter, first)? else {
                return Ok(None);
            };
            let Some(b) = forms::number(prompter, second)? else {
                return Ok(None);
            };
            Operands::Binary(a, b)
        }
        Arity::Unary => match forms::number(prompter, unary_prompt(operation))? {
            Some(a) => Operands::Unary(a),
            None => return Ok(None),
        },
        Arity::Integer => match forms::integer(prompter, "Enter a non-negative integer:")? {
            Some(n) => Operands::Integer(n),
            None => return Ok(None),
        },
    };
    Ok(Some(operands))
}

pub fn run_operation(
    context: &mut ShellContext,
    operation: Operation,
) -> Result<LoopControl, CliError> {
    let Some(operands) = read_operands(context, operation)? else {
        return Ok(context.end_of_input());
    };
    match compute(operation, operands) {
        Ok(calculation) => output::success(format!("Result: {calculation}")),
        Err(err) => context.report_error(err.into()),
    }
    Ok(LoopControl::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_name_the_operands() {
        assert_eq!(binary_prompts(Operation::Divide).1, "Enter denominator:");
        assert_eq!(binary_prompts(Operation::Add).0, "Enter first number:");
        assert_eq!(unary_prompt(Operation::Tangent), "Enter angle in degrees:");
        assert_eq!(unary_prompt(Operation::Log10), "Enter number:");
    }
}
