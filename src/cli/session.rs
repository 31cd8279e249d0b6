//! The "run calculations" flow: collect entries, then sort, duplicate and average

use super::input::Console;
use crate::core::{average, sort_by_result, Calculation, CalculationKind};
use crate::error::{CalcError, CalcResult};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Ask for the number of calculations until an integer is given
///
/// Zero or a negative count requests no entries.
pub fn read_count<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CalcResult<usize> {
    loop {
        console.prompt("How many calculations do you want to perform? ")?;
        match console.input().next_integer() {
            Ok(count) => {
                debug!(count, "calculation count");
                return Ok(usize::try_from(count).unwrap_or(0));
            }
            Err(CalcError::MalformedInput { token, .. }) => {
                debug!(%token, "malformed calculation count");
                console.input().discard_line();
                console.line("Please enter an integer!".red())?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Read one entry: a selector, then the two inputs of the chosen formula
pub fn read_calculation<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    index: usize,
) -> CalcResult<Calculation> {
    console.line(format!(
        "Choose the calculation type for entry {}\n1 - Centripetal acceleration,\n2 - Circular velocity",
        index + 1
    ))?;
    let kind = CalculationKind::from_selector(console.input().next_integer()?)?;

    let [first_prompt, second_prompt] = kind.input_prompts();
    console.prompt(first_prompt)?;
    let first = console.input().next_number()?;
    console.prompt(second_prompt)?;
    let second = console.input().next_number()?;

    kind.build(first, second)
}

/// Read `count` entries, dropping any that fail to parse or validate
pub fn collect_calculations<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    count: usize,
) -> CalcResult<Vec<Calculation>> {
    let mut calculations = Vec::new();

    for index in 0..count {
        match read_calculation(console, index) {
            Ok(calculation) => {
                debug!(
                    entry = index + 1,
                    kind = ?calculation.kind(),
                    result = calculation.result(),
                    "entry accepted"
                );
                calculations.push(calculation);
            }
            Err(CalcError::MalformedInput { token, .. }) => {
                info!(entry = index + 1, %token, "entry dropped: malformed input");
                console.input().discard_line();
                console.line("Please enter a number!".red())?;
            }
            Err(CalcError::InvalidInput(reason)) => {
                info!(entry = index + 1, %reason, "entry dropped: invalid input");
                console.line(reason.red())?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(calculations)
}

/// Print the raw, sorted, duplicated and averaged views of the entries
pub fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut calculations: Vec<Calculation>,
) -> CalcResult<()> {
    if calculations.is_empty() {
        console.line("No valid data was entered, there is nothing to process!".yellow())?;
        return Ok(());
    }

    console.line(format!("\n{}", "Calculation results:".bold()))?;
    for calculation in &calculations {
        console.line(calculation)?;
    }

    sort_by_result(&mut calculations);
    console.line(format!("\n{}", "Results after sorting:".bold()))?;
    for calculation in &calculations {
        console.line(calculation)?;
    }

    let duplicate = calculations[0].duplicate();
    console.line(format!("\n{} {}", "Duplicated result:".bold(), duplicate))?;

    let mean = average(&calculations)?;
    debug!(entries = calculations.len(), mean, "average computed");
    console.line(format!("\n{} {}", "Average of results:".bold(), mean))?;

    Ok(())
}

/// Menu option 1
pub fn run_calculations<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CalcResult<()> {
    let count = read_count(console)?;
    let calculations = collect_calculations(console, count)?;
    info!(requested = count, valid = calculations.len(), "calculations collected");
    report(console, calculations)
}
