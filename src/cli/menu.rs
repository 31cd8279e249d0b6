//! Top-level interactive menu

use super::input::Console;
use super::session::run_calculations;
use crate::error::{CalcError, CalcResult};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const GREETING: &str = "Hello, young physicist!";

pub const MENU_TEXT: &str = "
Enter 1 to run calculations
Enter 2 to read about the program
Enter 3 to read about the author
Enter 4 to exit the program
";

pub const PROGRAM_DESCRIPTION: &str = "This program calculates centripetal acceleration (a = V²/R) \
or circular velocity (V = 2πR/T) to three decimal places, then sorts the results, \
duplicates the smallest one and averages them all.";

pub const GOODBYE: &str = "Goodbye!";

/// One of the four menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RunCalculations,
    ProgramInfo,
    AuthorInfo,
    Exit,
}

impl MenuChoice {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(MenuChoice::RunCalculations),
            2 => Some(MenuChoice::ProgramInfo),
            3 => Some(MenuChoice::AuthorInfo),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn author_description() -> String {
    format!(
        "{} {}\nConsole kinematics calculator, written as a study of closed formula families.",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Run the menu loop until the user exits or input ends
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CalcResult<()> {
    console.line(GREETING.bold().green())?;
    console.line(MENU_TEXT)?;

    loop {
        console.prompt("To continue, enter a number from 1 to 4: ")?;
        let code = match console.input().next_integer() {
            Ok(code) => code,
            Err(CalcError::MalformedInput { token, .. }) => {
                debug!(%token, "malformed menu choice");
                console.input().discard_line();
                console.line("Please enter an integer!".red())?;
                continue;
            }
            Err(CalcError::EndOfInput) => break,
            Err(e) => return Err(e),
        };

        let Some(choice) = MenuChoice::from_code(code) else {
            console.line("The value must be between 1 and 4!".red())?;
            continue;
        };
        info!(?choice, "menu selection");

        match choice {
            MenuChoice::RunCalculations => match run_calculations(console) {
                Ok(()) => {}
                Err(CalcError::EndOfInput) => break,
                Err(e) => return Err(e),
            },
            MenuChoice::ProgramInfo => console.line(PROGRAM_DESCRIPTION)?,
            MenuChoice::AuthorInfo => console.line(author_description())?,
            MenuChoice::Exit => break,
        }
        console.line(MENU_TEXT)?;
    }

    // Input may have closed mid-prompt
    console.line(format!("\n{}", GOODBYE.bold()))?;
    Ok(())
}
