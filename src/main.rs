use clap::Parser;
use kinematic_calc::cli::{self, Console};

#[derive(Parser)]
#[command(name = "kinematic-calc")]
#[command(version)]
#[command(about = "Interactive calculator for centripetal acceleration and circular velocity")]
#[command(long_about = "kinematic-calc - uniform circular motion calculator

Reads calculation requests from standard input through a numbered menu:
  1 - run calculations (count, then a type and two inputs per entry)
  2 - show the program description
  3 - show the author description
  4 - exit

FORMULAS:
  Centripetal acceleration  a = V² / R   (R > 0)
  Circular velocity         V = 2πR / T  (T > 0)

Valid results are printed as entered, sorted, with the smallest one
duplicated, and averaged. Set RUST_LOG=kinematic_calc=debug for diagnostics
on stderr.")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    cli::init_logging();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    cli::run(&mut console)?;
    Ok(())
}
