// Host program: evaluates `add` then `sub` on two operands and prints
// one line per result.

use std::io::Write;

use clap::Parser;
use mathbridge::cli::CliConfig;
use mathbridge::{logger, render, Calculation, Op};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    let (lhs, rhs) = config.operands();
    let backend = config.backend.arithmetic();
    let format = config.format();
    tracing::debug!(backend = ?config.backend, lhs, rhs, "evaluating");

    let mut stdout = std::io::stdout().lock();
    for op in [Op::Add, Op::Sub] {
        let calc = Calculation::run(backend, op, lhs, rhs);
        writeln!(stdout, "{}", render(&calc, format)?)?;
    }
    stdout.flush()?;

    Ok(())
}
