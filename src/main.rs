use anyhow::Result;
use std::process::ExitCode;

use budgetcalc::{logging, run};

fn main() -> Result<ExitCode> {
    logging::init();
    run::install_panic_hook("budgetcalc");
    let args: Vec<String> = std::env::args().collect();
    run::as_cli(&args)
}
