use anyhow::Result;
use std::process::ExitCode;

use budgetcalc::{logging, run};

fn main() -> Result<ExitCode> {
    logging::init();
    run::install_panic_hook("affordability");
    let args: Vec<String> = std::env::args().skip(1).collect();
    run::affordability(&args).emit()
}
