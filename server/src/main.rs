// server/src/main.rs

// Entry point of the clinic front desk shell. Argument parsing, config and
// logging setup all happen inside the cli module.

use anyhow::Result;
use clinic_server::cli::start_cli;

fn main() -> Result<()> {
    start_cli()
}
