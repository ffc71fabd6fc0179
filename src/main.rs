//! Boot image assembler entry point

use anyhow::Context;
use colored::*;

fn main() {
    if let Err(e) = bootimg::cli::run().context("image assembly aborted") {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
