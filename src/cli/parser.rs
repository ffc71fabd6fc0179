// src/cli/parser.rs
use std::path::PathBuf;

use clap::Parser;

/// Boot image assembler
///
/// Takes exactly three positional paths and nothing else: every word,
/// including ones starting with `-`, is a path.
#[derive(Parser, Debug)]
#[command(
    name = "bootimg",
    about = "Assemble a bootable disk image from a bootstrap binary and a payload",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Disk image to create (overwritten if it exists)
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Raw bootstrap (boot sector) binary
    #[arg(value_name = "BOOTSTRAP", allow_hyphen_values = true)]
    pub bootstrap: PathBuf,

    /// Payload executable loaded by the bootstrap
    #[arg(value_name = "PAYLOAD", allow_hyphen_values = true)]
    pub payload: PathBuf,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }
}
