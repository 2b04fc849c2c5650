// File: maint-ticket/src/cli.rs
use clap::Parser;

use crate::constants::{env, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(name = "maint-ticket")]
#[command(about = "File the monthly maintenance window ticket")]
pub struct Cli {
    /// Build and print the ticket without submitting it
    #[arg(short, long, env = env::NOOP)]
    pub noop: bool,

    /// Path to the optional TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}
