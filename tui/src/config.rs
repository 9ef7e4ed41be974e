use std::path::PathBuf;

use clap::Parser;
use roster_core::DEFAULT_BALANCE;

use crate::lang::Language;

/// CLI flags, each overridable from the environment.
#[derive(Parser, Debug)]
#[command(name = "roster", about = "Track players and their balances")]
pub struct Args {
    /// Display language for labels and alerts
    #[arg(long, env = "ROSTER_LANG", value_enum, default_value_t = Language::Fr)]
    pub lang: Language,

    /// Balance pre-filled in the add form
    #[arg(
        long,
        env = "ROSTER_DEFAULT_BALANCE",
        default_value_t = DEFAULT_BALANCE,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    pub default_balance: i64,

    /// Amount credited or debited by the + and - keys
    #[arg(
        long,
        env = "ROSTER_STEP",
        default_value_t = 10,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub step: i64,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long, env = "ROSTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
