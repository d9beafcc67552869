mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod store;
mod utils;

use clap::Parser;

use crate::app::{CommandContext, handle_command};
use crate::cli::Cli;
use crate::config::Config;
use crate::core::MonthNames;
use crate::error::AppError;
use crate::store::{HabitStore, resolve_db_path};
use crate::utils::{Timezone, debug_log, parse_date, set_debug};

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let names = MonthNames::from_locale(cli.locale.as_deref())?;
    let today = match cli.today.as_deref() {
        Some(s) => parse_date(s)?,
        None => timezone.today(),
    };

    let db_path = resolve_db_path(cli.db.as_deref(), config.database.as_deref())
        .ok_or(AppError::NoDataDir)?;
    let store = HabitStore::open(&db_path)?;
    debug_log(format!("Today is {today}"));

    let ctx = CommandContext {
        cli,
        store: &store,
        timezone,
        today,
        names,
    };
    handle_command(&ctx)
}

fn main() {
    let cli = Cli::parse();

    // Load config file and merge with CLI args; keep stderr quiet for JSON
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = run(&cli, &config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
