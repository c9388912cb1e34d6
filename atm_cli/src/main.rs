//! The "ATM CLI" app's entry point.

use atm_cli::logic::run_session;
use atm_cli::DEFAULT_LOG_FILTER;
use atm_common::{AtmConfig, LineSource};
use std::env;
use std::io::{stdin, stdout};
use std::process;

/// The "ATM CLI" app's entry point.
fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", DEFAULT_LOG_FILTER);
    }
    pretty_env_logger::init();

    let config = AtmConfig::default();
    let mut input = LineSource::new(stdin().lock());
    let mut out = stdout().lock();

    if let Err(err) = run_session(&config, &mut input, &mut out) {
        log::debug!("Session ended without a transaction: {}", err);
        process::exit(1);
    }
}
