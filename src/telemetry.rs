//! Tracing setup for the trainer.
//!
//! Targets:
//! - `y3k_trainer`: startup, config loading, the shell loop and raw input
//! - `session`: screen changes, scoring, powers, badges
//! - `content`: the startup inventory of round tables
//! - `timers`: scheduler arming (debug)
//! - `tones`: every cue played (debug)
//!
//! LOG_LEVEL overrides the filter, e.g. "debug" or "info,timers=debug".
//! LOG_FORMAT=json switches to one JSON object per event.
//!
//! stdout belongs to the frames, so every event is written to stderr.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,session=debug";

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn json_requested() -> bool {
    matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"))
}

pub fn init_tracing() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if json_requested() {
        builder.json().init();
    } else {
        builder.init();
    }
}
