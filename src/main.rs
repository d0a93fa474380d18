//! Y3K Programmer · terminal trivia trainer
//!
//! - Four timed mini-games with badges, one-shot character powers and a boss round
//! - Text front end (default) or JSON lines for driving it from another program
//! - Optional TOML config for timings, tones and defaults
//!
//! Important env variables:
//!   GAME_CONFIG_PATH : path to TOML config (timings, tones, default difficulty, rng seed)
//!   UI_FORMAT        : "text" (default) or "json"
//!   LOG_LEVEL        : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT       : "pretty" (default) or "json"

mod config;
mod content;
mod domain;
mod logic;
mod modes;
mod protocol;
mod seeds;
mod session;
mod shell;
mod telemetry;
mod timers;
mod tones;
mod util;

use tracing::info;

use crate::config::{load_game_config_from_env, UiFormat};
use crate::content::ContentStore;
use crate::session::Session;
use crate::tones::{Muted, TerminalBell, ToneEmitter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let config = load_game_config_from_env().unwrap_or_default();
  let format = UiFormat::from_env();

  let tones: Box<dyn ToneEmitter> = if config.tones.enabled {
    Box::new(TerminalBell::new(config.tones.bell))
  } else {
    Box::new(Muted)
  };

  let store = ContentStore::new();
  let session = Session::new(store, config, tones);
  info!(target: "y3k_trainer", ?format, session = %session.id(), "Starting");

  shell::run(session, format).await
}
