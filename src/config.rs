//! Loading game configuration (timings, tones, defaults) from TOML, and the
//! front-end selection from the environment.
//!
//! Every field is optional; a missing or broken file means defaults.

use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Difficulty;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct GameConfig {
  #[serde(default)]
  pub timing: Timing,
  #[serde(default)]
  pub tones: ToneConfig,
  /// Tier preselected on the difficulty screen.
  #[serde(default)]
  pub default_difficulty: Difficulty,
  /// Fixes the random choices (erased option, random topic) for replays.
  #[serde(default)]
  pub rng_seed: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Timing {
  /// How long an answer banner stays up.
  pub feedback_ms: u64,
  /// Delay between a correct answer and the next round.
  pub advance_delay_ms: u64,
  /// Timed-quiz seconds per question.
  pub round_seconds: u32,
  /// Seconds to accept the "continue?" prompt.
  pub continue_seconds: u32,
  /// Elimination-tap seconds per letter.
  pub tap_seconds: u32,
}

impl Default for Timing {
  fn default() -> Self {
    Self {
      feedback_ms: 1500,
      advance_delay_ms: 1500,
      round_seconds: 10,
      continue_seconds: 9,
      tap_seconds: 10,
    }
  }
}

impl Timing {
  pub fn feedback(&self) -> Duration {
    Duration::from_millis(self.feedback_ms)
  }

  pub fn advance_delay(&self) -> Duration {
    Duration::from_millis(self.advance_delay_ms)
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
  pub enabled: bool,
  /// Ring the terminal bell on results.
  pub bell: bool,
}

impl Default for ToneConfig {
  fn default() -> Self {
    Self { enabled: true, bell: true }
  }
}

/// Which front end drives the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiFormat {
  #[default]
  Text,
  Json,
}

impl UiFormat {
  pub fn from_env() -> Self {
    match std::env::var("UI_FORMAT").as_deref() {
      Ok("json") => UiFormat::Json,
      _ => UiFormat::Text,
    }
  }
}

pub fn parse_game_config(s: &str) -> Result<GameConfig, toml::de::Error> {
  toml::from_str::<GameConfig>(s)
}

/// Attempt to load `GameConfig` from GAME_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_game_config_from_env() -> Option<GameConfig> {
  let path = std::env::var("GAME_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_game_config(&s) {
      Ok(cfg) => {
        info!(target: "y3k_trainer", %path, "Loaded game config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "y3k_trainer", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "y3k_trainer", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
