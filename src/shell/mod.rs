//! Terminal front ends and the event loop that drives the session.
//!
//! One loop multiplexes stdin lines, a 100 ms ticker and Ctrl-C. Each event
//! is applied to the session to completion before the next is taken, so the
//! session never needs a lock. A frame is written only when it differs from
//! the last one written.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, instrument};

use crate::config::UiFormat;
use crate::domain::Effect;
use crate::protocol::{to_view, ClientCommand, ScreenView};
use crate::session::Session;
use crate::util::trunc_for_log;

pub mod json;
pub mod text;

const TICK: Duration = Duration::from_millis(100);

/// A way of turning frames into bytes and input lines into commands.
pub trait Frontend {
  /// Parse one input line in the context of the frame currently on screen.
  fn parse(&self, view: &ScreenView, line: &str) -> Result<ClientCommand, String>;
  fn frame(&self, view: &ScreenView) -> String;
  fn error(&self, message: &str) -> String;
  fn effect(&self, effect: &Effect) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Quit,
}

/// Apply one command to the session.
pub fn dispatch(session: &mut Session, cmd: ClientCommand) -> Flow {
  match cmd {
    ClientCommand::Begin => session.begin(),
    ClientCommand::HowToPlay => session.open_how_to_play(),
    ClientCommand::CloseHowToPlay => session.close_how_to_play(),
    ClientCommand::SelectCharacter { id } => {
      if let Some(character) = session.store().character(&id) {
        session.select_character(character);
      }
    }
    ClientCommand::BackToCharacters => session.back_to_characters(),
    ClientCommand::SelectDifficulty { difficulty } => session.select_difficulty(difficulty),
    ClientCommand::StartMode { mode } => session.start_mode(mode),
    ClientCommand::ActivatePower => session.activate_power(),
    ClientCommand::SubmitAnswer { answer } => session.submit_answer(&answer),
    ClientCommand::ResolveContinue { accept } => session.resolve_continue(accept),
    ClientCommand::Tap { letter } => session.tap(letter),
    ClientCommand::PressCenter => session.press_center(),
    ClientCommand::NextCategory => session.next_category(),
    ClientCommand::RandomizeTopic => session.randomize_topic(),
    ClientCommand::ToggleHint => session.toggle_hint(),
    ClientCommand::RevealAnalysis => session.reveal_analysis(),
    ClientCommand::ApplyFix => session.apply_fix(),
    ClientCommand::Home => session.go_home(),
    ClientCommand::EnterBossRound => session.enter_boss_round(),
    ClientCommand::FinishBossRound => session.finish_boss_round(),
    ClientCommand::Reset => session.reset(),
    ClientCommand::Quit => return Flow::Quit,
  }
  Flow::Continue
}

pub async fn run(session: Session, format: UiFormat) -> Result<(), Box<dyn std::error::Error>> {
  match format {
    UiFormat::Text => run_with(session, &text::TextFrontend::default()).await,
    UiFormat::Json => run_with(session, &json::JsonFrontend).await,
  }
}

#[instrument(level = "info", skip_all, fields(session = %session.id()))]
async fn run_with<F: Frontend>(mut session: Session, frontend: &F) -> Result<(), Box<dyn std::error::Error>> {
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  let mut stdout = tokio::io::stdout();

  let mut ticker = tokio::time::interval(TICK);
  ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
  let mut last_tick = Instant::now();

  let mut view = to_view(&session);
  let mut last_frame = frontend.frame(&view);
  stdout.write_all(last_frame.as_bytes()).await?;
  stdout.flush().await?;
  info!(target: "y3k_trainer", "Shell started");

  loop {
    let mut out = String::new();
    tokio::select! {
      line = lines.next_line() => {
        let Some(line) = line? else {
          info!(target: "y3k_trainer", "stdin closed");
          break;
        };
        debug!(target: "y3k_trainer", input = %trunc_for_log(&line, 80), "input");
        match frontend.parse(&view, &line) {
          Ok(cmd) => {
            if dispatch(&mut session, cmd) == Flow::Quit {
              info!(target: "y3k_trainer", "Quit requested");
              break;
            }
          }
          Err(message) => out.push_str(&frontend.error(&message)),
        }
      }
      _ = ticker.tick() => {
        let now = Instant::now();
        session.advance_clock(now - last_tick);
        last_tick = now;
      }
      _ = tokio::signal::ctrl_c() => {
        info!(target: "y3k_trainer", "Ctrl-C received, shutting down");
        break;
      }
    }

    for effect in session.drain_effects() {
      out.push_str(&frontend.effect(&effect));
    }
    view = to_view(&session);
    let frame = frontend.frame(&view);
    if frame != last_frame {
      stdout.write_all(frame.as_bytes()).await?;
      last_frame = frame;
    }
    if !out.is_empty() {
      stdout.write_all(out.as_bytes()).await?;
    }
    stdout.flush().await?;
  }

  info!(target: "y3k_trainer", score = session.score(), badges = session.badges().len(), "Shell stopped");
  Ok(())
}
