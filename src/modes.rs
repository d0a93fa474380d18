//! Per-mode local state. A board is created when a mode starts, reset between
//! rounds where the mode needs it, and dropped when the player leaves the mode.

use std::collections::BTreeSet;

use crate::domain::GameMode;

/// Timed-quiz and scenario-quiz state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceBoard {
  /// Seconds left on the timed-quiz clock; unused by the scenario quiz.
  pub time_left: u32,
  /// Seconds left on the "continue?" prompt while it is open.
  pub continue_left: Option<u32>,
  /// Wrong option removed by the ERASE ability for this round.
  pub erased: Option<&'static str>,
}

/// Countdown state for the letter wheel. The countdown is kept in tenths of a
/// second so the 0.1 s decay stays exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TapBoard {
  used: BTreeSet<char>,
  last: Option<char>,
  tenths_left: u32,
  full_tenths: u32,
  running: bool,
  failed: bool,
  /// Category index shown instead of the round's own after "randomize topic".
  pub topic_override: Option<usize>,
}

/// What a single 100 ms tick did to the tap countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapTickOutcome {
  Idle,
  Running,
  /// Whole second at or below 3.0; the shell plays a tick.
  Warning,
  /// Reached 0.0; the round is flagged failed.
  Expired,
}

impl TapBoard {
  pub const LETTERS: std::ops::RangeInclusive<char> = 'A'..='Z';

  pub fn new(seconds: u32) -> Self {
    let full_tenths = seconds.saturating_mul(10);
    Self {
      used: BTreeSet::new(),
      last: None,
      tenths_left: full_tenths,
      full_tenths,
      running: false,
      failed: false,
      topic_override: None,
    }
  }

  pub fn used(&self) -> &BTreeSet<char> {
    &self.used
  }

  pub fn last_letter(&self) -> Option<char> {
    self.last
  }

  pub fn seconds_left(&self) -> f32 {
    self.tenths_left as f32 / 10.0
  }

  #[cfg(test)]
  pub fn tenths_left(&self) -> u32 {
    self.tenths_left
  }

  pub fn is_running(&self) -> bool {
    self.running
  }

  pub fn is_failed(&self) -> bool {
    self.failed
  }

  /// Claim `letter`. Returns false, leaving the board untouched, when the
  /// letter is not A-Z or was already used this round.
  pub fn tap(&mut self, letter: char) -> bool {
    let letter = letter.to_ascii_uppercase();
    if !Self::LETTERS.contains(&letter) || self.used.contains(&letter) {
      return false;
    }
    self.used.insert(letter);
    self.last = Some(letter);
    self.restart();
    true
  }

  /// The central button: start when idle, restart after a failure. Returns
  /// whether the countdown was (re)started.
  pub fn press_center(&mut self) -> bool {
    if self.failed {
      self.restart();
      true
    } else if !self.running {
      self.running = true;
      true
    } else {
      false
    }
  }

  pub fn add_seconds(&mut self, seconds: u32) {
    self.tenths_left = self.tenths_left.saturating_add(seconds.saturating_mul(10));
  }

  pub fn tick(&mut self) -> TapTickOutcome {
    if !self.running {
      return TapTickOutcome::Idle;
    }
    self.tenths_left = self.tenths_left.saturating_sub(1);
    if self.tenths_left == 0 {
      self.running = false;
      self.failed = true;
      TapTickOutcome::Expired
    } else if self.tenths_left % 10 == 0 && self.tenths_left <= 30 {
      TapTickOutcome::Warning
    } else {
      TapTickOutcome::Running
    }
  }

  /// Clear letters and countdown for the next category.
  pub fn reset(&mut self) {
    *self = Self::new(self.full_tenths / 10);
  }

  fn restart(&mut self) {
    self.tenths_left = self.full_tenths;
    self.running = true;
    self.failed = false;
  }
}

/// Bug-repair state: what the player has chosen to look at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepairBoard {
  pub hint_visible: bool,
  pub analysis_visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Board {
  Choice(ChoiceBoard),
  Tap(TapBoard),
  Repair(RepairBoard),
}

impl Board {
  pub fn for_mode(mode: GameMode, round_seconds: u32, tap_seconds: u32) -> Self {
    match mode {
      GameMode::TimedQuiz => Board::Choice(ChoiceBoard { time_left: round_seconds, ..ChoiceBoard::default() }),
      GameMode::ScenarioQuiz => Board::Choice(ChoiceBoard::default()),
      GameMode::EliminationTap => Board::Tap(TapBoard::new(tap_seconds)),
      GameMode::BugRepair => Board::Repair(RepairBoard::default()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn repeated_letter_is_ignored() {
    let mut b = TapBoard::new(10);
    assert!(b.tap('A'));
    assert!(b.tap('b'));
    for _ in 0..25 {
      b.tick();
    }
    let before = b.clone();
    assert!(!b.tap('A'));
    assert_eq!(b, before);
    assert_eq!(b.used().iter().collect::<String>(), "AB");
  }

  #[test]
  fn non_letters_are_ignored() {
    let mut b = TapBoard::new(10);
    assert!(!b.tap('7'));
    assert!(!b.tap('é'));
    assert!(b.used().is_empty());
    assert!(!b.is_running());
  }

  #[test]
  fn countdown_expires_after_a_hundred_ticks() {
    let mut b = TapBoard::new(10);
    assert_eq!(b.tick(), TapTickOutcome::Idle);
    assert!(b.press_center());
    let mut warnings = 0;
    for _ in 0..99 {
      match b.tick() {
        TapTickOutcome::Warning => warnings += 1,
        TapTickOutcome::Running => {}
        other => panic!("unexpected {other:?}"),
      }
    }
    // 3.0, 2.0 and 1.0
    assert_eq!(warnings, 3);
    assert_eq!(b.tick(), TapTickOutcome::Expired);
    assert!(b.is_failed());
    assert!(!b.is_running());
    assert_eq!(b.seconds_left(), 0.0);
    assert_eq!(b.tick(), TapTickOutcome::Idle);
  }

  #[test]
  fn center_button_restarts_after_failure_only() {
    let mut b = TapBoard::new(1);
    assert!(b.press_center());
    assert!(!b.press_center(), "already running");
    for _ in 0..10 {
      b.tick();
    }
    assert!(b.is_failed());
    assert!(b.press_center());
    assert!(!b.is_failed());
    assert_eq!(b.tenths_left(), 10);
  }

  #[test]
  fn tapping_resets_the_countdown() {
    let mut b = TapBoard::new(10);
    b.tap('Q');
    for _ in 0..40 {
      b.tick();
    }
    assert_eq!(b.tenths_left(), 60);
    b.tap('R');
    assert_eq!(b.tenths_left(), 100);
    assert_eq!(b.last_letter(), Some('R'));
  }

  #[test]
  fn reset_clears_letters_and_keeps_the_duration() {
    let mut b = TapBoard::new(10);
    b.tap('A');
    b.topic_override = Some(3);
    b.reset();
    assert!(b.used().is_empty());
    assert_eq!(b.topic_override, None);
    assert_eq!(b.tenths_left(), 100);
  }
}
