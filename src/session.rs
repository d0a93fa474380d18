//! The game session: one explicit state struct owned by a single controller.
//!
//! This module owns:
//!   - screen routing (intro → character → difficulty → menu ⇄ playing → boss → results)
//!   - the active mode's round cursor, game-over flag and board
//!   - score, badges and completed modes
//!   - the one-shot character power
//!   - every countdown, as entries in a virtual-clock `Scheduler`
//!
//! Every mutation goes through a named operation below. An operation called in
//! a state where it makes no sense is a silent no-op: nothing changes, nothing
//! is logged, nothing is returned.

use std::collections::BTreeSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::content::ContentStore;
use crate::domain::{Character, Difficulty, Effect, Feedback, GameMode, Screen};
use crate::logic::{evaluate_answer, on_activate, reward_for};
use crate::modes::{Board, ChoiceBoard, RepairBoard, TapTickOutcome};
use crate::timers::{Scheduler, TimerKind};
use crate::tones::{Tone, ToneEmitter};

const ONE_SECOND: Duration = Duration::from_secs(1);
const TAP_TICK: Duration = Duration::from_millis(100);

/// One attempt at a mode. Dropped on `go_home` or the next `start_mode`.
#[derive(Clone, Debug)]
pub struct Play {
  pub mode: GameMode,
  pub cursor: usize,
  /// Set when the mode is completed or the quiz clock ran out.
  pub game_over: bool,
  /// Every round of this attempt was cleared.
  pub finished: bool,
  /// A correct answer was accepted and the move to the next round is pending.
  pub advancing: bool,
  pub board: Board,
}

impl Play {
  /// The current round no longer accepts answers.
  pub fn is_finalized(&self) -> bool {
    self.game_over || self.advancing
  }
}

pub struct Session {
  id: Uuid,
  screen: Screen,
  character: Option<&'static Character>,
  difficulty: Difficulty,
  score: u32,
  badges: BTreeSet<GameMode>,
  completed: BTreeSet<GameMode>,
  power_active: bool,
  power_consumed: bool,
  play: Option<Play>,
  feedback: Option<Feedback>,
  effects: Vec<Effect>,
  scheduler: Scheduler,
  store: ContentStore,
  config: GameConfig,
  rng: StdRng,
  tones: Box<dyn ToneEmitter>,
}

impl Session {
  pub fn new(store: ContentStore, config: GameConfig, tones: Box<dyn ToneEmitter>) -> Self {
    let rng = match config.rng_seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    let session = Self {
      id: Uuid::new_v4(),
      screen: Screen::Intro,
      character: None,
      difficulty: config.default_difficulty,
      score: 0,
      badges: BTreeSet::new(),
      completed: BTreeSet::new(),
      power_active: false,
      power_consumed: false,
      play: None,
      feedback: None,
      effects: Vec::new(),
      scheduler: Scheduler::default(),
      store,
      config,
      rng,
      tones,
    };
    info!(target: "session", id = %session.id, "Session created");
    session
  }

  // ----- accessors -----

  pub fn id(&self) -> Uuid {
    self.id
  }
  pub fn screen(&self) -> Screen {
    self.screen
  }
  pub fn character(&self) -> Option<&'static Character> {
    self.character
  }
  pub fn difficulty(&self) -> Difficulty {
    self.difficulty
  }
  pub fn score(&self) -> u32 {
    self.score
  }
  pub fn badges(&self) -> &BTreeSet<GameMode> {
    &self.badges
  }
  pub fn completed_modes(&self) -> &BTreeSet<GameMode> {
    &self.completed
  }
  pub fn power_active(&self) -> bool {
    self.power_active
  }
  pub fn power_consumed(&self) -> bool {
    self.power_consumed
  }
  pub fn selected_mode(&self) -> Option<GameMode> {
    self.play.as_ref().map(|p| p.mode)
  }
  pub fn play(&self) -> Option<&Play> {
    self.play.as_ref()
  }
  pub fn feedback(&self) -> Option<&Feedback> {
    self.feedback.as_ref()
  }
  pub fn store(&self) -> &ContentStore {
    &self.store
  }
  pub fn boss_unlocked(&self) -> bool {
    GameMode::ALL.iter().all(|m| self.completed.contains(m))
  }

  /// Number of rounds in the active mode for the chosen tier.
  pub fn round_count(&self) -> usize {
    self
      .selected_mode()
      .map(|m| self.store.item_count(m, self.difficulty))
      .unwrap_or(0)
  }

  /// Hand pending cosmetic effects to the shell.
  pub fn drain_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.effects)
  }

  // ----- screen routing -----

  pub fn begin(&mut self) {
    if self.screen == Screen::Intro {
      self.go_to(Screen::CharacterSelect);
    }
  }

  pub fn open_how_to_play(&mut self) {
    if self.screen == Screen::Intro {
      self.go_to(Screen::HowToPlay);
    }
  }

  pub fn close_how_to_play(&mut self) {
    if self.screen == Screen::HowToPlay {
      self.go_to(Screen::Intro);
    }
  }

  #[instrument(level = "info", skip_all, fields(session = %self.id, character = character.id))]
  pub fn select_character(&mut self, character: &'static Character) {
    if self.screen != Screen::CharacterSelect {
      return;
    }
    self.character = Some(character);
    self.go_to(Screen::DifficultySelect);
  }

  pub fn back_to_characters(&mut self) {
    if self.screen == Screen::DifficultySelect {
      self.go_to(Screen::CharacterSelect);
    }
  }

  #[instrument(level = "info", skip(self), fields(session = %self.id))]
  pub fn select_difficulty(&mut self, difficulty: Difficulty) {
    if self.screen != Screen::DifficultySelect {
      return;
    }
    self.difficulty = difficulty;
    self.go_to(Screen::Menu);
  }

  #[instrument(level = "info", skip(self), fields(session = %self.id))]
  pub fn start_mode(&mut self, mode: GameMode) {
    if self.screen != Screen::Menu {
      return;
    }
    self.scheduler.disarm_all();
    let timing = &self.config.timing;
    self.play = Some(Play {
      mode,
      cursor: 0,
      game_over: false,
      finished: false,
      advancing: false,
      board: Board::for_mode(mode, timing.round_seconds, timing.tap_seconds),
    });
    self.power_active = false;
    self.power_consumed = false;
    self.feedback = None;
    if mode == GameMode::TimedQuiz {
      self.scheduler.arm(TimerKind::RoundTick, ONE_SECOND);
    }
    info!(target: "session", ?mode, tier = ?self.difficulty, rounds = self.round_count(), "Mode started");
    self.go_to(Screen::Playing);
  }

  /// Abandon the current attempt and return to the menu. Nothing is awarded.
  #[instrument(level = "info", skip(self), fields(session = %self.id))]
  pub fn go_home(&mut self) {
    if self.screen != Screen::Playing {
      return;
    }
    self.scheduler.disarm_all();
    if let Some(play) = self.play.take() {
      info!(target: "session", mode = ?play.mode, round = play.cursor, finished = play.finished, "Left mode");
    }
    self.feedback = None;
    self.go_to(Screen::Menu);
  }

  pub fn enter_boss_round(&mut self) {
    if self.screen == Screen::Menu && self.boss_unlocked() {
      info!(target: "session", score = self.score, "Boss round unlocked and entered");
      self.go_to(Screen::BossRound);
    }
  }

  pub fn finish_boss_round(&mut self) {
    if self.screen == Screen::BossRound {
      info!(target: "session", score = self.score, badges = self.badges.len(), "Debrief");
      self.go_to(Screen::Results);
    }
  }

  /// Full reboot: every field back to its start-of-app default.
  pub fn reset(&mut self) {
    self.scheduler.disarm_all();
    self.id = Uuid::new_v4();
    self.screen = Screen::Intro;
    self.character = None;
    self.difficulty = self.config.default_difficulty;
    self.score = 0;
    self.badges.clear();
    self.completed.clear();
    self.power_active = false;
    self.power_consumed = false;
    self.play = None;
    self.feedback = None;
    self.effects.clear();
    self.tones.play(Tone::Click);
    info!(target: "session", id = %self.id, "Session reset");
  }

  fn go_to(&mut self, screen: Screen) {
    info!(target: "session", from = ?self.screen, to = ?screen, "screen");
    self.screen = screen;
    self.tones.play(Tone::Click);
  }

  // ----- power -----

  /// One-shot character power. TIME and ERASE act now; MULTIPLIER waits for
  /// the next reward.
  #[instrument(level = "info", skip(self), fields(session = %self.id))]
  pub fn activate_power(&mut self) {
    if self.power_consumed {
      return;
    }
    let Some(character) = self.character else { return };
    let Some(play) = self.play.as_mut() else { return };
    if play.is_finalized() {
      return;
    }
    self.power_consumed = true;
    self.power_active = true;
    self.tones.play(Tone::Success);
    let kind = character.ability.kind;
    let applied = on_activate(kind, &mut play.board, &self.store, play.mode, self.difficulty, play.cursor, &mut self.rng);
    info!(target: "session", ability = ?kind, applied_now = applied, "Power activated");
  }

  // ----- answers and rounds -----

  /// Check `candidate` against the current round. Ignored once the round is
  /// finalized, for rounds without an expected value, and for an option the
  /// ERASE power struck out.
  #[instrument(level = "debug", skip_all, fields(session = %self.id))]
  pub fn submit_answer(&mut self, candidate: &str) {
    let Some(play) = self.play.as_ref() else { return };
    if play.is_finalized() {
      return;
    }
    if let Board::Choice(ChoiceBoard { erased: Some(erased), .. }) = &play.board {
      if *erased == candidate {
        return;
      }
    }
    let Some(correct) = evaluate_answer(&self.store, play.mode, self.difficulty, play.cursor, candidate) else {
      return;
    };
    if correct {
      self.accept_round(true);
    } else {
      info!(target: "session", mode = ?play.mode, round = play.cursor, "Incorrect answer");
      self.feedback = Some(Feedback::failure());
      self.tones.play(Tone::Fail);
      self.scheduler.arm(TimerKind::ClearFeedback, self.config.timing.feedback());
    }
  }

  /// Award the round. `delayed` schedules the move to the next round after
  /// the feedback delay; otherwise it happens now.
  fn accept_round(&mut self, delayed: bool) {
    let ability = self.character.map(|c| c.ability.kind);
    let Some(play) = self.play.as_mut() else { return };
    let reward = reward_for(play.mode, ability, self.power_active);
    self.score += reward;
    self.power_active = false;
    self.tones.play(Tone::Success);
    info!(target: "session", mode = ?play.mode, round = play.cursor, reward, score = self.score, "Round cleared");

    if delayed {
      play.advancing = true;
      self.feedback = Some(Feedback::success(reward));
      self.scheduler.disarm(TimerKind::RoundTick);
      self.scheduler.disarm(TimerKind::ClearFeedback);
      self.scheduler.arm(TimerKind::Advance, self.config.timing.advance_delay());
    } else {
      self.advance_round();
      self.feedback = Some(Feedback::success(reward));
      self.scheduler.arm(TimerKind::ClearFeedback, self.config.timing.feedback());
    }
  }

  /// Next round, or completion after the last one. Per-round board state and
  /// the round timer start over.
  pub fn advance_round(&mut self) {
    let count = self.round_count();
    let Some(play) = self.play.as_mut() else { return };
    if play.game_over {
      return;
    }
    play.advancing = false;
    self.feedback = None;
    self.scheduler.disarm(TimerKind::ClearFeedback);
    if play.cursor + 1 >= count {
      let mode = play.mode;
      self.complete_mode(mode);
      return;
    }
    play.cursor += 1;
    let timing = &self.config.timing;
    match &mut play.board {
      Board::Choice(b) => {
        let time_left = if play.mode == GameMode::TimedQuiz { timing.round_seconds } else { 0 };
        *b = ChoiceBoard { time_left, ..ChoiceBoard::default() };
      }
      Board::Tap(t) => t.reset(),
      Board::Repair(r) => *r = RepairBoard::default(),
    }
    self.scheduler.disarm(TimerKind::TapTick);
    if play.mode == GameMode::TimedQuiz {
      self.scheduler.arm(TimerKind::RoundTick, ONE_SECOND);
    }
  }

  /// Record the mode as completed (once) and end the attempt.
  #[instrument(level = "info", skip(self), fields(session = %self.id))]
  pub fn complete_mode(&mut self, mode: GameMode) {
    if self.completed.insert(mode) {
      self.badges.insert(mode);
      self.effects.push(Effect::Celebrate { mode });
      info!(target: "session", ?mode, badge = mode.badge(), "Badge earned");
    }
    if let Some(play) = self.play.as_mut() {
      play.game_over = true;
      play.finished = true;
      play.advancing = false;
    }
    self.scheduler.disarm(TimerKind::RoundTick);
    self.scheduler.disarm(TimerKind::TapTick);
    self.scheduler.disarm(TimerKind::Advance);
  }

  // ----- timed quiz: continue prompt -----

  /// Answer the "continue?" prompt. Declining returns to the menu without
  /// the badge.
  #[instrument(level = "info", skip(self), fields(session = %self.id))]
  pub fn resolve_continue(&mut self, accept: bool) {
    let round_seconds = self.config.timing.round_seconds;
    let Some(play) = self.play.as_mut() else { return };
    let Board::Choice(board) = &mut play.board else { return };
    if board.continue_left.is_none() {
      return;
    }
    self.scheduler.disarm(TimerKind::ContinueTick);
    board.continue_left = None;
    if accept {
      play.game_over = false;
      board.time_left = round_seconds;
      self.scheduler.arm(TimerKind::RoundTick, ONE_SECOND);
      self.tones.play(Tone::Success);
      info!(target: "session", round = play.cursor, "Continued after time-out");
    } else {
      info!(target: "session", round = play.cursor, "Declined to continue");
      self.go_home();
    }
  }

  // ----- elimination tap -----

  pub fn tap(&mut self, letter: char) {
    let Some(Play { board: Board::Tap(board), game_over: false, .. }) = self.play.as_mut() else { return };
    if board.tap(letter) {
      self.tones.play(Tone::Click);
      self.scheduler.arm(TimerKind::TapTick, TAP_TICK);
    }
  }

  pub fn press_center(&mut self) {
    let Some(Play { board: Board::Tap(board), game_over: false, .. }) = self.play.as_mut() else { return };
    if board.press_center() {
      self.tones.play(Tone::Click);
      self.scheduler.arm(TimerKind::TapTick, TAP_TICK);
    }
  }

  /// Manual end of a tap round. Awarded whether or not the countdown failed.
  pub fn next_category(&mut self) {
    if matches!(&self.play, Some(Play { board: Board::Tap(_), game_over: false, .. })) {
      self.accept_round(false);
    }
  }

  /// Swap the displayed category for a random one of the same tier.
  pub fn randomize_topic(&mut self) {
    let count = self.store.tap_rounds(self.difficulty).len();
    let Some(Play { board: Board::Tap(board), game_over: false, .. }) = self.play.as_mut() else { return };
    if count == 0 {
      return;
    }
    board.topic_override = Some(self.rng.gen_range(0..count));
    self.tones.play(Tone::Click);
  }

  // ----- bug repair -----

  pub fn toggle_hint(&mut self) {
    if let Some(Play { board: Board::Repair(board), game_over: false, .. }) = self.play.as_mut() {
      board.hint_visible = !board.hint_visible;
      self.tones.play(Tone::Click);
    }
  }

  pub fn reveal_analysis(&mut self) {
    if let Some(Play { board: Board::Repair(board), game_over: false, .. }) = self.play.as_mut() {
      if !board.analysis_visible {
        board.analysis_visible = true;
        self.tones.play(Tone::Click);
      }
    }
  }

  /// Submit the round's fix. Only available once the analysis is revealed.
  pub fn apply_fix(&mut self) {
    let Some(play) = self.play.as_ref() else { return };
    let Board::Repair(RepairBoard { analysis_visible: true, .. }) = play.board else { return };
    let Some(fix) = self.store.expected_answer(play.mode, self.difficulty, play.cursor) else { return };
    self.submit_answer(fix);
  }

  // ----- clock -----

  /// Move the session clock forward by `dt`, firing every timer that falls
  /// due, in order. Handlers may re-arm and those entries fire too if they
  /// land inside the same window.
  pub fn advance_clock(&mut self, dt: Duration) {
    let target = self.scheduler.now() + dt;
    while let Some(kind) = self.scheduler.pop_due(target) {
      self.on_timer(kind);
    }
    self.scheduler.settle(target);
  }

  fn on_timer(&mut self, kind: TimerKind) {
    match kind {
      TimerKind::RoundTick => self.on_round_tick(),
      TimerKind::ContinueTick => self.on_continue_tick(),
      TimerKind::TapTick => self.on_tap_tick(),
      TimerKind::ClearFeedback => self.feedback = None,
      TimerKind::Advance => {
        if self.play.as_ref().is_some_and(|p| p.advancing) {
          self.advance_round();
        }
      }
    }
  }

  fn on_round_tick(&mut self) {
    let continue_seconds = self.config.timing.continue_seconds;
    let Some(play) = self.play.as_mut() else { return };
    if play.mode != GameMode::TimedQuiz || play.is_finalized() {
      return;
    }
    let Board::Choice(board) = &mut play.board else { return };
    board.time_left = board.time_left.saturating_sub(1);
    if board.time_left > 0 {
      self.scheduler.arm(TimerKind::RoundTick, ONE_SECOND);
      return;
    }
    play.game_over = true;
    board.continue_left = Some(continue_seconds);
    self.tones.play(Tone::Fail);
    self.scheduler.arm(TimerKind::ContinueTick, ONE_SECOND);
    info!(target: "session", round = play.cursor, "Time expired; continue prompt open");
  }

  fn on_continue_tick(&mut self) {
    let Some(Play { board: Board::Choice(board), .. }) = self.play.as_mut() else { return };
    let Some(left) = board.continue_left else { return };
    let left = left.saturating_sub(1);
    if left == 0 {
      self.resolve_continue(false);
    } else {
      board.continue_left = Some(left);
      self.scheduler.arm(TimerKind::ContinueTick, ONE_SECOND);
    }
  }

  fn on_tap_tick(&mut self) {
    let Some(Play { board: Board::Tap(board), game_over: false, .. }) = self.play.as_mut() else { return };
    match board.tick() {
      TapTickOutcome::Idle => {}
      TapTickOutcome::Running => self.scheduler.arm(TimerKind::TapTick, TAP_TICK),
      TapTickOutcome::Warning => {
        self.tones.play(Tone::Tick);
        self.scheduler.arm(TimerKind::TapTick, TAP_TICK);
      }
      TapTickOutcome::Expired => {
        self.tones.play(Tone::Fail);
        info!(target: "session", "Tap countdown ran out");
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::FeedbackKind;
  use crate::tones::testing::Recorder;

  const ADVANCE: Duration = Duration::from_millis(1500);

  fn session() -> (Session, Recorder) {
    let tones = Recorder::default();
    let config = GameConfig { rng_seed: Some(11), ..GameConfig::default() };
    (Session::new(ContentStore, config, Box::new(tones.clone())), tones)
  }

  fn at_menu(character: &str, tier: Difficulty) -> (Session, Recorder) {
    let (mut s, tones) = session();
    s.begin();
    let c = s.store().character(character).expect("known character");
    s.select_character(c);
    s.select_difficulty(tier);
    assert_eq!(s.screen(), Screen::Menu);
    (s, tones)
  }

  fn expected(s: &Session) -> &'static str {
    let play = s.play().expect("playing");
    s.store().expected_answer(play.mode, s.difficulty(), play.cursor).expect("has answer")
  }

  fn wrong(s: &Session) -> &'static str {
    let play = s.play().expect("playing");
    let right = expected(s);
    s.store()
      .option_values(play.mode, s.difficulty(), play.cursor)
      .into_iter()
      .find(|v| *v != right)
      .expect("a wrong option")
  }

  fn answer_right(s: &mut Session) {
    let a = expected(s);
    s.submit_answer(a);
    s.advance_clock(ADVANCE);
  }

  fn time_left(s: &Session) -> u32 {
    match &s.play().expect("playing").board {
      Board::Choice(b) => b.time_left,
      other => panic!("not a choice board: {other:?}"),
    }
  }

  fn continue_left(s: &Session) -> Option<u32> {
    match &s.play().expect("playing").board {
      Board::Choice(b) => b.continue_left,
      other => panic!("not a choice board: {other:?}"),
    }
  }

  #[test]
  fn screens_follow_the_intro_flow() {
    let (mut s, _) = session();
    assert_eq!(s.screen(), Screen::Intro);
    s.open_how_to_play();
    assert_eq!(s.screen(), Screen::HowToPlay);
    s.begin();
    assert_eq!(s.screen(), Screen::HowToPlay, "begin only works from the intro");
    s.close_how_to_play();
    s.begin();
    assert_eq!(s.screen(), Screen::CharacterSelect);

    s.select_difficulty(Difficulty::Hard);
    assert_eq!(s.screen(), Screen::CharacterSelect, "difficulty needs a character first");

    let sine = s.store().character("sine").expect("sine");
    s.select_character(sine);
    assert_eq!(s.screen(), Screen::DifficultySelect);
    s.back_to_characters();
    assert_eq!(s.screen(), Screen::CharacterSelect);
    s.select_character(sine);
    s.select_difficulty(Difficulty::Hard);
    assert_eq!(s.screen(), Screen::Menu);
    assert_eq!(s.difficulty(), Difficulty::Hard);
    assert_eq!(s.character().map(|c| c.id), Some("sine"));
  }

  #[test]
  fn score_is_ten_per_correct_quiz_answer() {
    let (mut s, _) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    for _ in 0..4 {
      answer_right(&mut s);
    }
    assert_eq!(s.score(), 40);
    assert_eq!(s.play().map(|p| p.cursor), Some(4));
  }

  #[test]
  fn multiplier_doubles_exactly_one_answer() {
    let (mut s, _) = at_menu("tangent", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    answer_right(&mut s);
    s.activate_power();
    assert!(s.power_active());
    answer_right(&mut s);
    assert!(!s.power_active());
    assert!(s.power_consumed());
    answer_right(&mut s);
    // 10 * (3 - 1) + 20
    assert_eq!(s.score(), 40);
  }

  #[test]
  fn wrong_answer_does_not_consume_the_multiplier() {
    let (mut s, _) = at_menu("tangent", Difficulty::Hard);
    s.start_mode(GameMode::ScenarioQuiz);
    s.activate_power();
    let w = wrong(&s);
    s.submit_answer(w);
    assert!(s.power_active());
    assert_eq!(s.score(), 0);
    answer_right(&mut s);
    assert_eq!(s.score(), 20);
  }

  #[test]
  fn activating_twice_equals_once() {
    let (mut s, tones) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    s.activate_power();
    let after_first = (s.power_active(), s.power_consumed(), time_left(&s), tones.played().len());
    s.activate_power();
    let after_second = (s.power_active(), s.power_consumed(), time_left(&s), tones.played().len());
    assert_eq!(after_first, after_second);
    assert_eq!(time_left(&s), 15);
  }

  #[test]
  fn power_needs_a_mode_in_play() {
    let (mut s, _) = at_menu("sine", Difficulty::Easy);
    s.activate_power();
    assert!(!s.power_consumed());
  }

  #[test]
  fn quiz_clock_runs_out_into_the_continue_prompt() {
    let (mut s, tones) = at_menu("cosine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    assert_eq!(time_left(&s), 10);
    for _ in 0..9 {
      s.advance_clock(ONE_SECOND);
    }
    assert_eq!(time_left(&s), 1);
    assert!(!s.play().is_some_and(|p| p.game_over));
    s.advance_clock(ONE_SECOND);
    assert_eq!(time_left(&s), 0);
    assert!(s.play().is_some_and(|p| p.game_over));
    assert_eq!(continue_left(&s), Some(9));
    assert_eq!(tones.played().last(), Some(&Tone::Fail));

    let a = expected(&s);
    s.submit_answer(a);
    assert_eq!(s.score(), 0, "answers are ignored after game over");
  }

  #[test]
  fn accepting_continue_restarts_the_round_clock() {
    let (mut s, _) = at_menu("cosine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    s.advance_clock(Duration::from_secs(10));
    s.advance_clock(Duration::from_secs(3));
    assert_eq!(continue_left(&s), Some(6));
    s.resolve_continue(true);
    assert_eq!(continue_left(&s), None);
    assert_eq!(time_left(&s), 10);
    assert!(!s.play().is_some_and(|p| p.game_over));
    s.advance_clock(Duration::from_secs(2));
    assert_eq!(time_left(&s), 8);
    answer_right(&mut s);
    assert_eq!(s.score(), 10);
  }

  #[test]
  fn continue_prompt_times_out_to_the_menu_without_a_badge() {
    let (mut s, _) = at_menu("cosine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    s.advance_clock(Duration::from_secs(10));
    s.advance_clock(Duration::from_secs(8));
    assert_eq!(s.screen(), Screen::Playing);
    s.advance_clock(ONE_SECOND);
    assert_eq!(s.screen(), Screen::Menu);
    assert!(s.play().is_none());
    assert!(s.completed_modes().is_empty());
    assert!(s.badges().is_empty());
  }

  #[test]
  fn declining_continue_returns_home() {
    let (mut s, _) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    s.advance_clock(Duration::from_secs(10));
    s.resolve_continue(false);
    assert_eq!(s.screen(), Screen::Menu);
    assert!(s.badges().is_empty());
  }

  #[test]
  fn scenario_wrong_then_right() {
    let (mut s, tones) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::ScenarioQuiz);
    assert_eq!(expected(&s), "B");

    s.submit_answer("A");
    assert_eq!(s.feedback().map(|f| f.kind), Some(FeedbackKind::Failure));
    assert_eq!(s.score(), 0);
    assert_eq!(tones.played().last(), Some(&Tone::Fail));
    s.advance_clock(ADVANCE);
    assert!(s.feedback().is_none(), "failure banner expires");

    s.submit_answer("B");
    assert_eq!(s.feedback().map(|f| f.message.as_str()), Some("CORRECT! +10 PTS"));
    assert_eq!(s.score(), 10);
    assert_eq!(s.play().map(|p| p.cursor), Some(0), "advance waits for the delay");
    s.submit_answer("B");
    assert_eq!(s.score(), 10, "a finalized round ignores more answers");
    s.advance_clock(ADVANCE);
    assert_eq!(s.play().map(|p| p.cursor), Some(1));
    assert!(s.feedback().is_none());
  }

  #[test]
  fn timed_quiz_completes_on_the_tenth_correct_answer() {
    let (mut s, _) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    for _ in 0..10 {
      answer_right(&mut s);
    }
    let play = s.play().expect("completion screen");
    assert!(play.game_over && play.finished);
    assert_eq!(play.cursor, 9);
    assert_eq!(s.score(), 100);
    assert!(!s.scheduler.is_armed(TimerKind::RoundTick));
    assert_eq!(s.drain_effects(), vec![Effect::Celebrate { mode: GameMode::TimedQuiz }]);

    // The round clock stays stopped: no time-out prompt on the completion screen.
    s.advance_clock(Duration::from_secs(30));
    assert_eq!(s.screen(), Screen::Playing);
    assert_eq!(continue_left(&s), None);
    assert!(s.play().is_some_and(|p| p.game_over));

    s.complete_mode(GameMode::TimedQuiz);
    assert_eq!(s.completed_modes().iter().copied().collect::<Vec<_>>(), vec![GameMode::TimedQuiz]);
    assert_eq!(s.badges().len(), 1);
    assert!(s.drain_effects().is_empty());
    assert_eq!(s.score(), 100);
  }

  #[test]
  fn bug_repair_completes_after_ten_fixes() {
    let (mut s, _) = at_menu("cosine", Difficulty::Hard);
    s.start_mode(GameMode::BugRepair);
    for _ in 0..10 {
      s.reveal_analysis();
      s.apply_fix();
      s.advance_clock(ADVANCE);
    }
    let play = s.play().expect("completion screen");
    assert!(play.game_over && play.finished);
    assert_eq!(play.cursor, 9);
    assert_eq!(s.score(), 150);
    assert!(s.completed_modes().contains(&GameMode::BugRepair));
    assert_eq!(s.drain_effects().len(), 1);

    s.complete_mode(GameMode::BugRepair);
    assert_eq!(s.completed_modes().len(), 1);
    assert!(s.drain_effects().is_empty());
    s.reveal_analysis();
    s.apply_fix();
    assert_eq!(s.score(), 150);
  }

  #[test]
  fn power_waits_while_the_continue_prompt_is_open() {
    let (mut s, _) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    s.advance_clock(Duration::from_secs(10));
    assert_eq!(continue_left(&s), Some(9));
    s.activate_power();
    assert!(!s.power_consumed());
    assert_eq!(time_left(&s), 0);

    s.resolve_continue(true);
    s.activate_power();
    assert!(s.power_consumed());
    assert_eq!(time_left(&s), 15);
  }

  #[test]
  fn power_is_not_spent_on_the_completion_screen() {
    let (mut s, _) = at_menu("tangent", Difficulty::Easy);
    s.start_mode(GameMode::EliminationTap);
    for _ in 0..5 {
      s.next_category();
    }
    assert!(s.play().is_some_and(|p| p.game_over));
    s.activate_power();
    assert!(!s.power_consumed());
    assert!(!s.power_active());
  }

  #[test]
  fn clearing_every_round_completes_the_mode_once() {
    let (mut s, _) = at_menu("sine", Difficulty::Hard);
    s.start_mode(GameMode::ScenarioQuiz);
    let count = s.round_count();
    for _ in 0..count {
      assert!(s.play().is_some_and(|p| p.cursor < count));
      answer_right(&mut s);
    }
    let play = s.play().expect("still on the completion screen");
    assert!(play.game_over && play.finished);
    assert_eq!(play.cursor, count - 1);
    assert_eq!(s.completed_modes().len(), 1);
    assert_eq!(s.drain_effects(), vec![Effect::Celebrate { mode: GameMode::ScenarioQuiz }]);

    s.complete_mode(GameMode::ScenarioQuiz);
    assert_eq!(s.completed_modes().len(), 1);
    assert_eq!(s.badges().len(), 1);
    assert!(s.drain_effects().is_empty(), "no second celebration");
    assert_eq!(s.score(), 100);
  }

  #[test]
  fn replaying_a_mode_starts_from_the_first_round() {
    let (mut s, _) = at_menu("cosine", Difficulty::Easy);
    s.start_mode(GameMode::BugRepair);
    s.reveal_analysis();
    s.apply_fix();
    s.advance_clock(ADVANCE);
    assert_eq!(s.play().map(|p| p.cursor), Some(1));
    s.go_home();
    assert_eq!(s.screen(), Screen::Menu);
    assert_eq!(s.selected_mode(), None);
    s.start_mode(GameMode::BugRepair);
    assert_eq!(s.play().map(|p| p.cursor), Some(0));
    assert_eq!(s.score(), 15);
  }

  #[test]
  fn going_home_cancels_the_quiz_clock() {
    let (mut s, _) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    s.advance_clock(Duration::from_secs(3));
    assert!(s.scheduler.is_armed(TimerKind::RoundTick));
    s.go_home();
    assert!(!s.scheduler.is_armed(TimerKind::RoundTick));
    s.advance_clock(Duration::from_secs(60));
    assert_eq!(s.screen(), Screen::Menu);
    assert!(s.play().is_none());
  }

  #[test]
  fn power_is_reset_by_each_mode_start() {
    let (mut s, _) = at_menu("tangent", Difficulty::Easy);
    s.start_mode(GameMode::ScenarioQuiz);
    s.activate_power();
    s.go_home();
    s.start_mode(GameMode::TimedQuiz);
    assert!(!s.power_consumed());
    assert!(!s.power_active());
  }

  #[test]
  fn erased_option_cannot_be_submitted() {
    let (mut s, _) = at_menu("cosine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    s.activate_power();
    let erased = match &s.play().expect("playing").board {
      Board::Choice(b) => b.erased.expect("erased"),
      other => panic!("{other:?}"),
    };
    s.submit_answer(erased);
    assert!(s.feedback().is_none());
    answer_right(&mut s);
    match &s.play().expect("playing").board {
      Board::Choice(b) => assert_eq!(b.erased, None, "erasure is per round"),
      other => panic!("{other:?}"),
    }
  }

  #[test]
  fn correct_answer_freezes_the_quiz_clock_until_the_next_round() {
    let (mut s, _) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::TimedQuiz);
    s.advance_clock(Duration::from_secs(8));
    let a = expected(&s);
    s.submit_answer(a);
    s.advance_clock(Duration::from_millis(1400));
    assert_eq!(time_left(&s), 2);
    s.advance_clock(Duration::from_millis(100));
    assert_eq!(s.play().map(|p| p.cursor), Some(1));
    assert_eq!(time_left(&s), 10);
  }

  #[test]
  fn tap_mode_letters_and_countdown() {
    let (mut s, tones) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::EliminationTap);
    s.tap('A');
    s.tap('B');
    s.advance_clock(Duration::from_millis(2000));
    let snapshot = s.play().map(|p| p.board.clone());
    let played = tones.played().len();
    s.tap('A');
    assert_eq!(s.play().map(|p| p.board.clone()), snapshot);
    assert_eq!(tones.played().len(), played);

    s.advance_clock(Duration::from_millis(8000));
    let Some(Play { board: Board::Tap(t), .. }) = s.play() else { panic!("tap board") };
    assert!(t.is_failed());
    assert_eq!(tones.played().last(), Some(&Tone::Fail));
    assert!(tones.played().contains(&Tone::Tick));

    // Failure does not block progression.
    s.next_category();
    assert_eq!(s.score(), 5);
    let Some(Play { board: Board::Tap(t), cursor, .. }) = s.play() else { panic!("tap board") };
    assert_eq!(*cursor, 1);
    assert!(t.used().is_empty());
    assert!(!t.is_failed());
  }

  #[test]
  fn tap_mode_completes_after_five_categories() {
    let (mut s, _) = at_menu("tangent", Difficulty::Hard);
    s.start_mode(GameMode::EliminationTap);
    s.activate_power();
    for _ in 0..5 {
      s.next_category();
    }
    assert_eq!(s.score(), 10 + 4 * 5);
    assert!(s.completed_modes().contains(&GameMode::EliminationTap));
    let play = s.play().expect("completion screen");
    assert!(play.game_over);
    assert_eq!(play.cursor, 4);
    s.next_category();
    assert_eq!(s.score(), 30);
  }

  #[test]
  fn time_power_extends_the_tap_countdown() {
    let (mut s, _) = at_menu("sine", Difficulty::Easy);
    s.start_mode(GameMode::EliminationTap);
    s.press_center();
    s.activate_power();
    s.advance_clock(Duration::from_secs(12));
    let Some(Play { board: Board::Tap(t), .. }) = s.play() else { panic!("tap board") };
    assert!(!t.is_failed());
    assert_eq!(t.tenths_left(), 30);
  }

  #[test]
  fn randomize_topic_picks_a_category_of_the_tier() {
    let (mut s, _) = at_menu("sine", Difficulty::Hard);
    s.start_mode(GameMode::EliminationTap);
    s.randomize_topic();
    let Some(Play { board: Board::Tap(t), .. }) = s.play() else { panic!("tap board") };
    assert!(t.topic_override.is_some_and(|i| i < 5));
  }

  #[test]
  fn bug_repair_requires_the_analysis_before_the_fix() {
    let (mut s, _) = at_menu("tangent", Difficulty::Easy);
    s.start_mode(GameMode::BugRepair);
    s.apply_fix();
    assert_eq!(s.score(), 0);
    s.toggle_hint();
    s.reveal_analysis();
    s.activate_power();
    s.apply_fix();
    assert_eq!(s.score(), 30);
    s.advance_clock(ADVANCE);
    let Some(Play { board: Board::Repair(r), cursor: 1, .. }) = s.play() else { panic!("round two") };
    assert_eq!(*r, RepairBoard::default());
    s.submit_answer("not the fix");
    assert_eq!(s.feedback().map(|f| f.kind), Some(FeedbackKind::Failure));
  }

  #[test]
  fn boss_round_needs_all_four_badges() {
    let (mut s, _) = at_menu("sine", Difficulty::Easy);
    s.enter_boss_round();
    assert_eq!(s.screen(), Screen::Menu);
    for mode in GameMode::ALL {
      s.start_mode(mode);
      s.complete_mode(mode);
      s.go_home();
    }
    assert!(s.boss_unlocked());
    s.enter_boss_round();
    assert_eq!(s.screen(), Screen::BossRound);
    s.finish_boss_round();
    assert_eq!(s.screen(), Screen::Results);
    s.go_home();
    assert_eq!(s.screen(), Screen::Results, "results only exit through reset");

    let old_id = s.id();
    s.reset();
    assert_eq!(s.screen(), Screen::Intro);
    assert_ne!(s.id(), old_id);
    assert!(s.badges().is_empty());
    assert_eq!(s.score(), 0);
    assert!(s.character().is_none());
  }
}
