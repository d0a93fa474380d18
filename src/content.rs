//! Read-only content store: round tables keyed by mode and difficulty tier,
//! plus the character roster.
//!
//! All lookups are total for in-range indices; the tables are compiled in and
//! never change at runtime.

use tracing::{info, instrument};

use crate::domain::{Character, Difficulty, GameMode, GlitchRound, QuestRound, Question, RoundItem, TapRound};
use crate::seeds::{
  ADVANCED_GLITCH_ROUNDS, ADVANCED_QUESTIONS, ADVANCED_QUEST_ROUNDS, ADVANCED_TAP_ROUNDS, BASIC_GLITCH_ROUNDS,
  BASIC_QUESTIONS, BASIC_QUEST_ROUNDS, BASIC_TAP_ROUNDS, CHARACTERS,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct ContentStore;

impl ContentStore {
  /// Build the store and log a startup inventory per tier.
  #[instrument(level = "info")]
  pub fn new() -> Self {
    let store = Self;
    for tier in [Difficulty::Easy, Difficulty::Hard] {
      info!(
        target: "content",
        ?tier,
        timed_quiz = store.item_count(GameMode::TimedQuiz, tier),
        elimination_tap = store.item_count(GameMode::EliminationTap, tier),
        bug_repair = store.item_count(GameMode::BugRepair, tier),
        scenario_quiz = store.item_count(GameMode::ScenarioQuiz, tier),
        "Startup content inventory"
      );
    }
    store
  }

  pub fn characters(&self) -> &'static [Character] {
    &CHARACTERS
  }

  pub fn character(&self, id: &str) -> Option<&'static Character> {
    CHARACTERS.iter().find(|c| c.id.eq_ignore_ascii_case(id))
  }

  pub fn questions(&self, tier: Difficulty) -> &'static [Question] {
    match tier {
      Difficulty::Easy => &BASIC_QUESTIONS,
      Difficulty::Hard => &ADVANCED_QUESTIONS,
    }
  }

  pub fn tap_rounds(&self, tier: Difficulty) -> &'static [TapRound] {
    match tier {
      Difficulty::Easy => &BASIC_TAP_ROUNDS,
      Difficulty::Hard => &ADVANCED_TAP_ROUNDS,
    }
  }

  pub fn glitch_rounds(&self, tier: Difficulty) -> &'static [GlitchRound] {
    match tier {
      Difficulty::Easy => &BASIC_GLITCH_ROUNDS,
      Difficulty::Hard => &ADVANCED_GLITCH_ROUNDS,
    }
  }

  pub fn quest_rounds(&self, tier: Difficulty) -> &'static [QuestRound] {
    match tier {
      Difficulty::Easy => &BASIC_QUEST_ROUNDS,
      Difficulty::Hard => &ADVANCED_QUEST_ROUNDS,
    }
  }

  pub fn item_count(&self, mode: GameMode, tier: Difficulty) -> usize {
    match mode {
      GameMode::TimedQuiz => self.questions(tier).len(),
      GameMode::EliminationTap => self.tap_rounds(tier).len(),
      GameMode::BugRepair => self.glitch_rounds(tier).len(),
      GameMode::ScenarioQuiz => self.quest_rounds(tier).len(),
    }
  }

  /// Item `index` of the mode's sequence. Callers keep `index < item_count`.
  pub fn get_item(&self, mode: GameMode, tier: Difficulty, index: usize) -> Option<RoundItem> {
    match mode {
      GameMode::TimedQuiz => self.questions(tier).get(index).map(RoundItem::Question),
      GameMode::EliminationTap => self.tap_rounds(tier).get(index).map(RoundItem::Tap),
      GameMode::BugRepair => self.glitch_rounds(tier).get(index).map(RoundItem::Glitch),
      GameMode::ScenarioQuiz => self.quest_rounds(tier).get(index).map(RoundItem::Quest),
    }
  }

  /// Value a submission must equal to clear the round. Tap rounds have none:
  /// they are cleared by the manual "next category" action.
  pub fn expected_answer(&self, mode: GameMode, tier: Difficulty, index: usize) -> Option<&'static str> {
    match self.get_item(mode, tier, index)? {
      RoundItem::Question(q) => Some(q.answer),
      RoundItem::Glitch(g) => Some(g.fix),
      RoundItem::Quest(q) => Some(q.correct_value),
      RoundItem::Tap(_) => None,
    }
  }

  /// Option values of a choice round, in display order.
  pub fn option_values(&self, mode: GameMode, tier: Difficulty, index: usize) -> Vec<&'static str> {
    match self.get_item(mode, tier, index) {
      Some(RoundItem::Question(q)) => q.options.to_vec(),
      Some(RoundItem::Quest(q)) => q.options.iter().map(|o| o.value).collect(),
      _ => Vec::new(),
    }
  }
}
