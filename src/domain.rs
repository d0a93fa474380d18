//! Domain models used by the game: modes, screens, difficulty tiers, characters
//! and their abilities, and the four kinds of round content.

use serde::{Deserialize, Serialize};

/// The four playable mini-games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
  /// Rapid multiple-choice questions against a 10 second clock.
  TimedQuiz,
  /// Name something in a category for each letter; letters can't repeat.
  EliminationTap,
  /// Find the bug in a corrupted snippet and apply the fix.
  BugRepair,
  /// Pick the right tool for a real-world scenario.
  ScenarioQuiz,
}

impl GameMode {
  pub const ALL: [GameMode; 4] = [
    GameMode::TimedQuiz,
    GameMode::EliminationTap,
    GameMode::BugRepair,
    GameMode::ScenarioQuiz,
  ];

  pub fn title(self) -> &'static str {
    match self {
      GameMode::TimedQuiz => "TIME TRIAL",
      GameMode::EliminationTap => "TAP MODE",
      GameMode::BugRepair => "GLITCH MODE",
      GameMode::ScenarioQuiz => "QUEST MODE",
    }
  }

  /// Name of the badge earned by completing the mode.
  pub fn badge(self) -> &'static str {
    match self {
      GameMode::TimedQuiz => "SPEED",
      GameMode::EliminationTap => "RECALL",
      GameMode::BugRepair => "DEBUG",
      GameMode::ScenarioQuiz => "LOGIC",
    }
  }

  /// Points for clearing one round, before any multiplier.
  pub fn base_reward(self) -> u32 {
    match self {
      GameMode::TimedQuiz | GameMode::ScenarioQuiz => 10,
      GameMode::EliminationTap => 5,
      GameMode::BugRepair => 15,
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  #[default]
  Easy,
  Hard,
}

/// Which screen the presentation shell should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
  #[default]
  Intro,
  HowToPlay,
  CharacterSelect,
  DifficultySelect,
  Menu,
  Playing,
  BossRound,
  Results,
}

/// The three kinds of one-shot power. Each kind has its own effect point,
/// see `logic::on_activate` and `logic::reward_for`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
  /// Adds seconds to the running countdown, immediately.
  Time,
  /// Removes one wrong option from the current round.
  Erase,
  /// Doubles the next reward.
  Multiplier,
}

#[derive(Clone, Debug, Serialize)]
pub struct Ability {
  pub name: &'static str,
  pub description: &'static str,
  pub kind: AbilityKind,
}

#[derive(Clone, Debug, Serialize)]
pub struct Character {
  pub id: &'static str,
  pub name: &'static str,
  pub description: &'static str,
  pub avatar: &'static str,
  pub ability: Ability,
}

/// Timed-quiz question. The answer is one of `options`, compared verbatim.
#[derive(Clone, Debug, Serialize)]
pub struct Question {
  pub id: u32,
  pub text: &'static str,
  pub options: &'static [&'static str],
  pub answer: &'static str,
  pub difficulty: u8,
}

/// Elimination-tap category.
#[derive(Clone, Debug, Serialize)]
pub struct TapRound {
  pub id: u32,
  pub category: &'static str,
  pub examples: &'static [&'static str],
}

/// Bug-repair puzzle. The expected answer is `fix`.
#[derive(Clone, Debug, Serialize)]
pub struct GlitchRound {
  pub id: u32,
  pub corrupted_code: &'static str,
  pub error: &'static str,
  pub cause: &'static str,
  pub fix: &'static str,
  pub hint: &'static str,
  pub explanation: &'static str,
  pub difficulty: u8,
}

#[derive(Clone, Debug, Serialize)]
pub struct QuestOption {
  pub label: &'static str,
  pub value: &'static str,
}

/// Scenario quest. The expected answer is `correct_value`.
#[derive(Clone, Debug, Serialize)]
pub struct QuestRound {
  pub id: u32,
  pub scenario: &'static str,
  pub options: &'static [QuestOption],
  pub correct_value: &'static str,
  pub reasoning: &'static str,
}

/// One item of the active mode's sequence.
#[derive(Clone, Copy, Debug)]
pub enum RoundItem {
  Question(&'static Question),
  Tap(&'static TapRound),
  Glitch(&'static GlitchRound),
  Quest(&'static QuestRound),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
  Success,
  Failure,
}

/// Transient result banner shown after an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
  pub kind: FeedbackKind,
  pub message: String,
}

impl Feedback {
  pub fn success(reward: u32) -> Self {
    Self { kind: FeedbackKind::Success, message: format!("CORRECT! +{reward} PTS") }
  }

  pub fn failure() -> Self {
    Self { kind: FeedbackKind::Failure, message: "INCORRECT! TRY AGAIN".into() }
  }
}

/// Cosmetic events the shell picks up after each command or tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
  /// First completion of a mode; the shell throws confetti.
  Celebrate { mode: GameMode },
}
