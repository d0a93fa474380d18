//! Answer evaluation, round rewards, and the two effect sites of character
//! abilities.
//!
//! An ability either acts the moment it is activated (`on_activate`: TIME adds
//! to the running countdown, ERASE strikes a wrong option) or when the next
//! reward is computed (`reward_for`: MULTIPLIER doubles it). The session calls
//! both sites unconditionally and each kind decides whether it participates.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

use crate::content::ContentStore;
use crate::domain::{AbilityKind, Difficulty, GameMode};
use crate::modes::Board;

/// Seconds granted by the TIME ability.
pub const TIME_BONUS_SECONDS: u32 = 5;

/// Points for clearing a round of `mode`, given the chosen ability and
/// whether the power is currently active.
pub fn reward_for(mode: GameMode, ability: Option<AbilityKind>, power_active: bool) -> u32 {
  let base = mode.base_reward();
  match ability {
    Some(AbilityKind::Multiplier) if power_active => base * 2,
    _ => base,
  }
}

/// Compare a submission with the round's expected value. `None` when the
/// round has nothing to submit against (tap rounds, out-of-range index).
#[instrument(level = "debug", skip_all, fields(?mode, ?tier, index, candidate_len = candidate.len()))]
pub fn evaluate_answer(
  store: &ContentStore,
  mode: GameMode,
  tier: Difficulty,
  index: usize,
  candidate: &str,
) -> Option<bool> {
  let expected = store.expected_answer(mode, tier, index)?;
  Some(candidate == expected)
}

/// Immediate part of an ability. Returns whether anything changed on the board.
pub fn on_activate<R: Rng + ?Sized>(
  kind: AbilityKind,
  board: &mut Board,
  store: &ContentStore,
  mode: GameMode,
  tier: Difficulty,
  index: usize,
  rng: &mut R,
) -> bool {
  match (kind, board) {
    (AbilityKind::Time, Board::Choice(b)) if mode == GameMode::TimedQuiz => {
      b.time_left = b.time_left.saturating_add(TIME_BONUS_SECONDS);
      true
    }
    (AbilityKind::Time, Board::Tap(t)) => {
      t.add_seconds(TIME_BONUS_SECONDS);
      true
    }
    (AbilityKind::Erase, Board::Choice(b)) if b.erased.is_none() => {
      let expected = store.expected_answer(mode, tier, index);
      let wrong: Vec<&'static str> = store
        .option_values(mode, tier, index)
        .into_iter()
        .filter(|v| Some(*v) != expected)
        .collect();
      b.erased = wrong.choose(rng).copied();
      debug!(target: "session", erased = ?b.erased, "erase ability applied");
      b.erased.is_some()
    }
    _ => false,
  }
}
