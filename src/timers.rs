//! Virtual-clock scheduler for the session's countdowns and delayed actions.
//!
//! Each `TimerKind` has at most one pending entry: arming a kind replaces
//! whatever was pending for it, and disarming cancels it. The kind is the
//! cancellation token, so a transition that makes a timer irrelevant disarms
//! that kind before anything else happens and no stale callback can fire
//! against the new state.
//!
//! The clock only moves when the owner calls `pop_due`, which makes timer
//! behavior fully deterministic under test.

use std::time::Duration;

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
  /// Timed-quiz countdown, one second per fire.
  RoundTick,
  /// "Continue?" prompt countdown, one second per fire.
  ContinueTick,
  /// Elimination-tap countdown, one tenth of a second per fire.
  TapTick,
  /// Clears the answer feedback banner.
  ClearFeedback,
  /// Moves to the next round after a correct answer.
  Advance,
}

#[derive(Clone, Debug)]
struct Pending {
  kind: TimerKind,
  at: Duration,
  seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
  now: Duration,
  seq: u64,
  pending: Vec<Pending>,
}

impl Scheduler {
  pub fn now(&self) -> Duration {
    self.now
  }

  /// Schedule `kind` to fire `delay` from now, replacing any pending entry.
  pub fn arm(&mut self, kind: TimerKind, delay: Duration) {
    self.pending.retain(|p| p.kind != kind);
    self.seq += 1;
    let at = self.now + delay;
    debug!(target: "timers", ?kind, at_ms = at.as_millis() as u64, "armed");
    self.pending.push(Pending { kind, at, seq: self.seq });
  }

  pub fn disarm(&mut self, kind: TimerKind) {
    self.pending.retain(|p| p.kind != kind);
  }

  pub fn disarm_all(&mut self) {
    if !self.pending.is_empty() {
      debug!(target: "timers", count = self.pending.len(), "disarmed all");
    }
    self.pending.clear();
  }

  #[cfg(test)]
  pub fn is_armed(&self, kind: TimerKind) -> bool {
    self.pending.iter().any(|p| p.kind == kind)
  }

  /// Remove and return the earliest entry due at or before `until`, moving the
  /// clock to its deadline. Ties fire in arming order. Returns `None` (and
  /// leaves the clock alone) when nothing is due.
  pub fn pop_due(&mut self, until: Duration) -> Option<TimerKind> {
    let idx = self
      .pending
      .iter()
      .enumerate()
      .filter(|(_, p)| p.at <= until)
      .min_by_key(|(_, p)| (p.at, p.seq))
      .map(|(i, _)| i)?;
    let due = self.pending.swap_remove(idx);
    self.now = self.now.max(due.at);
    Some(due.kind)
  }

  /// Move the clock forward to `to` once everything due has been popped.
  pub fn settle(&mut self, to: Duration) {
    self.now = self.now.max(to);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
  }

  #[test]
  fn due_entries_pop_in_deadline_order() {
    let mut s = Scheduler::default();
    s.arm(TimerKind::Advance, ms(1500));
    s.arm(TimerKind::RoundTick, ms(1000));
    s.arm(TimerKind::ClearFeedback, ms(1500));

    assert_eq!(s.pop_due(ms(2000)), Some(TimerKind::RoundTick));
    assert_eq!(s.now(), ms(1000));
    // Same deadline: arming order decides.
    assert_eq!(s.pop_due(ms(2000)), Some(TimerKind::Advance));
    assert_eq!(s.pop_due(ms(2000)), Some(TimerKind::ClearFeedback));
    assert_eq!(s.pop_due(ms(2000)), None);
    s.settle(ms(2000));
    assert_eq!(s.now(), ms(2000));
  }

  #[test]
  fn rearming_replaces_the_pending_entry() {
    let mut s = Scheduler::default();
    s.arm(TimerKind::ClearFeedback, ms(1500));
    s.settle(ms(1000));
    s.arm(TimerKind::ClearFeedback, ms(1500));

    assert_eq!(s.pop_due(ms(1600)), None);
    assert_eq!(s.pop_due(ms(2500)), Some(TimerKind::ClearFeedback));
    assert!(!s.is_armed(TimerKind::ClearFeedback));
  }

  #[test]
  fn disarmed_kinds_never_fire() {
    let mut s = Scheduler::default();
    s.arm(TimerKind::RoundTick, ms(1000));
    s.arm(TimerKind::TapTick, ms(100));
    s.disarm(TimerKind::RoundTick);
    assert!(!s.is_armed(TimerKind::RoundTick));
    assert_eq!(s.pop_due(ms(5000)), Some(TimerKind::TapTick));

    s.arm(TimerKind::ContinueTick, ms(1000));
    s.disarm_all();
    assert_eq!(s.pop_due(ms(60_000)), None);
  }
}
