//! Audio cues. Emitters are fire-and-forget: they never block the caller and
//! swallow their own output errors.

use std::io::Write;
use std::sync::OnceLock;

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
  Click,
  Success,
  Fail,
  Tick,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Waveform {
  Sine,
  Square,
  Sawtooth,
}

/// One oscillator note of a cue, `offset_ms` after the cue starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
  pub freq_hz: f32,
  pub waveform: Waveform,
  pub duration_ms: u32,
  pub volume: f32,
  pub offset_ms: u32,
}

const fn note(freq_hz: f32, waveform: Waveform, duration_ms: u32, volume: f32, offset_ms: u32) -> Note {
  Note { freq_hz, waveform, duration_ms, volume, offset_ms }
}

const CLICK: &[Note] = &[note(440.0, Waveform::Square, 100, 0.05, 0)];
// C5, E5, G5
const SUCCESS: &[Note] = &[
  note(523.25, Waveform::Square, 100, 0.1, 0),
  note(659.25, Waveform::Square, 100, 0.1, 100),
  note(783.99, Waveform::Square, 300, 0.1, 200),
];
const FAIL: &[Note] = &[
  note(110.0, Waveform::Sawtooth, 500, 0.1, 0),
  note(73.42, Waveform::Sawtooth, 500, 0.1, 100),
];
const TICK: &[Note] = &[note(880.0, Waveform::Sine, 50, 0.02, 0)];

impl Tone {
  pub fn notes(self) -> &'static [Note] {
    match self {
      Tone::Click => CLICK,
      Tone::Success => SUCCESS,
      Tone::Fail => FAIL,
      Tone::Tick => TICK,
    }
  }
}

pub trait ToneEmitter: Send {
  fn play(&self, tone: Tone);
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct Muted;

impl ToneEmitter for Muted {
  fn play(&self, _tone: Tone) {}
}

/// Logs the note pattern of every cue and, when `ring` is set, rings the
/// terminal bell for results. The bell goes to stderr so it never lands
/// inside a JSON frame.
#[derive(Debug, Default)]
pub struct TerminalBell {
  ring: bool,
  out: OnceLock<std::io::Stderr>,
}

impl TerminalBell {
  pub fn new(ring: bool) -> Self {
    Self { ring, out: OnceLock::new() }
  }
}

impl ToneEmitter for TerminalBell {
  fn play(&self, tone: Tone) {
    let notes = tone.notes();
    let first_hz = notes.first().map(|n| n.freq_hz).unwrap_or_default();
    debug!(target: "tones", ?tone, notes = notes.len(), first_hz, "tone");
    if self.ring && matches!(tone, Tone::Success | Tone::Fail) {
      let mut err = self.out.get_or_init(std::io::stderr).lock();
      let _ = err.write_all(b"\x07");
      let _ = err.flush();
    }
  }
}
