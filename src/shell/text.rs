//! Plain terminal front end: redraws the whole frame on change and reads short
//! line commands whose meaning depends on the frame on screen.

use std::fmt::Write;

use crate::domain::{Difficulty, Effect, FeedbackKind, GameMode};
use crate::protocol::{ClientCommand, Hud, OptionView, PlayBody, PowerState, ScreenView};
use crate::util::wrap_text;

use super::Frontend;

const CLEAR: &str = "\x1b[2J\x1b[H";

pub struct TextFrontend {
  pub width: usize,
}

impl Default for TextFrontend {
  fn default() -> Self {
    Self { width: 72 }
  }
}

impl Frontend for TextFrontend {
  fn parse(&self, view: &ScreenView, line: &str) -> Result<ClientCommand, String> {
    parse_line(view, line)
  }

  fn frame(&self, view: &ScreenView) -> String {
    let mut out = String::from(CLEAR);
    render(&mut out, view, self.width);
    out
  }

  fn error(&self, message: &str) -> String {
    format!("! {message}\n")
  }

  fn effect(&self, effect: &Effect) -> String {
    match effect {
      Effect::Celebrate { mode } => {
        format!("\n  * * *  {} COMPLETE  * * *  {} BADGE EARNED  * * *\n", mode.title(), mode.badge())
      }
    }
  }
}

/// Words that mean the same thing on every screen.
fn global_word(word: &str) -> Option<ClientCommand> {
  match word {
    "quit" | "exit" => Some(ClientCommand::Quit),
    "reset" | "reboot" => Some(ClientCommand::Reset),
    "power" => Some(ClientCommand::ActivatePower),
    "home" | "menu" => Some(ClientCommand::Home),
    _ => None,
  }
}

fn pick<'a, T>(items: &'a [T], word: &str) -> Option<&'a T> {
  let n: usize = word.parse().ok()?;
  items.get(n.checked_sub(1)?)
}

fn pick_option(options: &[OptionView], word: &str) -> Option<ClientCommand> {
  pick(options, word)
    .or_else(|| options.iter().find(|o| o.value.eq_ignore_ascii_case(word)))
    .map(|o| ClientCommand::SubmitAnswer { answer: o.value.to_string() })
}

pub fn parse_line(view: &ScreenView, line: &str) -> Result<ClientCommand, String> {
  let word = line.trim().to_ascii_lowercase();
  if let Some(cmd) = global_word(&word) {
    return Ok(cmd);
  }

  let cmd = match view {
    ScreenView::Intro => match word.as_str() {
      "" | "start" => Some(ClientCommand::Begin),
      "help" | "?" => Some(ClientCommand::HowToPlay),
      _ => None,
    },
    ScreenView::HowToPlay { .. } => Some(ClientCommand::CloseHowToPlay),
    ScreenView::CharacterSelect { characters } => pick(characters, &word)
      .or_else(|| characters.iter().find(|c| c.id == word))
      .map(|c| ClientCommand::SelectCharacter { id: c.id.to_string() }),
    ScreenView::DifficultySelect { .. } => match word.as_str() {
      "1" | "easy" => Some(ClientCommand::SelectDifficulty { difficulty: Difficulty::Easy }),
      "2" | "hard" => Some(ClientCommand::SelectDifficulty { difficulty: Difficulty::Hard }),
      "back" => Some(ClientCommand::BackToCharacters),
      _ => None,
    },
    ScreenView::Menu { .. } => match word.as_str() {
      "boss" => Some(ClientCommand::EnterBossRound),
      w => pick(&GameMode::ALL, w).map(|&mode| ClientCommand::StartMode { mode }),
    },
    ScreenView::Playing { complete: true, .. } => None,
    ScreenView::Playing { body, .. } => parse_play(body, &word),
    ScreenView::BossRound { .. } => match word.as_str() {
      "" | "debrief" => Some(ClientCommand::FinishBossRound),
      _ => None,
    },
    ScreenView::Results { .. } => match word.as_str() {
      "" => Some(ClientCommand::Reset),
      _ => None,
    },
  };

  cmd.ok_or_else(|| {
    if word.is_empty() {
      "type a command".to_string()
    } else {
      format!("unknown command: {word}")
    }
  })
}

fn parse_play(body: &PlayBody, word: &str) -> Option<ClientCommand> {
  match body {
    PlayBody::Quiz { continue_left: Some(_), .. } => match word {
      "y" | "yes" => Some(ClientCommand::ResolveContinue { accept: true }),
      "n" | "no" => Some(ClientCommand::ResolveContinue { accept: false }),
      _ => None,
    },
    PlayBody::Quiz { options, .. } => pick(options, word).map(|o| ClientCommand::SubmitAnswer { answer: o.value.to_string() }),
    PlayBody::Scenario { options, .. } => pick_option(options, word),
    PlayBody::Tap { .. } => match word {
      "" | "go" => Some(ClientCommand::PressCenter),
      "next" => Some(ClientCommand::NextCategory),
      "topic" | "random" => Some(ClientCommand::RandomizeTopic),
      w => {
        let mut chars = w.chars();
        match (chars.next(), chars.next()) {
          (Some(c), None) if c.is_ascii_alphabetic() => Some(ClientCommand::Tap { letter: c.to_ascii_uppercase() }),
          _ => None,
        }
      }
    },
    PlayBody::Repair { .. } => match word {
      "hint" => Some(ClientCommand::ToggleHint),
      "scan" | "analyze" => Some(ClientCommand::RevealAnalysis),
      "fix" => Some(ClientCommand::ApplyFix),
      _ => None,
    },
  }
}

// ----- rendering -----

fn push_wrapped(out: &mut String, indent: &str, s: &str, width: usize) {
  for line in wrap_text(s, width.saturating_sub(indent.len())) {
    let _ = writeln!(out, "{indent}{line}");
  }
}

fn render_hud(out: &mut String, hud: &Hud) {
  let who = hud
    .character
    .as_ref()
    .map(|c| format!("{} {}", c.avatar, c.name))
    .unwrap_or_default();
  let power = match (&hud.character, hud.power) {
    (None, _) => String::new(),
    (Some(c), PowerState::Ready) => format!("[{}: ready, type power]", c.ability),
    (Some(c), PowerState::Active) => format!("[{}: ACTIVE]", c.ability),
    (Some(c), PowerState::Used) => format!("[{}: used]", c.ability),
  };
  let diff = match hud.difficulty {
    Difficulty::Easy => "EASY",
    Difficulty::Hard => "HARD",
  };
  let _ = writeln!(out, "{who} | {diff} | {} PTS {power}", hud.score);
  if !hud.badges.is_empty() {
    let _ = writeln!(out, "badges: {}", hud.badges.join(" "));
  }
  out.push('\n');
}

fn render_options(out: &mut String, options: &[OptionView], width: usize) {
  for (i, o) in options.iter().enumerate() {
    if o.erased {
      let _ = writeln!(out, "  {}. ---- erased ----", i + 1);
    } else {
      push_wrapped(out, &format!("  {}. ", i + 1), o.label, width);
    }
  }
}

pub fn render(out: &mut String, view: &ScreenView, width: usize) {
  match view {
    ScreenView::Intro => {
      out.push_str("Y3K PROGRAMMER\n\n");
      push_wrapped(out, "", "The year is 3000. Prove you can still think like a programmer.", width);
      out.push_str("\n[enter] start   [help] how to play   [quit]\n");
    }
    ScreenView::HowToPlay { modes, characters } => {
      out.push_str("HOW TO PLAY\n\n");
      for m in modes {
        let _ = writeln!(out, "  {:<12} {}  (badge: {})", m.title, m.tagline, m.badge);
      }
      out.push_str("\nPowers, one use per mode:\n");
      for c in characters {
        push_wrapped(out, "  ", &format!("{} {}: {}", c.name, c.ability, c.ability_description), width);
      }
      out.push_str("\n[enter] back\n");
    }
    ScreenView::CharacterSelect { characters } => {
      out.push_str("CHOOSE YOUR AVATAR\n\n");
      for (i, c) in characters.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} {}  [{}]", i + 1, c.avatar, c.name, c.ability);
        push_wrapped(out, "       ", c.description, width);
      }
    }
    ScreenView::DifficultySelect { character, .. } => {
      if let Some(c) = character {
        let _ = writeln!(out, "{} {}\n", c.avatar, c.name);
      }
      out.push_str("SELECT DIFFICULTY\n\n  1. EASY  (basic)\n  2. HARD  (advanced)\n\n[back]\n");
    }
    ScreenView::Menu { hud, modes, boss_unlocked } => {
      render_hud(out, hud);
      for (i, m) in modes.iter().enumerate() {
        let done = if m.completed { "[x]" } else { "[ ]" };
        let _ = writeln!(out, "  {}. {done} {:<12} {}", i + 1, m.title, m.tagline);
      }
      if *boss_unlocked {
        out.push_str("\n  FINAL BOSS ROUND UNLOCKED [boss]\n");
      }
    }
    ScreenView::Playing { hud, title, round, rounds, feedback, complete, body, .. } => {
      render_hud(out, hud);
      let _ = writeln!(out, "{title}  round {round}/{rounds}\n");
      if *complete {
        out.push_str("MODE COMPLETE\n\n[home]\n");
        return;
      }
      render_body(out, body, width);
      if let Some(f) = feedback {
        let mark = match f.kind {
          FeedbackKind::Success => "+",
          FeedbackKind::Failure => "x",
        };
        let _ = writeln!(out, "\n{mark} {}", f.message);
      }
      if let PlayBody::Scenario { reasoning: Some(why), .. } = body {
        push_wrapped(out, "  ", why, width);
      }
    }
    ScreenView::BossRound { hud, taunt } => {
      render_hud(out, hud);
      out.push_str("FINAL BOSS: THE SINGULARITY\n\n");
      push_wrapped(out, "  ", &format!("\"{taunt}\""), width);
      out.push_str("\nThis round is for the whole class to solve together.\n[enter] initiate debrief\n");
    }
    ScreenView::Results { score, badges, character } => {
      out.push_str("MISSION COMPLETE\n\n");
      let _ = writeln!(out, "FINAL SCORE: {score}");
      if let Some(name) = character {
        let _ = writeln!(out, "CERTIFIED Y3K PROGRAMMER: {name}");
      }
      let _ = writeln!(out, "badges: {}", badges.join(" "));
      out.push_str("\n[enter] reboot system\n");
    }
  }
}

fn render_body(out: &mut String, body: &PlayBody, width: usize) {
  match body {
    PlayBody::Quiz { continue_left: Some(left), .. } => {
      let _ = writeln!(out, "TIME EXPIRED.  CONTINUE? {left}\n\n[yes] [no]");
    }
    PlayBody::Quiz { question, difficulty, options, time_left, .. } => {
      let _ = writeln!(out, "time: {time_left}s   DIFFICULTY: {difficulty}\n");
      push_wrapped(out, "", question, width);
      out.push('\n');
      render_options(out, options, width);
    }
    PlayBody::Scenario { scenario, options, .. } => {
      push_wrapped(out, "", scenario, width);
      out.push('\n');
      render_options(out, options, width);
    }
    PlayBody::Tap { category, used, last, seconds_left, running, failed, .. } => {
      let _ = writeln!(out, "CATEGORY: {category}\n");
      let wheel: String = ('A'..='Z').map(|c| if used.contains(&c) { '.' } else { c }).collect();
      let _ = writeln!(out, "  {wheel}");
      let state = if *failed {
        "TIME UP, [enter] to retry"
      } else if *running {
        "running"
      } else {
        "[enter] to start"
      };
      let last = last.map(|c| c.to_string()).unwrap_or_else(|| "-".into());
      let _ = writeln!(out, "\n  {seconds_left:.1}s  last: {last}  {state}");
      out.push_str("\n[letter] tap  [next] next category  [topic] random topic\n");
    }
    PlayBody::Repair { corrupted_code, error, hint, analysis } => {
      for line in corrupted_code.lines() {
        let _ = writeln!(out, "  | {line}");
      }
      let _ = writeln!(out, "\nERROR: {error}");
      if let Some(h) = hint {
        push_wrapped(out, "hint: ", h, width);
      }
      match analysis {
        Some(a) => {
          out.push('\n');
          push_wrapped(out, "cause: ", a.cause, width);
          push_wrapped(out, "fix:   ", a.fix, width);
          push_wrapped(out, "", a.explanation, width);
          out.push_str("\n[fix] apply fix  [hint]\n");
        }
        None => out.push_str("\n[scan] analyze  [hint]\n"),
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::protocol::{CharacterCard, ModeCard};

  fn card(id: &'static str) -> CharacterCard {
    CharacterCard { id, name: id, avatar: "", description: "", ability: "", ability_description: "" }
  }

  fn option(label: &'static str, value: &'static str) -> OptionView {
    OptionView { label, value, erased: false }
  }

  fn hud() -> Hud {
    Hud { score: 0, difficulty: Difficulty::Easy, character: None, power: PowerState::Ready, badges: vec![] }
  }

  fn playing(body: PlayBody) -> ScreenView {
    ScreenView::Playing {
      hud: hud(),
      mode: GameMode::TimedQuiz,
      title: "T",
      round: 1,
      rounds: 10,
      feedback: None,
      complete: false,
      body,
    }
  }

  #[test]
  fn numbers_and_ids_pick_characters() {
    let view = ScreenView::CharacterSelect { characters: vec![card("sine"), card("cosine")] };
    assert_eq!(parse_line(&view, "2"), Ok(ClientCommand::SelectCharacter { id: "cosine".into() }));
    assert_eq!(parse_line(&view, " SINE "), Ok(ClientCommand::SelectCharacter { id: "sine".into() }));
    assert!(parse_line(&view, "3").is_err());
    assert!(parse_line(&view, "0").is_err());
  }

  #[test]
  fn menu_numbers_start_modes() {
    let view = ScreenView::Menu { hud: hud(), modes: Vec::<ModeCard>::new(), boss_unlocked: false };
    assert_eq!(parse_line(&view, "3"), Ok(ClientCommand::StartMode { mode: GameMode::BugRepair }));
    assert_eq!(parse_line(&view, "boss"), Ok(ClientCommand::EnterBossRound));
    assert_eq!(parse_line(&view, "quit"), Ok(ClientCommand::Quit));
  }

  #[test]
  fn tap_screen_reads_single_letters() {
    let view = playing(PlayBody::Tap {
      category: "c",
      examples: &[],
      used: vec![],
      last: None,
      seconds_left: 10.0,
      running: false,
      failed: false,
    });
    assert_eq!(parse_line(&view, "q"), Ok(ClientCommand::Tap { letter: 'Q' }));
    assert_eq!(parse_line(&view, ""), Ok(ClientCommand::PressCenter));
    assert_eq!(parse_line(&view, "next"), Ok(ClientCommand::NextCategory));
    assert_eq!(parse_line(&view, "home"), Ok(ClientCommand::Home));
    assert!(parse_line(&view, "7").is_err());
  }

  #[test]
  fn quiz_answers_by_number_and_continue_by_yes_no() {
    let options = vec![option("int", "int"), option("char", "char")];
    let view = playing(PlayBody::Quiz { question: "q", difficulty: 1, options: options.clone(), time_left: 5, continue_left: None });
    assert_eq!(parse_line(&view, "2"), Ok(ClientCommand::SubmitAnswer { answer: "char".into() }));

    let prompt = playing(PlayBody::Quiz { question: "q", difficulty: 1, options, time_left: 0, continue_left: Some(4) });
    assert_eq!(parse_line(&prompt, "y"), Ok(ClientCommand::ResolveContinue { accept: true }));
    assert_eq!(parse_line(&prompt, "no"), Ok(ClientCommand::ResolveContinue { accept: false }));
    assert!(parse_line(&prompt, "1").is_err());
  }

  #[test]
  fn scenario_accepts_the_option_letter() {
    let view = playing(PlayBody::Scenario {
      scenario: "s",
      options: vec![option("Linear Search", "A"), option("Binary Search", "B")],
      reasoning: None,
    });
    assert_eq!(parse_line(&view, "b"), Ok(ClientCommand::SubmitAnswer { answer: "B".into() }));
    assert_eq!(parse_line(&view, "1"), Ok(ClientCommand::SubmitAnswer { answer: "A".into() }));
  }

  #[test]
  fn erased_options_are_struck_out() {
    let mut out = String::new();
    let mut erased = option("float", "float");
    erased.erased = true;
    render(
      &mut out,
      &playing(PlayBody::Quiz {
        question: "pick",
        difficulty: 3,
        options: vec![option("int", "int"), erased],
        time_left: 7,
        continue_left: None,
      }),
      72,
    );
    assert!(out.contains("1. int"));
    assert!(out.contains("2. ---- erased ----"));
    assert!(!out.contains("float"));
    assert!(out.contains("time: 7s   DIFFICULTY: 3"));
  }

  #[test]
  fn scenario_reasoning_follows_the_feedback() {
    let mut out = String::new();
    let view = ScreenView::Playing {
      hud: hud(),
      mode: GameMode::ScenarioQuiz,
      title: "QUEST MODE",
      round: 1,
      rounds: 10,
      feedback: Some(crate::domain::Feedback::success(10)),
      complete: false,
      body: PlayBody::Scenario {
        scenario: "s",
        options: vec![option("Binary Search", "B")],
        reasoning: Some("sorted data halves each step"),
      },
    };
    render(&mut out, &view, 72);
    let feedback_at = out.find("CORRECT! +10 PTS").expect("feedback line");
    let reasoning_at = out.find("sorted data halves each step").expect("reasoning line");
    assert!(feedback_at < reasoning_at);
  }
}
