//! Public protocol structs shared by both front ends (serde ready).
//! `ClientCommand` is the input vocabulary, `ScreenView` describes exactly one
//! frame. Keep this small and stable so the shells can evolve independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Character, Difficulty, Feedback, FeedbackKind, GameMode, RoundItem};
use crate::modes::Board;
use crate::session::Session;

/// One user gesture. The JSON front end reads these verbatim, one per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    Begin,
    HowToPlay,
    CloseHowToPlay,
    SelectCharacter {
        id: String,
    },
    BackToCharacters,
    SelectDifficulty {
        difficulty: Difficulty,
    },
    StartMode {
        mode: GameMode,
    },
    ActivatePower,
    SubmitAnswer {
        answer: String,
    },
    ResolveContinue {
        accept: bool,
    },
    Tap {
        letter: char,
    },
    PressCenter,
    NextCategory,
    RandomizeTopic,
    ToggleHint,
    RevealAnalysis,
    ApplyFix,
    Home,
    EnterBossRound,
    FinishBossRound,
    Reset,
    Quit,
}

/// Frame sent to the client. Tagged by screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Intro,
    HowToPlay {
        modes: Vec<ModeCard>,
        characters: Vec<CharacterCard>,
    },
    CharacterSelect {
        characters: Vec<CharacterCard>,
    },
    DifficultySelect {
        character: Option<CharacterCard>,
        difficulty: Difficulty,
    },
    Menu {
        hud: Hud,
        modes: Vec<ModeCard>,
        boss_unlocked: bool,
    },
    Playing {
        hud: Hud,
        mode: GameMode,
        title: &'static str,
        /// 1-based round number.
        round: usize,
        rounds: usize,
        feedback: Option<Feedback>,
        /// Every round cleared; only `home` is left.
        complete: bool,
        body: PlayBody,
    },
    BossRound {
        hud: Hud,
        taunt: &'static str,
    },
    Results {
        score: u32,
        badges: Vec<&'static str>,
        character: Option<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeCard {
    pub mode: GameMode,
    pub title: &'static str,
    pub tagline: &'static str,
    pub badge: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterCard {
    pub id: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
    pub description: &'static str,
    pub ability: &'static str,
    pub ability_description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerState {
    Ready,
    Active,
    Used,
}

/// Header strip shown on the menu and during play.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub difficulty: Difficulty,
    pub character: Option<CharacterCard>,
    pub power: PowerState,
    pub badges: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionView {
    pub label: &'static str,
    pub value: &'static str,
    /// Struck out by the ERASE power; submitting it does nothing.
    pub erased: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub cause: &'static str,
    pub fix: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayBody {
    Quiz {
        question: &'static str,
        /// Question difficulty, 1 to 5.
        difficulty: u8,
        options: Vec<OptionView>,
        time_left: u32,
        /// Open "continue?" prompt with its remaining seconds.
        continue_left: Option<u32>,
    },
    Tap {
        category: &'static str,
        examples: &'static [&'static str],
        used: Vec<char>,
        last: Option<char>,
        seconds_left: f32,
        running: bool,
        failed: bool,
    },
    Repair {
        corrupted_code: &'static str,
        error: &'static str,
        hint: Option<&'static str>,
        analysis: Option<Analysis>,
    },
    Scenario {
        scenario: &'static str,
        options: Vec<OptionView>,
        /// Why the right option is right; shown once it has been picked.
        reasoning: Option<&'static str>,
    },
}

pub const BOSS_TAUNT: &str = "SO YOU THINK YOU ARE A PROGRAMMER? PROVE IT IN THE FINAL EXAM!";

pub fn mode_tagline(mode: GameMode) -> &'static str {
    match mode {
        GameMode::TimedQuiz => "Algorithm Speed Challenge",
        GameMode::EliminationTap => "Memory Core Activation",
        GameMode::BugRepair => "System Integrity Repair",
        GameMode::ScenarioQuiz => "AI Decision Engine Training",
    }
}

pub fn character_card(c: &'static Character) -> CharacterCard {
    CharacterCard {
        id: c.id,
        name: c.name,
        avatar: c.avatar,
        description: c.description,
        ability: c.ability.name,
        ability_description: c.ability.description,
    }
}

fn mode_cards(session: &Session) -> Vec<ModeCard> {
    GameMode::ALL
        .iter()
        .map(|&mode| ModeCard {
            mode,
            title: mode.title(),
            tagline: mode_tagline(mode),
            badge: mode.badge(),
            completed: session.completed_modes().contains(&mode),
        })
        .collect()
}

fn badge_names(session: &Session) -> Vec<&'static str> {
    session.badges().iter().map(|m| m.badge()).collect()
}

fn hud(session: &Session) -> Hud {
    let power = if session.power_consumed() && !session.power_active() {
        PowerState::Used
    } else if session.power_active() {
        PowerState::Active
    } else {
        PowerState::Ready
    };
    Hud {
        score: session.score(),
        difficulty: session.difficulty(),
        character: session.character().map(character_card),
        power,
        badges: badge_names(session),
    }
}

fn choice_options(values: impl Iterator<Item = (&'static str, &'static str)>, erased: Option<&'static str>) -> Vec<OptionView> {
    values
        .map(|(label, value)| OptionView { label, value, erased: erased == Some(value) })
        .collect()
}

/// Project the session onto the frame for its current screen.
pub fn to_view(session: &Session) -> ScreenView {
    use crate::domain::Screen;

    match session.screen() {
        Screen::Intro => ScreenView::Intro,
        Screen::HowToPlay => ScreenView::HowToPlay {
            modes: mode_cards(session),
            characters: session.store().characters().iter().map(character_card).collect(),
        },
        Screen::CharacterSelect => ScreenView::CharacterSelect {
            characters: session.store().characters().iter().map(character_card).collect(),
        },
        Screen::DifficultySelect => ScreenView::DifficultySelect {
            character: session.character().map(character_card),
            difficulty: session.difficulty(),
        },
        Screen::Menu => ScreenView::Menu {
            hud: hud(session),
            modes: mode_cards(session),
            boss_unlocked: session.boss_unlocked(),
        },
        Screen::Playing => playing_view(session).unwrap_or_else(|| ScreenView::Menu {
            hud: hud(session),
            modes: mode_cards(session),
            boss_unlocked: session.boss_unlocked(),
        }),
        Screen::BossRound => ScreenView::BossRound { hud: hud(session), taunt: BOSS_TAUNT },
        Screen::Results => ScreenView::Results {
            score: session.score(),
            badges: badge_names(session),
            character: session.character().map(|c| c.name),
        },
    }
}

fn playing_view(session: &Session) -> Option<ScreenView> {
    let play = session.play()?;
    let tier = session.difficulty();
    let item = session.store().get_item(play.mode, tier, play.cursor)?;

    let body = match (item, &play.board) {
        (RoundItem::Question(q), Board::Choice(b)) => PlayBody::Quiz {
            question: q.text,
            difficulty: q.difficulty,
            options: choice_options(q.options.iter().map(|o| (*o, *o)), b.erased),
            time_left: b.time_left,
            continue_left: b.continue_left,
        },
        (RoundItem::Quest(q), Board::Choice(b)) => PlayBody::Scenario {
            scenario: q.scenario,
            options: choice_options(q.options.iter().map(|o| (o.label, o.value)), b.erased),
            reasoning: session
                .feedback()
                .filter(|f| f.kind == FeedbackKind::Success)
                .map(|_| q.reasoning),
        },
        (RoundItem::Tap(own), Board::Tap(t)) => {
            let round = t
                .topic_override
                .and_then(|i| session.store().tap_rounds(tier).get(i))
                .unwrap_or(own);
            PlayBody::Tap {
                category: round.category,
                examples: round.examples,
                used: t.used().iter().copied().collect(),
                last: t.last_letter(),
                seconds_left: t.seconds_left(),
                running: t.is_running(),
                failed: t.is_failed(),
            }
        }
        (RoundItem::Glitch(g), Board::Repair(r)) => PlayBody::Repair {
            corrupted_code: g.corrupted_code,
            error: g.error,
            hint: r.hint_visible.then_some(g.hint),
            analysis: r.analysis_visible.then_some(Analysis {
                cause: g.cause,
                fix: g.fix,
                explanation: g.explanation,
            }),
        },
        _ => return None,
    };

    Some(ScreenView::Playing {
        hud: hud(session),
        mode: play.mode,
        title: play.mode.title(),
        round: play.cursor + 1,
        rounds: session.round_count(),
        feedback: session.feedback().cloned(),
        complete: play.finished,
        body,
    })
}
