//! Exploration events.
//!
//! Every visit to a location other than the temple rolls one of six events
//! with equal odds and resolves it against the player's state. Two events
//! ask the player a question; bad answers fall through to the safe branch.

use serde::{Deserialize, Serialize};

use crate::context::TurnContext;
use crate::error::GameResult;
use crate::fate::Fate;
use crate::player::{ALIEN_SHARD, REQUIRED_ARTIFACTS};

/// What the alien says in an encounter.
pub const ALIEN_WARNING: &str = "JOIN US OR PERISH";

/// Words the glyph puzzle can ask for.
pub const GLYPH_WORDS: [&str; 5] = ["LIFE", "VOID", "STAR", "FIRE", "TIME"];

/// Knowledge above which an alien will listen.
const COMMUNICATION_THRESHOLD: u32 = 2;

/// One thing that can happen while exploring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuinEvent {
    /// A shadowy entity confronts the player.
    AlienEncounter,
    /// One of the temple keys turns up.
    FindArtifact,
    /// Scrambled glyphs to translate.
    GlyphPuzzle,
    /// A psychic wave.
    MadnessVision,
    /// A hidden mechanism.
    Trap,
    /// Silence.
    Nothing,
}

impl std::fmt::Display for RuinEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlienEncounter => write!(f, "Alien Encounter"),
            Self::FindArtifact => write!(f, "Find Artifact"),
            Self::GlyphPuzzle => write!(f, "Glyph Puzzle"),
            Self::MadnessVision => write!(f, "Madness Vision"),
            Self::Trap => write!(f, "Trap"),
            Self::Nothing => write!(f, "Nothing"),
        }
    }
}

impl RuinEvent {
    /// All events, in roll order.
    pub const ALL: [Self; 6] = [
        Self::AlienEncounter,
        Self::FindArtifact,
        Self::GlyphPuzzle,
        Self::MadnessVision,
        Self::Trap,
        Self::Nothing,
    ];

    /// Roll an event with equal odds.
    pub fn roll(fate: &mut dyn Fate) -> Self {
        match fate.index(Self::ALL.len()) {
            0 => Self::AlienEncounter,
            1 => Self::FindArtifact,
            2 => Self::GlyphPuzzle,
            3 => Self::MadnessVision,
            4 => Self::Trap,
            5 => Self::Nothing,
            _ => unreachable!(),
        }
    }
}

/// The player's answer to an alien.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterChoice {
    /// Option 1.
    Fight,
    /// Option 2.
    Communicate,
    /// Option 3, and anything that is not 1 or 2.
    Flee,
}

impl EncounterChoice {
    /// Parse an answer; unrecognised answers mean fleeing.
    pub fn parse(answer: &str) -> Self {
        match answer.trim() {
            "1" => Self::Fight,
            "2" => Self::Communicate,
            _ => Self::Flee,
        }
    }
}

/// A resolved event and a short account of what came of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
    /// Which event happened.
    pub event: RuinEvent,
    /// What came of it, for the journal.
    pub outcome: String,
}

/// Roll and resolve one event.
pub fn explore(ctx: &mut TurnContext<'_>) -> GameResult<EventOutcome> {
    let event = RuinEvent::roll(ctx.fate);
    resolve_event(event, ctx)
}

/// Resolve a specific event against the player.
pub fn resolve_event(event: RuinEvent, ctx: &mut TurnContext<'_>) -> GameResult<EventOutcome> {
    let outcome = match event {
        RuinEvent::AlienEncounter => alien_encounter(ctx)?,
        RuinEvent::FindArtifact => find_artifact(ctx)?,
        RuinEvent::GlyphPuzzle => glyph_puzzle(ctx)?,
        RuinEvent::MadnessVision => madness_vision(ctx)?,
        RuinEvent::Trap => trap(ctx)?,
        RuinEvent::Nothing => {
            ctx.narrate("The silence here feels heavy... but nothing happens.")?;
            "nothing happened".to_string()
        }
    };
    Ok(EventOutcome { event, outcome })
}

fn alien_encounter(ctx: &mut TurnContext<'_>) -> GameResult<String> {
    ctx.narrate("👁 A shadowy alien entity appears, its form shifting like smoke...")?;
    let heard = ctx.glyphs.obscure(ALIEN_WARNING, ctx.player.knowledge());
    ctx.narrate(format!("It utters: {heard}"))?;

    let answer = ctx.ask("Do you [1] fight, [2] communicate, [3] flee? ")?;
    match EncounterChoice::parse(&answer) {
        EncounterChoice::Fight => {
            if ctx.fate.coin() {
                ctx.narrate("⚔️ You strike bravely! The alien dissolves into mist.")?;
                ctx.player.adjust_sanity(-1);
                Ok("fought and won (-1 sanity)".to_string())
            } else {
                ctx.narrate("☠️ The alien engulfs you in shadows. You barely escape.")?;
                ctx.player.adjust_health(-3);
                Ok("fought and lost (-3 health)".to_string())
            }
        }
        EncounterChoice::Communicate => {
            if ctx.player.knowledge() > COMMUNICATION_THRESHOLD {
                ctx.narrate("✨ The alien seems to understand... it gifts you an artifact.")?;
                if ctx.player.add_item(ALIEN_SHARD) {
                    Ok(format!("communicated and received the {ALIEN_SHARD}"))
                } else {
                    Ok(format!("communicated; already carried the {ALIEN_SHARD}"))
                }
            } else {
                ctx.narrate("The alien tilts its head... then vanishes, leaving you drained.")?;
                ctx.player.adjust_sanity(-2);
                Ok("failed to communicate (-2 sanity)".to_string())
            }
        }
        EncounterChoice::Flee => {
            ctx.narrate("You retreat quickly, your heart pounding.")?;
            Ok("fled".to_string())
        }
    }
}

fn find_artifact(ctx: &mut TurnContext<'_>) -> GameResult<String> {
    let artifact = REQUIRED_ARTIFACTS[ctx.fate.index(REQUIRED_ARTIFACTS.len())];
    if ctx.player.add_item(artifact) {
        ctx.narrate(format!("🔮 You discover a {artifact}!"))?;
        Ok(format!("found the {artifact}"))
    } else {
        ctx.narrate("You find broken remnants of something once powerful...")?;
        Ok(format!("found remnants of another {artifact}"))
    }
}

/// Shuffle the letters of `word` into the order given by `order`.
fn scramble(word: &str, order: &[usize]) -> String {
    let letters: Vec<char> = word.chars().collect();
    order.iter().map(|&i| letters[i]).collect()
}

fn glyph_puzzle(ctx: &mut TurnContext<'_>) -> GameResult<String> {
    ctx.narrate("You find glowing alien glyphs carved into the stone...")?;
    let word = GLYPH_WORDS[ctx.fate.index(GLYPH_WORDS.len())];
    let order = ctx.fate.permutation(word.chars().count());
    let scrambled = scramble(word, &order);
    let left = ctx.glyphs.generate(10);
    let right = ctx.glyphs.generate(10);
    ctx.narrate(format!("The glyphs rearrange: {left} [{scrambled}] {right}"))?;

    let guess = ctx.ask("Translate the glyph word: ")?.trim().to_uppercase();
    if guess == word {
        ctx.narrate("🌟 The glyphs shine brighter... knowledge flows into you.")?;
        ctx.player.adjust_knowledge(1);
        Ok(format!("translated {word} (+1 knowledge)"))
    } else {
        ctx.narrate("⚡ The glyphs reject you. A psychic backlash shakes your mind.")?;
        ctx.player.adjust_sanity(-2);
        Ok(format!("mistranslated {word} (-2 sanity)"))
    }
}

fn madness_vision(ctx: &mut TurnContext<'_>) -> GameResult<String> {
    ctx.narrate("🌑 A wave of psychic energy crashes over you...")?;
    let vision = ctx.glyphs.generate(40);
    ctx.narrate(format!("Visions flood your mind: {vision}"))?;
    ctx.player.adjust_sanity(-1);
    Ok("suffered visions (-1 sanity)".to_string())
}

fn trap(ctx: &mut TurnContext<'_>) -> GameResult<String> {
    ctx.narrate("⚠️ A hidden alien mechanism activates! A dart strikes you...")?;
    ctx.player.adjust_health(-2);
    Ok("struck by a dart (-2 health)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestRig;
    use crate::fate::ScriptedFate;
    use crate::io::Tone;
    use crate::player::CRYSTAL_ORB;

    #[test]
    fn roll_follows_fate() {
        for (i, expected) in RuinEvent::ALL.iter().enumerate() {
            let mut fate = ScriptedFate::new([i]);
            assert_eq!(RuinEvent::roll(&mut fate), *expected);
        }
    }

    #[test]
    fn seeded_rolls_cover_every_event() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let seen: std::collections::HashSet<_> =
            (0..300).map(|_| RuinEvent::roll(&mut rng)).collect();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn encounter_choice_parsing() {
        assert_eq!(EncounterChoice::parse("1"), EncounterChoice::Fight);
        assert_eq!(EncounterChoice::parse(" 2 "), EncounterChoice::Communicate);
        assert_eq!(EncounterChoice::parse("3"), EncounterChoice::Flee);
        assert_eq!(EncounterChoice::parse("attack"), EncounterChoice::Flee);
        assert_eq!(EncounterChoice::parse(""), EncounterChoice::Flee);
    }

    #[test]
    fn fight_and_win_costs_sanity() {
        let mut rig = TestRig::new(&[0, 0], &["1"]);
        let out = explore(&mut rig.ctx()).unwrap();
        assert_eq!(out.event, RuinEvent::AlienEncounter);
        assert_eq!(rig.player.sanity(), 9);
        assert_eq!(rig.player.health(), 10);
    }

    #[test]
    fn fight_and_lose_costs_health() {
        let mut rig = TestRig::new(&[0, 1], &["1"]);
        let out = explore(&mut rig.ctx()).unwrap();
        assert!(out.outcome.contains("lost"));
        assert_eq!(rig.player.health(), 7);
        assert_eq!(rig.player.sanity(), 10);
    }

    #[test]
    fn communicate_without_knowledge_drains() {
        let mut rig = TestRig::new(&[0], &["2"]);
        explore(&mut rig.ctx()).unwrap();
        assert_eq!(rig.player.sanity(), 8);
        assert!(!rig.player.has_artifact(ALIEN_SHARD));
    }

    #[test]
    fn communicate_needs_more_than_two_knowledge() {
        let mut rig = TestRig::new(&[0], &["2"]);
        rig.player.adjust_knowledge(2);
        explore(&mut rig.ctx()).unwrap();
        assert_eq!(rig.player.sanity(), 8);
        assert!(!rig.player.has_artifact(ALIEN_SHARD));

        let mut rig = TestRig::new(&[0], &["2"]);
        rig.player.adjust_knowledge(3);
        explore(&mut rig.ctx()).unwrap();
        assert_eq!(rig.player.sanity(), 10);
        assert!(rig.player.has_artifact(ALIEN_SHARD));
    }

    #[test]
    fn flee_and_nonsense_change_nothing() {
        for answer in ["3", "run away", ""] {
            let mut rig = TestRig::new(&[0], &[answer]);
            let out = explore(&mut rig.ctx()).unwrap();
            assert_eq!(out.outcome, "fled");
            assert_eq!(rig.player, crate::player::PlayerState::new());
        }
    }

    #[test]
    fn encounter_speech_is_fogged_without_knowledge() {
        let mut rig = TestRig::new(&[0], &["3"]);
        explore(&mut rig.ctx()).unwrap();
        assert!(!rig.output.contains("PERISH"));
        assert!(rig.output.contains("It utters:"));
    }

    #[test]
    fn encounter_speech_is_clear_with_knowledge() {
        let mut rig = TestRig::new(&[0], &["3"]);
        rig.player.adjust_knowledge(34);
        explore(&mut rig.ctx()).unwrap();
        assert!(rig.output.contains("It utters: JOIN US OR PERISH"));
    }

    #[test]
    fn find_new_artifact() {
        let mut rig = TestRig::new(&[1, 0], &[]);
        let out = explore(&mut rig.ctx()).unwrap();
        assert_eq!(out.event, RuinEvent::FindArtifact);
        assert!(rig.player.has_artifact(CRYSTAL_ORB));
        assert!(rig.output.contains("You discover a crystal orb!"));
    }

    #[test]
    fn find_duplicate_artifact_is_flavour() {
        let mut rig = TestRig::new(&[1, 2], &[]);
        rig.player.add_item(ALIEN_SHARD);
        let before = rig.player.clone();
        explore(&mut rig.ctx()).unwrap();
        assert_eq!(rig.player, before);
        assert!(rig.output.contains("broken remnants"));
    }

    #[test]
    fn glyph_puzzle_correct_guess() {
        // word index 1 = VOID, scripted permutation reverses it
        let mut rig = TestRig::new(&[2, 1], &["  void \n"]);
        let out = explore(&mut rig.ctx()).unwrap();
        assert_eq!(out.event, RuinEvent::GlyphPuzzle);
        assert!(rig.output.contains("[DIOV]"));
        assert_eq!(rig.player.knowledge(), 1);
        assert_eq!(rig.player.sanity(), 10);
    }

    #[test]
    fn glyph_puzzle_wrong_guess() {
        let mut rig = TestRig::new(&[2, 3], &["fear"]);
        explore(&mut rig.ctx()).unwrap();
        assert_eq!(rig.player.knowledge(), 0);
        assert_eq!(rig.player.sanity(), 8);
    }

    #[test]
    fn glyph_puzzle_with_no_answer_is_wrong() {
        let mut rig = TestRig::new(&[2, 0], &[]);
        explore(&mut rig.ctx()).unwrap();
        assert_eq!(rig.player.knowledge(), 0);
        assert_eq!(rig.player.sanity(), 8);
    }

    #[test]
    fn scramble_uses_every_letter() {
        assert_eq!(scramble("STAR", &[3, 2, 1, 0]), "RATS");
        assert_eq!(scramble("TIME", &[0, 1, 2, 3]), "TIME");
    }

    #[test]
    fn madness_costs_one_sanity() {
        let mut rig = TestRig::new(&[3], &[]);
        explore(&mut rig.ctx()).unwrap();
        assert_eq!(rig.player.sanity(), 9);
        assert!(rig.output.contains("Visions flood your mind"));
    }

    #[test]
    fn trap_costs_two_health() {
        let mut rig = TestRig::new(&[4], &[]);
        explore(&mut rig.ctx()).unwrap();
        assert_eq!(rig.player.health(), 8);
    }

    #[test]
    fn nothing_changes_nothing() {
        let mut rig = TestRig::new(&[5], &[]);
        let out = explore(&mut rig.ctx()).unwrap();
        assert_eq!(out.event, RuinEvent::Nothing);
        assert_eq!(rig.player, crate::player::PlayerState::new());
        assert_eq!(rig.output.count(Tone::Narration), 1);
        assert!(rig.input.prompts().is_empty());
    }

    #[test]
    fn event_display() {
        assert_eq!(RuinEvent::AlienEncounter.to_string(), "Alien Encounter");
        assert_eq!(RuinEvent::Nothing.to_string(), "Nothing");
    }
}
