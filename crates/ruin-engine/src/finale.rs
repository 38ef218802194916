//! The final encounter in the temple.
//!
//! One question, one answer, one ending. Fighting needs the crystal orb;
//! talking needs fluency. Everything else is death.

use serde::{Deserialize, Serialize};

use crate::context::TurnContext;
use crate::error::GameResult;
use crate::player::{CRYSTAL_ORB, PlayerState};

/// What the guardian proclaims.
pub const GUARDIAN_PROCLAMATION: &str = "ONLY ONE MAY ASCEND";

/// Knowledge needed to talk the guardian down.
pub const FLUENCY: u32 = 5;

/// How an expedition that reaches the guardian ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ending {
    /// The guardian falls to the crystal orb.
    Ascension,
    /// The guardian is persuaded.
    Understanding,
    /// The guardian wins.
    Death,
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascension => write!(f, "Ascension"),
            Self::Understanding => write!(f, "Understanding"),
            Self::Death => write!(f, "Death"),
        }
    }
}

impl Ending {
    /// Closing narration for this ending.
    pub fn epilogue(&self) -> &'static str {
        match self {
            Self::Ascension => "🌌 Ending: You ascend beyond mortal form, joining the alien stars.",
            Self::Understanding => {
                "📖 Ending: You become the first human fluent in the alien tongue, bridging worlds."
            }
            Self::Death => "💀 Ending: The ruins claim another soul. Silence returns.",
        }
    }

    /// Whether the player survives.
    pub fn is_victory(&self) -> bool {
        !matches!(self, Self::Death)
    }
}

/// The player's answer to the guardian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinaleChoice {
    /// Option 1.
    Fight,
    /// Option 2.
    Communicate,
    /// Option 3, and anything that is not 1 or 2.
    Surrender,
}

impl std::fmt::Display for FinaleChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fight => write!(f, "fight"),
            Self::Communicate => write!(f, "communicate"),
            Self::Surrender => write!(f, "surrender"),
        }
    }
}

impl FinaleChoice {
    /// Parse an answer; unrecognised answers mean surrender.
    pub fn parse(answer: &str) -> Self {
        match answer.trim() {
            "1" => Self::Fight,
            "2" => Self::Communicate,
            _ => Self::Surrender,
        }
    }
}

/// Decide the ending for a choice. No randomness is involved.
pub fn decide_ending(choice: FinaleChoice, player: &PlayerState) -> Ending {
    match choice {
        FinaleChoice::Fight if player.has_artifact(CRYSTAL_ORB) => Ending::Ascension,
        FinaleChoice::Communicate if player.knowledge() >= FLUENCY => Ending::Understanding,
        _ => Ending::Death,
    }
}

/// The choice made and the ending it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinaleOutcome {
    /// What the player chose.
    pub choice: FinaleChoice,
    /// How it ended.
    pub ending: Ending,
}

/// Play out the encounter with the temple guardian.
pub fn final_battle(ctx: &mut TurnContext<'_>) -> GameResult<FinaleOutcome> {
    ctx.narrate("🏛 You step into the obsidian temple. Glyphs ignite across the walls...")?;
    ctx.narrate("A towering alien guardian emerges, its form shifting between flesh and crystal.")?;
    let heard = ctx.glyphs.obscure(GUARDIAN_PROCLAMATION, ctx.player.knowledge());
    ctx.narrate(format!("It proclaims: {heard}"))?;

    let answer = ctx.ask("Do you [1] fight, [2] attempt to communicate, [3] surrender? ")?;
    let choice = FinaleChoice::parse(&answer);
    let ending = decide_ending(choice, ctx.player);

    match (choice, ending) {
        (FinaleChoice::Fight, Ending::Ascension) => {
            ctx.narrate("⚔️ With the crystal orb, your strikes resonate with alien energy!")?;
            ctx.narrate("The guardian shatters. You ascend into starlight... 🌌")?;
        }
        (FinaleChoice::Fight, _) => {
            ctx.narrate("☠️ The guardian overwhelms you. Your journey ends here...")?;
        }
        (FinaleChoice::Communicate, Ending::Understanding) => {
            ctx.narrate("✨ You speak the alien tongue fluently now.")?;
            ctx.narrate("The guardian kneels and grants you passage beyond the stars.")?;
        }
        (FinaleChoice::Communicate, _) => {
            ctx.narrate("Your words falter... the guardian strikes you down.")?;
        }
        (FinaleChoice::Surrender, _) => {
            ctx.narrate("You kneel before the guardian... it engulfs you in eternal darkness.")?;
        }
    }

    Ok(FinaleOutcome { choice, ending })
}
