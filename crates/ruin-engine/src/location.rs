//! Locations and the rules for entering them.

use serde::{Deserialize, Serialize};

use crate::context::TurnContext;
use crate::error::{GameError, GameResult};
use crate::event::{EventOutcome, explore};
use crate::finale::{Ending, FinaleOutcome, final_battle};
use crate::player::PlayerState;

/// A place the player can go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Broken monoliths.
    Ruins,
    /// Humming alien growth.
    Jungle,
    /// Crystal echoes.
    Caves,
    /// The sealed obsidian temple.
    Temple,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Location {
    /// All locations, in menu order.
    pub const ALL: [Self; 4] = [Self::Ruins, Self::Jungle, Self::Caves, Self::Temple];

    /// Parse a location name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ruins" => Some(Self::Ruins),
            "jungle" => Some(Self::Jungle),
            "caves" => Some(Self::Caves),
            "temple" => Some(Self::Temple),
            _ => None,
        }
    }

    /// The name the player types.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ruins => "ruins",
            Self::Jungle => "jungle",
            Self::Caves => "caves",
            Self::Temple => "temple",
        }
    }

    /// What the player sees on arrival.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ruins => "Broken monoliths and glowing glyphs whisper forgotten truths.",
            Self::Jungle => "The alien jungle hums with unseen life. The air vibrates.",
            Self::Caves => "Crystal walls shimmer, and echoes twist into voices.",
            Self::Temple => "The obsidian temple looms... sealed until you hold 3 artifacts.",
        }
    }

    /// Whether the player is kept out.
    pub fn is_sealed_for(&self, player: &PlayerState) -> bool {
        matches!(self, Self::Temple) && !player.has_all_required()
    }
}

/// What happened on a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// An ordinary location was explored.
    Explored {
        /// Where.
        location: Location,
        /// What happened there.
        outcome: EventOutcome,
    },
    /// The temple opened and the guardian was faced.
    Finale(FinaleOutcome),
}

impl Visit {
    /// Where the visit took place.
    pub fn location(&self) -> Location {
        match self {
            Self::Explored { location, .. } => *location,
            Self::Finale(_) => Location::Temple,
        }
    }

    /// The ending reached, if the visit ended the expedition.
    pub fn ending(&self) -> Option<Ending> {
        match self {
            Self::Explored { .. } => None,
            Self::Finale(outcome) => Some(outcome.ending),
        }
    }
}

/// Enter a location by name.
///
/// Unknown names and the sealed temple are refused without touching the
/// player. The open temple leads to the final encounter; anywhere else rolls
/// an exploration event.
pub fn enter(name: &str, ctx: &mut TurnContext<'_>) -> GameResult<Visit> {
    let location =
        Location::parse(name).ok_or_else(|| GameError::UnknownLocation(name.to_string()))?;

    if location.is_sealed_for(ctx.player) {
        return Err(GameError::TempleSealed {
            missing: ctx.player.missing_artifacts().len(),
        });
    }

    ctx.narrate(format!(
        "You enter the {}: {}",
        location.name().to_uppercase(),
        location.description()
    ))?;

    match location {
        Location::Temple => Ok(Visit::Finale(final_battle(ctx)?)),
        _ => Ok(Visit::Explored {
            location,
            outcome: explore(ctx)?,
        }),
    }
}
