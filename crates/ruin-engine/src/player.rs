//! Player state: resource tracks and inventory.

use serde::{Deserialize, Serialize};

/// The three artifacts that unseal the temple.
pub const REQUIRED_ARTIFACTS: [&str; 3] = ["crystal orb", "glyph tablet", "alien shard"];

/// The artifact that lets the player win the final fight.
pub const CRYSTAL_ORB: &str = "crystal orb";

/// The artifact an alien may gift to a player who can speak with it.
pub const ALIEN_SHARD: &str = "alien shard";

/// Starting value for health and sanity.
const STARTING_TRACK: i32 = 10;

/// The explorer's current state.
///
/// Health and sanity may drop below zero; the turn loop treats anything at
/// or below zero as a collapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    health: i32,
    sanity: i32,
    knowledge: u32,
    inventory: Vec<String>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// A fresh explorer: 10 health, 10 sanity, no knowledge, empty pack.
    pub fn new() -> Self {
        Self {
            health: STARTING_TRACK,
            sanity: STARTING_TRACK,
            knowledge: 0,
            inventory: Vec::new(),
        }
    }

    /// Current health.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current sanity.
    pub fn sanity(&self) -> i32 {
        self.sanity
    }

    /// Accumulated knowledge of the alien tongue.
    pub fn knowledge(&self) -> u32 {
        self.knowledge
    }

    /// Items held, in the order they were found.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Apply a health delta. Returns the new value.
    pub fn adjust_health(&mut self, delta: i32) -> i32 {
        self.health += delta;
        self.health
    }

    /// Apply a sanity delta. Returns the new value.
    pub fn adjust_sanity(&mut self, delta: i32) -> i32 {
        self.sanity += delta;
        self.sanity
    }

    /// Add to knowledge. Knowledge only grows. Returns the new value.
    pub fn adjust_knowledge(&mut self, delta: u32) -> u32 {
        self.knowledge = self.knowledge.saturating_add(delta);
        self.knowledge
    }

    /// Add an item. Returns `false` if it was already held.
    pub fn add_item(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_artifact(&name) {
            return false;
        }
        self.inventory.push(name);
        true
    }

    /// Check if the player holds an item.
    pub fn has_artifact(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i == name)
    }

    /// Whether every required artifact is held.
    pub fn has_all_required(&self) -> bool {
        REQUIRED_ARTIFACTS.iter().all(|a| self.has_artifact(a))
    }

    /// Required artifacts not yet found.
    pub fn missing_artifacts(&self) -> Vec<&'static str> {
        REQUIRED_ARTIFACTS
            .iter()
            .copied()
            .filter(|a| !self.has_artifact(a))
            .collect()
    }

    /// Whether body or mind has given out.
    pub fn is_collapsed(&self) -> bool {
        self.health <= 0 || self.sanity <= 0
    }

    /// One-line summary of the three tracks.
    pub fn stats_line(&self) -> String {
        format!(
            "❤️ Health: {} | 🧠 Sanity: {} | 📖 Knowledge: {}",
            self.health, self.sanity, self.knowledge
        )
    }

    /// One-line summary of the pack and what the temple still wants.
    pub fn inventory_line(&self) -> String {
        let held = if self.inventory.is_empty() {
            "(empty)".to_string()
        } else {
            self.inventory.join(", ")
        };
        let missing = self.missing_artifacts();
        if missing.is_empty() {
            format!("🎒 Inventory: {held} | The temple will open.")
        } else {
            format!("🎒 Inventory: {held} | Still sought: {}", missing.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fully_equipped() -> PlayerState {
        let mut p = PlayerState::new();
        for a in REQUIRED_ARTIFACTS {
            p.add_item(a);
        }
        p
    }

    #[test]
    fn starting_state() {
        let p = PlayerState::new();
        assert_eq!(p.health(), 10);
        assert_eq!(p.sanity(), 10);
        assert_eq!(p.knowledge(), 0);
        assert!(p.inventory().is_empty());
        assert!(!p.is_collapsed());
    }

    #[test]
    fn deltas_go_below_zero() {
        let mut p = PlayerState::new();
        assert_eq!(p.adjust_health(-12), -2);
        assert_eq!(p.adjust_sanity(-3), 7);
        assert!(p.is_collapsed());
    }

    #[test]
    fn sanity_zero_is_collapse() {
        let mut p = PlayerState::new();
        p.adjust_sanity(-10);
        assert_eq!(p.sanity(), 0);
        assert!(p.is_collapsed());
    }

    #[test]
    fn knowledge_grows() {
        let mut p = PlayerState::new();
        p.adjust_knowledge(1);
        assert_eq!(p.adjust_knowledge(2), 3);
    }

    #[test]
    fn inventory_has_no_duplicates() {
        let mut p = PlayerState::new();
        assert!(p.add_item("crystal orb"));
        assert!(!p.add_item("crystal orb"));
        assert_eq!(p.inventory().len(), 1);
        assert!(p.has_artifact("crystal orb"));
        assert!(!p.has_artifact("alien shard"));
    }

    #[test]
    fn required_set_needs_all_three() {
        let mut p = PlayerState::new();
        assert!(!p.has_all_required());
        p.add_item("crystal orb");
        p.add_item("glyph tablet");
        assert!(!p.has_all_required());
        assert_eq!(p.missing_artifacts(), vec!["alien shard"]);
        p.add_item("alien shard");
        assert!(p.has_all_required());
        assert!(p.missing_artifacts().is_empty());
    }

    #[test]
    fn extra_items_do_not_matter() {
        let mut p = fully_equipped();
        p.add_item("strange pebble");
        assert!(p.has_all_required());
    }

    #[test]
    fn stats_line_snapshot() {
        insta::assert_snapshot!(
            PlayerState::new().stats_line(),
            @"❤️ Health: 10 | 🧠 Sanity: 10 | 📖 Knowledge: 0"
        );
    }

    #[test]
    fn inventory_line_lists_missing() {
        let mut p = PlayerState::new();
        assert!(p.inventory_line().contains("(empty)"));
        p.add_item("glyph tablet");
        let line = p.inventory_line();
        assert!(line.contains("glyph tablet"));
        assert!(line.contains("Still sought: crystal orb, alien shard"));
        assert!(fully_equipped().inventory_line().contains("temple will open"));
    }

    #[test]
    fn serde_roundtrip() {
        let p = fully_equipped();
        let json = serde_json::to_string(&p).unwrap();
        let back: PlayerState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
