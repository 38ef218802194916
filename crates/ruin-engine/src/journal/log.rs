//! Journal storage and export.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;
use crate::error::GameResult;

/// A chronological log of an expedition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time between the first and the last entry.
    pub fn elapsed(&self) -> TimeDelta {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => last.timestamp() - first.timestamp(),
            _ => TimeDelta::zero(),
        }
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Expedition Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Departure { seed, timestamp } => {
                    out.push_str(&format!(
                        "*Departed {}* (seed {seed})\n\n",
                        timestamp.format("%Y-%m-%d %H:%M UTC")
                    ));
                }
                JournalEntry::Arrival { turn, location, .. } => {
                    out.push_str(&format!("## Turn {turn}: {location}\n\n"));
                }
                JournalEntry::Event { event, outcome, .. } => {
                    out.push_str(&format!("**{event}**: {outcome}\n\n"));
                }
                JournalEntry::Refused {
                    turn,
                    input,
                    reason,
                    ..
                } => {
                    out.push_str(&format!("> Turn {turn}, \"{input}\": {reason}\n\n"));
                }
                JournalEntry::Finale { choice, ending, .. } => {
                    out.push_str(&format!("**Final encounter** ({choice}): **{ending}**\n\n"));
                }
                JournalEntry::Collapse {
                    turn,
                    health,
                    sanity,
                    ..
                } => {
                    out.push_str(&format!(
                        "**Collapsed** on turn {turn} (health {health}, sanity {sanity})\n\n"
                    ));
                }
                JournalEntry::Quit { turn, .. } => {
                    out.push_str(&format!("*Turned back on turn {turn}.*\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Expedition Journal\n==================\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Departure { seed, timestamp } => {
                    out.push_str(&format!("Departed {timestamp} (seed {seed})\n\n"));
                }
                JournalEntry::Arrival { turn, location, .. } => {
                    out.push_str(&format!("--- Turn {turn}: {location} ---\n"));
                }
                JournalEntry::Event { event, outcome, .. } => {
                    out.push_str(&format!("{event}: {outcome}\n\n"));
                }
                JournalEntry::Refused {
                    turn,
                    input,
                    reason,
                    ..
                } => {
                    out.push_str(&format!("Turn {turn} refused ({input}): {reason}\n\n"));
                }
                JournalEntry::Finale { choice, ending, .. } => {
                    out.push_str(&format!("Final encounter ({choice}): {ending}\n\n"));
                }
                JournalEntry::Collapse {
                    turn,
                    health,
                    sanity,
                    ..
                } => {
                    out.push_str(&format!(
                        "Collapsed on turn {turn} (health {health}, sanity {sanity})\n\n"
                    ));
                }
                JournalEntry::Quit { turn, .. } => {
                    out.push_str(&format!("Turned back on turn {turn}.\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as pretty-printed JSON.
    pub fn export_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> Journal {
        let mut j = Journal::new();
        j.append(JournalEntry::Departure {
            seed: 7,
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::Arrival {
            turn: 1,
            location: "ruins".into(),
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::Event {
            turn: 1,
            location: "ruins".into(),
            event: "Trap".into(),
            outcome: "a dart strikes (-2 health)".into(),
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::Refused {
            turn: 2,
            input: "moon".into(),
            reason: "That path does not exist.".into(),
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::Finale {
            turn: 3,
            choice: "fight".into(),
            ending: "Ascension".into(),
            timestamp: Utc::now(),
        });
        j
    }

    #[test]
    fn empty_journal() {
        let j = Journal::new();
        assert!(j.is_empty());
        assert_eq!(j.len(), 0);
        assert_eq!(j.export_markdown(), "# Expedition Journal\n\n");
    }

    #[test]
    fn append_and_len() {
        let j = sample();
        assert_eq!(j.len(), 5);
        assert!(!j.is_empty());
        assert!(j.entries()[0].timestamp() <= j.entries()[4].timestamp());
    }

    #[test]
    fn elapsed_spans_first_to_last() {
        assert_eq!(Journal::new().elapsed(), TimeDelta::zero());

        let start = Utc::now();
        let mut j = Journal::new();
        j.append(JournalEntry::Departure {
            seed: 1,
            timestamp: start,
        });
        j.append(JournalEntry::Quit {
            turn: 4,
            timestamp: start + TimeDelta::seconds(90),
        });
        assert_eq!(j.elapsed().num_seconds(), 90);
    }

    #[test]
    fn markdown_export() {
        let md = sample().export_markdown();
        assert!(md.contains("(seed 7)"));
        assert!(md.contains("## Turn 1: ruins"));
        assert!(md.contains("**Trap**: a dart strikes (-2 health)"));
        assert!(md.contains("\"moon\": That path does not exist."));
        assert!(md.contains("**Final encounter** (fight): **Ascension**"));
    }

    #[test]
    fn text_export() {
        let txt = sample().export_text();
        assert!(txt.starts_with("Expedition Journal\n"));
        assert!(txt.contains("--- Turn 1: ruins ---"));
        assert!(txt.contains("Final encounter (fight): Ascension"));
    }

    #[test]
    fn json_roundtrip() {
        let json = sample().export_json().unwrap();
        let back: Journal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 5);
        assert!(matches!(
            back.entries()[2],
            JournalEntry::Event { ref event, .. } if event == "Trap"
        ));
    }

    #[test]
    fn collapse_and_quit_render() {
        let mut j = Journal::new();
        j.append(JournalEntry::Collapse {
            turn: 9,
            health: -2,
            sanity: 4,
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::Quit {
            turn: 9,
            timestamp: Utc::now(),
        });
        let md = j.export_markdown();
        assert!(md.contains("Collapsed** on turn 9 (health -2, sanity 4)"));
        assert!(md.contains("Turned back on turn 9"));
    }
}
