//! Append-only log of life changes and game outcomes.
//!
//! Entries capture the player's name at the time of the event, so renaming
//! a player later does not rewrite the log. The log is only ever appended
//! to or cleared as a whole.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A single logged event.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A positive life adjustment.
    Gained { player: PlayerId, name: String, amount: u64 },
    /// A negative life adjustment.
    Lost { player: PlayerId, name: String, amount: u64 },
    /// The last player standing.
    Won { player: PlayerId, name: String },
}

impl HistoryEntry {
    /// Entry for a nonzero life change. Returns `None` for a zero delta.
    #[must_use]
    pub fn life_change(player: PlayerId, name: impl Into<String>, delta: i64) -> Option<Self> {
        let amount = delta.unsigned_abs();
        let name = name.into();
        match delta.signum() {
            1 => Some(HistoryEntry::Gained { player, name, amount }),
            -1 => Some(HistoryEntry::Lost { player, name, amount }),
            _ => None,
        }
    }

    /// The player this entry is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            HistoryEntry::Gained { player, .. }
            | HistoryEntry::Lost { player, .. }
            | HistoryEntry::Won { player, .. } => *player,
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryEntry::Gained { name, amount, .. } => write!(f, "{name} gained {amount} life."),
            HistoryEntry::Lost { name, amount, .. } => write!(f, "{name} lost {amount} life."),
            HistoryEntry::Won { name, .. } => write!(f, "{name} wins the game!"),
        }
    }
}

/// Ordered history of a game.
///
/// Backed by an `im::Vector` so snapshots share structure with the live log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vector<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> im::vector::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Entries rendered as display lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
