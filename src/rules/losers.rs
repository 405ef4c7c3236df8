//! Loss and win detection.
//!
//! Elimination is a predicate over current life totals (`life <= 0`), not a
//! stored flag. These functions recompute everything from the roster on each
//! call, so a player healed back above zero is simply no longer a loser.

use smallvec::SmallVec;

use super::engine::GameResult;
use crate::core::{Player, PlayerId, Roster};

/// Display message for an eliminated player.
#[must_use]
pub fn loser_message(player: &Player) -> String {
    format!("{} LOSES!", player.name)
}

/// Message shown when both duelists are at or below zero.
pub const DRAW_MESSAGE: &str = "Both players LOSE!";

/// Outcome of scanning an N-player roster for losers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LossReport {
    /// Eliminated players in roster order.
    pub losers: SmallVec<[PlayerId; 8]>,

    /// One "{name} LOSES!" line per loser, in roster order.
    pub messages: Vec<String>,

    /// `Winner` when exactly one player survives, `Draw` when nobody does.
    pub result: Option<GameResult>,
}

impl LossReport {
    /// The sole survivor, if the scan found one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result {
            Some(GameResult::Winner(p)) => Some(p),
            _ => None,
        }
    }

    /// Check if a player was found eliminated.
    #[must_use]
    pub fn is_loser(&self, player: PlayerId) -> bool {
        self.losers.contains(&player)
    }
}

/// Scan the whole roster for eliminated players.
///
/// A winner is declared when exactly `roster.len() - 1` players are
/// eliminated. Rosters with fewer than two players never produce a result.
///
/// ```
/// use life_counter::core::{PlayerId, Roster};
/// use life_counter::rules::{check_for_losers, GameResult};
///
/// let mut roster = Roster::seeded(2, 20);
/// roster.get_mut(PlayerId::new(0)).unwrap().life = 0;
///
/// let report = check_for_losers(&roster);
/// assert_eq!(report.messages, vec!["Player 1 LOSES!"]);
/// assert_eq!(report.result, Some(GameResult::Winner(PlayerId::new(1))));
/// ```
#[must_use]
pub fn check_for_losers(roster: &Roster) -> LossReport {
    let mut report = LossReport::default();

    for player in roster.iter().filter(|p| p.is_eliminated()) {
        report.losers.push(player.id);
        report.messages.push(loser_message(player));
    }

    let total = roster.len();
    if total >= 2 {
        if report.losers.len() == total - 1 {
            report.result = roster.alive().next().map(|p| GameResult::Winner(p.id));
        } else if report.losers.len() == total {
            report.result = Some(GameResult::Draw);
        }
    }

    report
}

/// Two-player check: who has lost, if anyone.
///
/// Both players at or below zero is a draw regardless of argument order.
///
/// ```
/// use life_counter::core::{Player, PlayerId};
/// use life_counter::rules::{check_for_loser, GameResult};
///
/// let first = Player::new(PlayerId::new(0), 20);
/// let mut second = Player::new(PlayerId::new(1), 20);
/// assert_eq!(check_for_loser(&first, &second), None);
///
/// second.life = -1;
/// assert_eq!(check_for_loser(&first, &second), Some(GameResult::Winner(PlayerId::new(0))));
/// ```
#[must_use]
pub fn check_for_loser(first: &Player, second: &Player) -> Option<GameResult> {
    match (first.is_eliminated(), second.is_eliminated()) {
        (false, false) => None,
        (true, false) => Some(GameResult::Winner(second.id)),
        (false, true) => Some(GameResult::Winner(first.id)),
        (true, true) => Some(GameResult::Draw),
    }
}

/// The single loser line for a duel, or `None` while both are alive.
#[must_use]
pub fn duel_loser_message(first: &Player, second: &Player) -> Option<String> {
    check_for_loser(first, second).map(|result| match result {
        GameResult::Winner(winner) if winner == first.id => loser_message(second),
        GameResult::Winner(_) => loser_message(first),
        GameResult::Draw => DRAW_MESSAGE.to_string(),
    })
}
