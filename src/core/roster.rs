//! The ordered collection of players at the table.
//!
//! Order is insertion order and drives display order. IDs are unique and
//! allocated from a counter that only moves forward until the roster is
//! rebuilt.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::error::RosterError;

/// Ordered players plus the next-ID counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    next_id: usize,
}

impl Roster {
    /// Seat `count` players with IDs `0..count`, default names and colors.
    ///
    /// ```
    /// use life_counter::core::{PlayerId, Roster};
    ///
    /// let roster = Roster::seeded(4, 20);
    /// assert_eq!(roster.len(), 4);
    /// assert_eq!(roster.get(PlayerId::new(3)).unwrap().name, "Player 4");
    /// ```
    #[must_use]
    pub fn seeded(count: usize, life: i64) -> Self {
        let players: Vec<_> = PlayerId::all(count).map(|id| Player::new(id, life)).collect();
        let next_id = players.len();
        Self { players, next_id }
    }

    /// Build a roster from existing players.
    ///
    /// The next allocated ID follows the highest ID present.
    pub fn from_players(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut seen = FxHashSet::default();
        for player in &players {
            if !seen.insert(player.id) {
                return Err(RosterError::DuplicateId(player.id));
            }
        }
        let next_id = players.iter().map(|p| p.id.index() + 1).max().unwrap_or(0);
        Ok(Self { players, next_id })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if nobody is seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The ID the next added player will receive.
    #[must_use]
    pub fn next_id(&self) -> Option<PlayerId> {
        u8::try_from(self.next_id).ok().map(PlayerId::new)
    }

    /// Append a new player with the next sequential ID.
    pub fn push_new(&mut self, life: i64) -> Result<PlayerId, RosterError> {
        let id = self.next_id().ok_or(RosterError::IdsExhausted)?;
        self.players.push(Player::new(id, life));
        self.next_id += 1;
        Ok(id)
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Get a mutable player by ID.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Players in display order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterate over players in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Iterate over player IDs in display order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    /// Players with life above zero.
    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerColor;

    #[test]
    fn test_seeded_roster() {
        let roster = Roster::seeded(4, 20);

        assert_eq!(roster.len(), 4);
        assert_eq!(roster.next_id(), Some(PlayerId::new(4)));

        let ids: Vec<_> = roster.ids().collect();
        assert_eq!(ids, PlayerId::all(4).collect::<Vec<_>>());
        assert!(roster.iter().all(|p| p.life == 20));
        assert_eq!(roster.players()[3].color, PlayerColor::Orange);
    }

    #[test]
    fn test_push_new_is_sequential() {
        let mut roster = Roster::seeded(2, 20);

        assert_eq!(roster.push_new(20), Ok(PlayerId::new(2)));
        assert_eq!(roster.push_new(20), Ok(PlayerId::new(3)));

        let last = &roster.players()[3];
        assert_eq!(last.name, "Player 4");
        assert_eq!(last.color, PlayerColor::Orange);
    }

    #[test]
    fn test_push_new_ids_exhausted() {
        let mut roster = Roster::seeded(256, 20);
        assert_eq!(roster.next_id(), None);
        assert_eq!(roster.push_new(20), Err(RosterError::IdsExhausted));
        assert_eq!(roster.len(), 256);
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut roster = Roster::seeded(3, 20);

        roster.get_mut(PlayerId::new(1)).unwrap().life = 7;
        assert_eq!(roster.get(PlayerId::new(1)).unwrap().life, 7);
        assert!(roster.get(PlayerId::new(9)).is_none());
        assert!(roster.get_mut(PlayerId::new(9)).is_none());
    }

    #[test]
    fn test_alive() {
        let mut roster = Roster::seeded(3, 20);
        roster.get_mut(PlayerId::new(0)).unwrap().life = 0;

        let alive: Vec<_> = roster.alive().map(|p| p.id).collect();
        assert_eq!(alive, vec![PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_from_players_rejects_duplicates() {
        let players = vec![
            Player::new(PlayerId::new(0), 20),
            Player::new(PlayerId::new(0), 20),
        ];
        assert_eq!(
            Roster::from_players(players),
            Err(RosterError::DuplicateId(PlayerId::new(0)))
        );
    }

    #[test]
    fn test_from_players_next_id() {
        let players = vec![
            Player::new(PlayerId::new(5), 20),
            Player::new(PlayerId::new(2), 20),
        ];
        let roster = Roster::from_players(players).unwrap();
        assert_eq!(roster.next_id(), Some(PlayerId::new(6)));
        assert_eq!(roster.players()[0].id, PlayerId::new(5));
    }
}
