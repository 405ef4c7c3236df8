//! Table configuration.
//!
//! `CounterConfig` fixes the numbers the counter is built around:
//! - starting life for every new player
//! - roster bounds (minimum and maximum seats)
//! - how many players a reset seats
//! - the preset increment buttons offered per player
//!
//! The stock values match a 20-life constructed game with 2-8 players.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::error::ConfigError;

/// Life every player starts with.
pub const DEFAULT_STARTING_LIFE: i64 = 20;

/// Smallest roster a table allows.
pub const DEFAULT_MIN_PLAYERS: usize = 2;

/// Largest roster a table allows.
pub const DEFAULT_MAX_PLAYERS: usize = 8;

/// Players seated by a reset.
pub const DEFAULT_SEEDED_PLAYERS: usize = 4;

/// Complete counter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Life assigned to every new player.
    pub starting_life: i64,

    /// Minimum roster size.
    pub min_players: usize,

    /// Maximum roster size. "Add Player" is disabled at this size.
    pub max_players: usize,

    /// Roster size after a reset.
    pub seeded_players: usize,

    /// Preset increment magnitudes. Each is offered as a + and a - button.
    pub presets: SmallVec<[i64; 4]>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            starting_life: DEFAULT_STARTING_LIFE,
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: DEFAULT_MAX_PLAYERS,
            seeded_players: DEFAULT_SEEDED_PLAYERS,
            presets: smallvec![1, 5],
        }
    }
}

impl CounterConfig {
    /// Create a configuration with the stock values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting life.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the roster bounds.
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set how many players a reset seats.
    #[must_use]
    pub fn with_seeded_players(mut self, count: usize) -> Self {
        self.seeded_players = count;
        self
    }

    /// Replace the preset increments.
    #[must_use]
    pub fn with_presets(mut self, presets: &[i64]) -> Self {
        self.presets = SmallVec::from_slice(presets);
        self
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 2 {
            return Err(ConfigError::TooFewPlayers(self.min_players));
        }
        if self.max_players > 256 {
            return Err(ConfigError::TooManyPlayers(self.max_players));
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::InvertedBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if !(self.min_players..=self.max_players).contains(&self.seeded_players) {
            return Err(ConfigError::SeededOutOfRange {
                seeded: self.seeded_players,
                min: self.min_players,
                max: self.max_players,
            });
        }
        self.validate_presets()
    }

    /// Check only the preset increments.
    ///
    /// Tables with a fixed seat count use this instead of `validate`.
    pub fn validate_presets(&self) -> Result<(), ConfigError> {
        match self.presets.iter().find(|&&p| p <= 0) {
            Some(&bad) => Err(ConfigError::NonPositivePreset(bad)),
            None => Ok(()),
        }
    }

    /// Signed deltas for every preset button, in display order.
    ///
    /// ```
    /// use life_counter::core::CounterConfig;
    ///
    /// let deltas: Vec<_> = CounterConfig::default().preset_deltas().collect();
    /// assert_eq!(deltas, vec![1, -1, 5, -5]);
    /// ```
    pub fn preset_deltas(&self) -> impl Iterator<Item = i64> + '_ {
        self.presets.iter().flat_map(|&p| [p, -p])
    }
}
