//! Two-player duel implementation.

use tracing::{debug, trace};

use crate::core::{CounterConfig, Player, PlayerId, Roster};
use crate::error::ConfigError;
use crate::rules::{check_for_loser, duel_loser_message, GameResult, LifeCounter};

/// Fixed two-seat counter.
#[derive(Clone, Debug)]
pub struct Duel {
    config: CounterConfig,
    roster: Roster,
}

impl Default for Duel {
    fn default() -> Self {
        Self::seat(CounterConfig::default())
    }
}

impl Duel {
    /// Two players at the stock starting life.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Two players using `config`'s starting life and presets.
    ///
    /// Roster bounds in the config are not used; a duel always seats two.
    pub fn with_config(config: CounterConfig) -> Result<Self, ConfigError> {
        config.validate_presets()?;
        Ok(Self::seat(config))
    }

    fn seat(config: CounterConfig) -> Self {
        let roster = Roster::seeded(2, config.starting_life);
        Self { config, roster }
    }

    /// The first seat.
    #[must_use]
    pub fn first(&self) -> &Player {
        &self.roster.players()[0]
    }

    /// The second seat.
    #[must_use]
    pub fn second(&self) -> &Player {
        &self.roster.players()[1]
    }

    /// "Player N LOSES!", a draw line, or `None` while both are alive.
    #[must_use]
    pub fn loser_message(&self) -> Option<String> {
        duel_loser_message(self.first(), self.second())
    }
}

impl LifeCounter for Duel {
    fn config(&self) -> &CounterConfig {
        &self.config
    }

    fn roster(&self) -> &Roster {
        &self.roster
    }

    fn adjust_life(&mut self, player: PlayerId, delta: i64) -> bool {
        if delta == 0 {
            trace!(%player, "ignoring zero adjustment");
            return false;
        }
        let Some(seat) = self.roster.get_mut(player) else {
            trace!(%player, "ignoring adjustment for unknown player");
            return false;
        };
        if !seat.adjust_life(delta) {
            trace!(%player, delta, life = seat.life, "ignoring adjustment past life bounds");
            return false;
        }
        debug!(%player, delta, life = seat.life, "life adjusted");
        true
    }

    fn rename_player(&mut self, player: PlayerId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            trace!(%player, "ignoring blank name");
            return false;
        }
        let Some(seat) = self.roster.get_mut(player) else {
            trace!(%player, "ignoring rename for unknown player");
            return false;
        };
        seat.name = name.to_string();
        true
    }

    fn loser_messages(&self) -> Vec<String> {
        self.loser_message().into_iter().collect()
    }

    fn result(&self) -> Option<GameResult> {
        check_for_loser(self.first(), self.second())
    }
}
