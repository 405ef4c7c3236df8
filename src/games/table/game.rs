//! Multi-player table implementation.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CounterConfig, HistoryEntry, HistoryLog, Player, PlayerId, Roster};
use crate::error::ConfigError;
use crate::rules::{check_for_losers, GameResult, LifeCounter, LossReport};

/// Game-level progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No life has changed since the last reset or win. Seats may be added.
    NotStarted,
    /// At least one nonzero adjustment has been made. The roster is locked.
    InProgress,
    /// One player is left standing. The board stays as-is until reset.
    Concluded,
}

/// Owned copy of everything the presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub players: Vec<Player>,
    pub history: Vec<String>,
    pub loser_messages: Vec<String>,
    pub result: Option<GameResult>,
    pub status: GameStatus,
    pub game_started: bool,
    pub can_add_player: bool,
    /// Bumped on every effective mutation.
    pub revision: u64,
}

/// The game state manager for a 2-8 player table.
///
/// Owns the roster, the history log and the game-started flag. Loss and win
/// detection run after every nonzero adjustment.
#[derive(Clone, Debug)]
pub struct Table {
    config: CounterConfig,
    roster: Roster,
    history: HistoryLog,
    game_started: bool,
    revision: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self::seat(CounterConfig::default())
    }
}

impl Table {
    /// A freshly reset table with the stock configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A freshly reset table using `config`.
    pub fn with_config(config: CounterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::seat(config))
    }

    /// A table seating the given players, e.g. with names already filled in.
    ///
    /// IDs must be unique and the roster size must fit the config bounds.
    /// A later reset still seats the configured default players.
    pub fn with_roster(config: CounterConfig, players: Vec<Player>) -> Result<Self, ConfigError> {
        config.validate()?;
        if !(config.min_players..=config.max_players).contains(&players.len()) {
            return Err(ConfigError::RosterSize {
                len: players.len(),
                min: config.min_players,
                max: config.max_players,
            });
        }
        let roster = Roster::from_players(players)?;
        Ok(Self {
            roster,
            ..Self::seat(config)
        })
    }

    fn seat(config: CounterConfig) -> Self {
        let roster = Roster::seeded(config.seeded_players, config.starting_life);
        Self {
            config,
            roster,
            history: HistoryLog::new(),
            game_started: false,
            revision: 0,
        }
    }

    /// The history log.
    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Whether play has begun since the last reset or win.
    #[must_use]
    pub fn is_game_started(&self) -> bool {
        self.game_started
    }

    /// Counter bumped on every effective mutation, for polling.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Recompute losers and the result from current life totals.
    #[must_use]
    pub fn loss_report(&self) -> LossReport {
        check_for_losers(&self.roster)
    }

    /// Current game-level progress.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.game_started {
            GameStatus::InProgress
        } else if self.winner().is_some() {
            GameStatus::Concluded
        } else {
            GameStatus::NotStarted
        }
    }

    /// Owned view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        let report = self.loss_report();
        TableSnapshot {
            players: self.roster.players().to_vec(),
            history: self.history.lines(),
            loser_messages: report.messages,
            result: report.result,
            status: self.status(),
            game_started: self.game_started,
            can_add_player: self.can_add_player(),
            revision: self.revision,
        }
    }

    /// Announce a winner if exactly one player is left standing.
    fn check_for_losers(&mut self) {
        let report = check_for_losers(&self.roster);
        let Some(winner) = report.winner() else {
            return;
        };
        let Some(player) = self.roster.get(winner) else {
            return;
        };
        debug!(player = %winner, name = %player.name, losers = report.losers.len(), "game won");
        self.history.push(HistoryEntry::Won {
            player: winner,
            name: player.name.clone(),
        });
        self.game_started = false;
    }
}

impl LifeCounter for Table {
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

        if let Some(entry) = HistoryEntry::life_change(player, seat.name.clone(), delta) {
            self.history.push(entry);
        }
        if !self.game_started {
            debug!("game started");
            self.game_started = true;
        }
        self.revision += 1;

        self.check_for_losers();
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
        self.revision += 1;
        true
    }

    fn loser_messages(&self) -> Vec<String> {
        self.loss_report().messages
    }

    fn result(&self) -> Option<GameResult> {
        self.loss_report().result
    }

    fn can_add_player(&self) -> bool {
        !self.game_started
            && self.roster.len() < self.config.max_players
            && self.roster.next_id().is_some()
    }

    fn add_player(&mut self) -> Option<PlayerId> {
        if !self.can_add_player() {
            trace!(
                players = self.roster.len(),
                game_started = self.game_started,
                "add player disabled"
            );
            return None;
        }
        match self.roster.push_new(self.config.starting_life) {
            Ok(id) => {
                debug!(player = %id, players = self.roster.len(), "player added");
                self.revision += 1;
                Some(id)
            }
            Err(err) => {
                trace!(%err, "add player rejected");
                None
            }
        }
    }

    fn reset_game(&mut self) -> bool {
        self.roster = Roster::seeded(self.config.seeded_players, self.config.starting_life);
        self.history.clear();
        self.game_started = false;
        self.revision += 1;
        debug!(players = self.roster.len(), "game reset");
        true
    }
}
