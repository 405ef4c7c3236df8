//! Two-player duel integration tests.

use life_counter::core::{CounterConfig, PlayerId, Sign};
use life_counter::error::ConfigError;
use life_counter::games::duel::Duel;
use life_counter::rules::{GameResult, LifeCounter, DRAW_MESSAGE};
use life_counter::Intent;

const P1: PlayerId = PlayerId::new(0);
const P2: PlayerId = PlayerId::new(1);

/// Test that a duel seats two players at 20 life.
#[test]
fn test_duel_starts_at_twenty() {
    let duel = Duel::new();

    assert_eq!(duel.roster().len(), 2);
    assert_eq!(duel.first().name, "Player 1");
    assert_eq!(duel.second().name, "Player 2");
    assert_eq!(duel.life(P1), Some(20));
    assert_eq!(duel.life(P2), Some(20));
    assert_eq!(duel.loser_message(), None);
    assert_eq!(duel.result(), None);
}

/// Test that the preset intents move each player's life.
#[test]
fn test_duel_preset_buttons() {
    let mut duel = Duel::new();

    duel.apply_intent(Intent::adjust(P1, 1));
    duel.apply_intent(Intent::adjust(P1, 5));
    duel.apply_intent(Intent::adjust(P2, -1));
    duel.apply_intent(Intent::adjust(P2, -5));

    assert_eq!(duel.life(P1), Some(26));
    assert_eq!(duel.life(P2), Some(14));
}

/// Test that the first player at zero gets the loser line.
#[test]
fn test_duel_first_player_loses() {
    let mut duel = Duel::new();

    for _ in 0..4 {
        duel.adjust_life(P1, -5);
    }

    assert_eq!(duel.life(P1), Some(0));
    assert_eq!(duel.loser_message().as_deref(), Some("Player 1 LOSES!"));
    assert_eq!(duel.result(), Some(GameResult::Winner(P2)));
    assert_eq!(duel.winner(), Some(P2));
}

/// Test that the second player at zero gets the loser line.
#[test]
fn test_duel_second_player_loses() {
    let mut duel = Duel::new();
    duel.adjust_life(P2, -21);

    assert_eq!(duel.loser_messages(), vec!["Player 2 LOSES!"]);
    assert_eq!(duel.winner(), Some(P1));
}

/// Test that the loser line disappears once life recovers.
#[test]
fn test_duel_message_clears_on_recovery() {
    let mut duel = Duel::new();
    duel.adjust_life(P1, -20);
    assert!(duel.loser_message().is_some());

    duel.adjust_life(P1, 1);
    assert_eq!(duel.loser_message(), None);
    assert!(duel.loser_messages().is_empty());
}

/// Test that both players at zero is a draw.
#[test]
fn test_duel_double_elimination_is_draw() {
    let mut duel = Duel::new();
    duel.adjust_life(P2, -20);
    duel.adjust_life(P1, -20);

    assert_eq!(duel.result(), Some(GameResult::Draw));
    assert_eq!(duel.loser_message().as_deref(), Some(DRAW_MESSAGE));
    assert_eq!(duel.winner(), None);
}

/// Test that a duel offers neither add player nor reset.
#[test]
fn test_duel_has_no_add_or_reset() {
    let mut duel = Duel::new();

    assert!(!duel.can_add_player());
    assert_eq!(duel.add_player(), None);
    assert!(!duel.apply_intent(Intent::AddPlayer));

    duel.adjust_life(P1, -3);
    assert!(!duel.reset_game());
    assert!(!duel.apply_intent(Intent::Reset));
    assert_eq!(duel.life(P1), Some(17));
    assert_eq!(duel.roster().len(), 2);
}

/// Test that zero deltas, unknown players and junk amounts change nothing.
#[test]
fn test_duel_ignores_bad_input() {
    let mut duel = Duel::new();

    assert!(!duel.adjust_life(P1, 0));
    assert!(!duel.adjust_life(PlayerId::new(2), -5));
    assert!(!duel.adjust_custom(P1, "abc", Sign::Minus));

    assert_eq!(duel.life(P1), Some(20));
    assert_eq!(duel.life(P2), Some(20));
}

/// Test that a typed amount is applied with its sign.
#[test]
fn test_duel_custom_amount() {
    let mut duel = Duel::new();
    assert!(duel.adjust_custom(P2, "8", Sign::Minus));
    assert_eq!(duel.life(P2), Some(12));
}

/// Test that renames show up in the loser line and bad renames are ignored.
#[test]
fn test_duel_rename() {
    let mut duel = Duel::new();

    assert!(duel.rename_player(P1, "Alice"));
    assert!(!duel.rename_player(P1, ""));
    assert!(!duel.rename_player(PlayerId::new(2), "Zed"));
    duel.adjust_life(P1, -20);

    assert_eq!(duel.loser_message().as_deref(), Some("Alice LOSES!"));
}

/// Test that a duel takes starting life from the config.
#[test]
fn test_duel_with_config() {
    let duel = Duel::with_config(CounterConfig::new().with_starting_life(30)).unwrap();

    assert_eq!(duel.life(P1), Some(30));
    assert_eq!(duel.life(P2), Some(30));
    assert_eq!(duel.config().starting_life, 30);
}

/// Test that a duel rejects a config with a non-positive preset.
#[test]
fn test_duel_with_config_rejects_non_positive_preset() {
    let config = CounterConfig::new().with_presets(&[0, -5]);

    assert_eq!(Duel::with_config(config).unwrap_err(), ConfigError::NonPositivePreset(0));
}

/// Test that roster bounds in the config do not affect a duel.
#[test]
fn test_duel_with_config_ignores_roster_bounds() {
    let config = CounterConfig::new().with_player_bounds(1, 1);
    let duel = Duel::with_config(config).unwrap();

    assert_eq!(duel.roster().len(), 2);
}

/// Test that an adjustment overflowing life is ignored.
#[test]
fn test_duel_adjustment_past_life_bounds_ignored() {
    let mut duel = Duel::new();
    assert!(duel.adjust_life(P1, i64::MAX - 20));

    assert!(!duel.adjust_life(P1, 1));
    assert_eq!(duel.life(P1), Some(i64::MAX));
    assert_eq!(duel.result(), None);
}
