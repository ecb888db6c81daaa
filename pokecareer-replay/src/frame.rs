use pokecareer_data::{
    BattleTick,
    CombatantState,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::state::at_final_tick;

/// Display category of a battle log message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum LogEntryKind {
    #[string = "crit"]
    Crit,
    #[string = "victory"]
    Victory,
    #[string = "defeat"]
    Defeat,
    #[string = "hit"]
    Hit,
    #[string = "miss"]
    Miss,
    #[string = "normal"]
    Normal,
}

/// A single classified line of the visible battle log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayLogEntry {
    pub tick: usize,
    pub message: String,
    pub kind: LogEntryKind,
}

/// UI-ready view of the replay at one tick.
///
/// Derived fresh from the source log on every advancement; the source log is
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayFrame {
    pub tick: usize,
    pub player_one: CombatantState,
    pub player_two: CombatantState,
    pub log: Vec<ReplayLogEntry>,
    pub at_final_tick: bool,
}

/// Classifies a battle message by substring, most specific match first.
///
/// "defeated" reads as a loss only when the viewer's own name appears in the
/// message. The match is over free server text, so an unfortunately named
/// Pokemon can misclassify; this mirrors how the messages are produced.
pub fn classify_message(message: &str, viewer: &str) -> LogEntryKind {
    if message.contains("CRITICAL HIT") {
        LogEntryKind::Crit
    } else if message.contains("Victory!") {
        LogEntryKind::Victory
    } else if message.contains("defeated") {
        if message.contains(viewer) {
            LogEntryKind::Defeat
        } else {
            LogEntryKind::Victory
        }
    } else if message.contains("damage") {
        LogEntryKind::Hit
    } else if message.contains("missed") {
        LogEntryKind::Miss
    } else {
        LogEntryKind::Normal
    }
}

/// Derives the visible frame for the cursor position: combatant state from
/// the tick itself, log entries from the cumulative prefix of ticks up to and
/// including it.
pub fn derive_frame(log: &[BattleTick], tick: usize, viewer: &str) -> Option<ReplayFrame> {
    let current = log.get(tick)?;
    let entries = log
        .iter()
        .take(tick + 1)
        .enumerate()
        .filter_map(|(i, entry)| {
            entry.message.as_ref().map(|message| ReplayLogEntry {
                tick: i,
                message: message.clone(),
                kind: classify_message(message, viewer),
            })
        })
        .collect();
    Some(ReplayFrame {
        tick,
        player_one: current.player_one.clone(),
        player_two: current.player_two.clone(),
        log: entries,
        at_final_tick: at_final_tick(tick, log.len()),
    })
}

#[cfg(test)]
mod frame_test {
    use pokecareer_test_utils::battle_log_for_test;
    use pretty_assertions::assert_eq;

    use crate::{
        LogEntryKind,
        classify_message,
        derive_frame,
    };

    #[test]
    fn classifies_messages_in_precedence_order() {
        let viewer = "Charmander";
        assert_eq!(
            classify_message("CRITICAL HIT! Charmander was defeated!", viewer),
            LogEntryKind::Crit
        );
        assert_eq!(
            classify_message("Victory! Squirtle was defeated!", viewer),
            LogEntryKind::Victory
        );
        assert_eq!(
            classify_message("Charmander was defeated!", viewer),
            LogEntryKind::Defeat
        );
        assert_eq!(
            classify_message("Squirtle was defeated!", viewer),
            LogEntryKind::Victory
        );
        assert_eq!(
            classify_message("Squirtle dealt 12 damage to Charmander", viewer),
            LogEntryKind::Hit
        );
        assert_eq!(
            classify_message("Squirtle's attack missed!", viewer),
            LogEntryKind::Miss
        );
        assert_eq!(
            classify_message("Charmander is paralyzed!", viewer),
            LogEntryKind::Normal
        );
    }

    #[test]
    fn frame_log_covers_the_cumulative_prefix() {
        let log = battle_log_for_test(5);

        // Tick 0 carries no message in the fixture.
        let frame = derive_frame(&log, 0, "Charmander").unwrap();
        assert_eq!(frame.log.len(), 0);
        assert!(!frame.at_final_tick);

        let frame = derive_frame(&log, 2, "Charmander").unwrap();
        assert_eq!(frame.tick, 2);
        assert_eq!(frame.log.len(), 2);
        assert_eq!(frame.log[0].tick, 1);
        assert_eq!(frame.log[1].tick, 2);
        assert!(
            frame
                .log
                .iter()
                .all(|entry| entry.kind == LogEntryKind::Hit)
        );

        let frame = derive_frame(&log, 4, "Charmander").unwrap();
        assert_eq!(frame.log.len(), 4);
        assert!(frame.at_final_tick);
    }

    #[test]
    fn frame_copies_combatant_state_from_the_tick() {
        let log = battle_log_for_test(3);
        let frame = derive_frame(&log, 2, "Charmander").unwrap();
        assert_eq!(frame.player_one, log[2].player_one);
        assert_eq!(frame.player_two, log[2].player_two);
    }

    #[test]
    fn empty_log_yields_no_frame() {
        assert_matches::assert_matches!(derive_frame(&[], 0, "Charmander"), None);
    }

    #[test]
    fn out_of_range_tick_yields_no_frame() {
        let log = battle_log_for_test(3);
        assert_matches::assert_matches!(derive_frame(&log, 3, "Charmander"), None);
    }
}
