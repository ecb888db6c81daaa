use serde::{
    Deserialize,
    Serialize,
};

/// One combatant's state within a [`BattleTick`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantState {
    pub name: String,
    pub current_hp: u64,
    pub max_hp: u64,
    pub energy: u64,
    pub status_effects: Vec<String>,
}

/// One immutable frame of a finished battle, as produced by the server.
///
/// An ordered sequence of ticks forms the battle log. The log is fully known
/// at receipt time; it is never streamed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleTick {
    pub player_one: CombatantState,
    pub player_two: CombatantState,
    pub message: Option<String>,
}

/// The result of a server-simulated battle.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub victory: bool,
    /// The full battle log, replayed client-side.
    pub log: Vec<BattleTick>,
}
