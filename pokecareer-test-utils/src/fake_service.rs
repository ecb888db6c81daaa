use std::{
    collections::VecDeque,
    sync::Mutex,
};

use ahash::HashMap;
use anyhow::{
    Error,
    Result,
};
use async_trait::async_trait;
use pokecareer_data::{
    BattleResult,
    CareerEvent,
    CareerPokemon,
    CareerState,
    CompletionType,
    EventOutcome,
    InspirationRecord,
    Stat,
    Strategy,
    TrainedPokemon,
    TrainingOption,
};
use pokecareer_service_client::{
    ActionResponse,
    CareerServiceClient,
};

/// A queue of scripted responses for one fake service operation.
pub struct ResponseQueue<T> {
    responses: Mutex<VecDeque<Result<T>>>,
}

impl<T> Default for ResponseQueue<T> {
    fn default() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
        }
    }
}

impl<T> ResponseQueue<T> {
    /// Scripts the next response.
    pub fn push(&self, response: Result<T>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn pop(&self, operation: &str) -> Result<T> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::msg(format!("no scripted response for {operation}"))))
    }
}

/// Scripted implementation of [`CareerServiceClient`] for tests.
///
/// Each operation pops the next scripted response from its queue; an
/// unscripted call fails.
#[derive(Default)]
pub struct FakeCareerService {
    pub start_career: ResponseQueue<CareerState>,
    pub career_state: ResponseQueue<Option<CareerState>>,
    pub train_stat: ResponseQueue<ActionResponse<()>>,
    pub rest: ResponseQueue<ActionResponse<()>>,
    pub generate_training: ResponseQueue<(CareerState, Vec<TrainingOption>)>,
    pub trigger_event: ResponseQueue<(CareerState, CareerEvent)>,
    pub resolve_event: ResponseQueue<ActionResponse<EventOutcome>>,
    pub learn_ability: ResponseQueue<ActionResponse<()>>,
    pub process_battle: ResponseQueue<ActionResponse<BattleResult>>,
    pub complete_career: ResponseQueue<TrainedPokemon>,
    pub abandon_career: ResponseQueue<()>,
    pub use_pokeclock: ResponseQueue<ActionResponse<()>>,
    pub change_strategy: ResponseQueue<ActionResponse<()>>,

    /// Versions observed on version-checked calls, in order.
    pub versions_seen: Mutex<Vec<u64>>,
}

impl FakeCareerService {
    fn record_version(&self, expected_version: u64) {
        self.versions_seen.lock().unwrap().push(expected_version);
    }
}

#[async_trait]
impl CareerServiceClient for FakeCareerService {
    async fn start_career(
        &self,
        _pokemon: CareerPokemon,
        _supports: Vec<String>,
        _initial_friendships: HashMap<String, u32>,
    ) -> Result<CareerState> {
        self.start_career.pop("start_career")
    }

    async fn career_state(&self) -> Result<Option<CareerState>> {
        self.career_state.pop("career_state")
    }

    async fn train_stat(&self, _stat: Stat, expected_version: u64) -> Result<ActionResponse<()>> {
        self.record_version(expected_version);
        self.train_stat.pop("train_stat")
    }

    async fn rest(&self, expected_version: u64) -> Result<ActionResponse<()>> {
        self.record_version(expected_version);
        self.rest.pop("rest")
    }

    async fn generate_training(&self) -> Result<(CareerState, Vec<TrainingOption>)> {
        self.generate_training.pop("generate_training")
    }

    async fn trigger_event(&self) -> Result<(CareerState, CareerEvent)> {
        self.trigger_event.pop("trigger_event")
    }

    async fn resolve_event(
        &self,
        _choice: usize,
        expected_version: u64,
    ) -> Result<ActionResponse<EventOutcome>> {
        self.record_version(expected_version);
        self.resolve_event.pop("resolve_event")
    }

    async fn learn_ability(
        &self,
        _move_name: &str,
        expected_version: u64,
    ) -> Result<ActionResponse<()>> {
        self.record_version(expected_version);
        self.learn_ability.pop("learn_ability")
    }

    async fn process_battle(
        &self,
        _opponent: &str,
        _is_gym_leader: bool,
        _is_event_battle: bool,
        expected_version: u64,
    ) -> Result<ActionResponse<BattleResult>> {
        self.record_version(expected_version);
        self.process_battle.pop("process_battle")
    }

    async fn complete_career(
        &self,
        _inspirations: Vec<InspirationRecord>,
        _completion: CompletionType,
    ) -> Result<TrainedPokemon> {
        self.complete_career.pop("complete_career")
    }

    async fn abandon_career(&self) -> Result<()> {
        self.abandon_career.pop("abandon_career")
    }

    async fn use_pokeclock(&self, expected_version: u64) -> Result<ActionResponse<()>> {
        self.record_version(expected_version);
        self.use_pokeclock.pop("use_pokeclock")
    }

    async fn change_strategy(
        &self,
        _strategy: Strategy,
        expected_version: u64,
    ) -> Result<ActionResponse<()>> {
        self.record_version(expected_version);
        self.change_strategy.pop("change_strategy")
    }
}
