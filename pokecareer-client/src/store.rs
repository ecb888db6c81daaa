use std::sync::Arc;

use anyhow::{
    Context,
    Error,
    Result,
};
use futures_util::lock::Mutex;
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
    NetworkError,
};
use tokio::sync::watch;

use crate::merge_career_state;

/// How a recoverable failure was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryCode {
    VersionConflict,
    NetworkError,
}

/// The caller-visible outcome of a career action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<T> {
    /// The action was applied by the service.
    Success(T),
    /// The action may not have been applied. Local state has already been
    /// resynchronized to a known-good snapshot, so retrying is always safe.
    Recovered { code: RecoveryCode },
}

/// The single owner of the canonical career state.
///
/// Every mutating action goes through this store, which applies the
/// version-checked request protocol and reconciles each response with
/// [`merge_career_state`]. Screens observe the state read-only through
/// [`Self::subscribe`]; nothing outside the store writes it.
pub struct CareerStateStore {
    service: Arc<dyn CareerServiceClient>,
    state: Mutex<Option<CareerState>>,
    state_tx: watch::Sender<Option<CareerState>>,
}

impl CareerStateStore {
    /// Creates a new store with no active career.
    pub fn new(service: Arc<dyn CareerServiceClient>) -> Self {
        let (state_tx, _) = watch::channel(None);
        Self {
            service,
            state: Mutex::new(None),
            state_tx,
        }
    }

    /// The current career state, if a run is active.
    pub async fn career_state(&self) -> Option<CareerState> {
        self.state.lock().await.clone()
    }

    /// Receiver for read-only observation of the career state.
    pub fn subscribe(&self) -> watch::Receiver<Option<CareerState>> {
        self.state_tx.subscribe()
    }

    async fn expected_version(&self) -> Result<u64> {
        self.state
            .lock()
            .await
            .as_ref()
            .map(|state| state.state_version)
            .ok_or_else(|| Error::msg("no active career"))
    }

    async fn reconcile(&self, server_state: CareerState) {
        let mut state = self.state.lock().await;
        let prior = state.take();
        *state = merge_career_state(Some(server_state), prior);
        self.state_tx.send(state.clone()).ok();
    }

    async fn replace(&self, new_state: Option<CareerState>) {
        let mut state = self.state.lock().await;
        *state = new_state;
        self.state_tx.send(state.clone()).ok();
    }

    /// Recovers from a transport failure by reloading the full state from the
    /// service, discarding local speculative data.
    async fn recover_network<T>(&self, err: Error) -> Result<ActionOutcome<T>> {
        if err.downcast_ref::<NetworkError>().is_none() {
            return Err(err);
        }
        log::warn!("career action failed in transport: {err:#}; reloading state");
        let reloaded = self
            .service
            .career_state()
            .await
            .context("failed to reload career state after network error")?;
        self.replace(reloaded).await;
        Ok(ActionOutcome::Recovered {
            code: RecoveryCode::NetworkError,
        })
    }

    async fn resolve<T>(&self, response: Result<ActionResponse<T>>) -> Result<ActionOutcome<T>> {
        match response {
            Ok(ActionResponse::Applied { career_state, data }) => {
                self.reconcile(career_state).await;
                Ok(ActionOutcome::Success(data))
            }
            Ok(ActionResponse::VersionConflict { current_state }) => {
                log::warn!(
                    "career action conflicted at version {}; resynchronizing",
                    current_state.state_version,
                );
                // The conflict path reconciles through the same merge, so
                // speculative client data survives the recovery.
                self.reconcile(current_state).await;
                Ok(ActionOutcome::Recovered {
                    code: RecoveryCode::VersionConflict,
                })
            }
            Err(err) => self.recover_network(err).await,
        }
    }

    /// Starts a new career run.
    pub async fn start_career(
        &self,
        pokemon: CareerPokemon,
        supports: Vec<String>,
        initial_friendships: ahash::HashMap<String, u32>,
    ) -> Result<()> {
        let career_state = self
            .service
            .start_career(pokemon, supports, initial_friendships)
            .await?;
        self.replace(Some(career_state)).await;
        Ok(())
    }

    /// Trains a stat for the current turn.
    pub async fn train_stat(&self, stat: Stat) -> Result<ActionOutcome<()>> {
        let expected_version = self.expected_version().await?;
        let response = self.service.train_stat(stat, expected_version).await;
        self.resolve(response).await
    }

    /// Rests for the current turn.
    pub async fn rest(&self) -> Result<ActionOutcome<()>> {
        let expected_version = self.expected_version().await?;
        let response = self.service.rest(expected_version).await;
        self.resolve(response).await
    }

    /// Generates training options for the current turn.
    pub async fn generate_training(&self) -> Result<ActionOutcome<Vec<TrainingOption>>> {
        let response = self
            .service
            .generate_training()
            .await
            .map(|(career_state, options)| ActionResponse::Applied {
                career_state,
                data: options,
            });
        self.resolve(response).await
    }

    /// Triggers a career event.
    pub async fn trigger_event(&self) -> Result<ActionOutcome<CareerEvent>> {
        let response = self
            .service
            .trigger_event()
            .await
            .map(|(career_state, event)| ActionResponse::Applied {
                career_state,
                data: event,
            });
        self.resolve(response).await
    }

    /// Resolves a triggered event with the chosen option index.
    pub async fn resolve_event(&self, choice: usize) -> Result<ActionOutcome<EventOutcome>> {
        let expected_version = self.expected_version().await?;
        let response = self.service.resolve_event(choice, expected_version).await;
        self.resolve(response).await
    }

    /// Learns a move out of the learnable set.
    pub async fn learn_ability(&self, move_name: &str) -> Result<ActionOutcome<()>> {
        let expected_version = self.expected_version().await?;
        let response = self.service.learn_ability(move_name, expected_version).await;
        self.resolve(response).await
    }

    /// Processes a battle server-side.
    ///
    /// The returned result carries the finished battle log for replay.
    pub async fn process_battle(
        &self,
        opponent: &str,
        is_gym_leader: bool,
        is_event_battle: bool,
    ) -> Result<ActionOutcome<BattleResult>> {
        let expected_version = self.expected_version().await?;
        let response = self
            .service
            .process_battle(opponent, is_gym_leader, is_event_battle, expected_version)
            .await;
        self.resolve(response).await
    }

    /// Completes the career.
    ///
    /// On success the local career state is cleared and the Hall-of-Fame
    /// entry is returned.
    pub async fn complete_career(
        &self,
        inspirations: Vec<InspirationRecord>,
        completion: CompletionType,
    ) -> Result<ActionOutcome<TrainedPokemon>> {
        self.expected_version().await?;
        match self.service.complete_career(inspirations, completion).await {
            Ok(trained) => {
                self.replace(None).await;
                Ok(ActionOutcome::Success(trained))
            }
            Err(err) => self.recover_network(err).await,
        }
    }

    /// Abandons the career without producing a Hall-of-Fame entry.
    pub async fn abandon_career(&self) -> Result<ActionOutcome<()>> {
        match self.service.abandon_career().await {
            Ok(()) => {
                self.replace(None).await;
                Ok(ActionOutcome::Success(()))
            }
            Err(err) => self.recover_network(err).await,
        }
    }

    /// Consumes a pokeclock to retry a lost gym battle.
    pub async fn use_pokeclock(&self) -> Result<ActionOutcome<()>> {
        let expected_version = self.expected_version().await?;
        let response = self.service.use_pokeclock(expected_version).await;
        self.resolve(response).await
    }

    /// Changes the active battle strategy.
    pub async fn change_strategy(&self, strategy: Strategy) -> Result<ActionOutcome<()>> {
        let expected_version = self.expected_version().await?;
        let response = self.service.change_strategy(strategy, expected_version).await;
        self.resolve(response).await
    }

    /// Records a locally observed move hint before the service confirms it.
    ///
    /// The merge applied to every later response guarantees the counter is
    /// never lost to a response that has not observed the hint yet.
    pub async fn record_move_hint(&self, move_name: &str, count: u32) {
        let mut state = self.state.lock().await;
        let Some(active) = state.as_mut() else {
            return;
        };
        *active.move_hints.entry(move_name.to_owned()).or_default() += count;
        if !active.known_abilities.contains(move_name) {
            active
                .pokemon
                .learnable_abilities
                .insert(move_name.to_owned());
        }
        self.state_tx.send(state.clone()).ok();
    }

    /// Reloads the full career state from the service, discarding local
    /// speculative data.
    pub async fn reload(&self) -> Result<()> {
        let reloaded = self.service.career_state().await?;
        self.replace(reloaded).await;
        Ok(())
    }
}
