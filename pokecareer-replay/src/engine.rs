use std::{
    sync::Arc,
    time::Duration,
};

use futures_util::lock::Mutex;
use pokecareer_data::BattleTick;
use tokio::{
    sync::watch,
    task::JoinHandle,
};

use crate::{
    frame::{
        ReplayFrame,
        derive_frame,
    },
    state::{
        ReplaySpeed,
        ReplayState,
        advance_tick,
        at_final_tick,
    },
};

struct ReplayCursor {
    state: ReplayState,
    // Bumped on every transition that invalidates the pending timer. A timer
    // task carries the generation it was spawned with and stops advancing as
    // soon as the cursor has moved on, so a stale callback can never touch a
    // superseded session.
    generation: u64,
}

struct ReplayEngineInternal {
    log: Vec<BattleTick>,
    viewer: String,
    cursor: Mutex<ReplayCursor>,
    frame_tx: watch::Sender<Option<ReplayFrame>>,
}

impl ReplayEngineInternal {
    fn publish(&self, tick: usize) {
        self.frame_tx
            .send_replace(derive_frame(&self.log, tick, &self.viewer));
    }

    /// Advances the cursor by one tick on behalf of the timer task with the
    /// given generation. Returns whether the task should keep running.
    async fn advance(&self, generation: u64) -> bool {
        let mut cursor = self.cursor.lock().await;
        if cursor.generation != generation || !cursor.state.is_playing {
            return false;
        }
        cursor.state.tick = advance_tick(cursor.state.tick, self.log.len());
        self.publish(cursor.state.tick);
        if at_final_tick(cursor.state.tick, self.log.len()) {
            cursor.state.is_playing = false;
            return false;
        }
        true
    }
}

/// Drives playback over an immutable battle log.
///
/// The engine owns a cursor and at most one live timer task. Each advancement
/// publishes a freshly derived [`ReplayFrame`] on a watch channel; the log
/// itself is never mutated. One engine serves one log, so a log replacement
/// means constructing a new engine.
pub struct BattleReplayEngine {
    internal: Arc<ReplayEngineInternal>,
    timer_handle: Mutex<Option<JoinHandle<()>>>,
}

impl BattleReplayEngine {
    pub fn new<S>(log: Vec<BattleTick>, viewer: S) -> Self
    where
        S: Into<String>,
    {
        let viewer = viewer.into();
        let (frame_tx, _) = watch::channel(derive_frame(&log, 0, &viewer));
        Self {
            internal: Arc::new(ReplayEngineInternal {
                log,
                viewer,
                cursor: Mutex::new(ReplayCursor {
                    state: ReplayState::default(),
                    generation: 0,
                }),
                frame_tx,
            }),
            timer_handle: Mutex::new(None),
        }
    }

    /// Receives the derived frame at the cursor, updated on every tick
    /// advancement and every seek.
    pub fn subscribe(&self) -> watch::Receiver<Option<ReplayFrame>> {
        self.internal.frame_tx.subscribe()
    }

    pub async fn replay_state(&self) -> ReplayState {
        self.internal.cursor.lock().await.state.clone()
    }

    /// Starts playback at the current cursor position. Does nothing when
    /// already playing or when the cursor sits at the final tick.
    pub async fn play(&self) {
        let (generation, interval) = {
            let mut cursor = self.internal.cursor.lock().await;
            if cursor.state.is_playing
                || at_final_tick(cursor.state.tick, self.internal.log.len())
            {
                return;
            }
            cursor.state.is_playing = true;
            cursor.generation += 1;
            (cursor.generation, cursor.state.speed.interval())
        };
        self.restart_timer(generation, interval).await;
    }

    pub async fn pause(&self) {
        {
            let mut cursor = self.internal.cursor.lock().await;
            cursor.state.is_playing = false;
            cursor.generation += 1;
        }
        self.cancel_timer().await;
    }

    /// Changes the playback speed. While playing, the pending timer is
    /// cancelled and a fresh one starts on the new interval immediately.
    pub async fn set_speed(&self, speed: ReplaySpeed) {
        let restart = {
            let mut cursor = self.internal.cursor.lock().await;
            cursor.state.speed = speed;
            cursor.generation += 1;
            cursor
                .state
                .is_playing
                .then(|| (cursor.generation, speed.interval()))
        };
        match restart {
            Some((generation, interval)) => self.restart_timer(generation, interval).await,
            None => self.cancel_timer().await,
        }
    }

    /// Moves the cursor to the given tick (clamped) and pauses playback.
    pub async fn seek(&self, tick: usize) {
        {
            let mut cursor = self.internal.cursor.lock().await;
            cursor.state.tick = tick.min(self.internal.log.len().saturating_sub(1));
            cursor.state.is_playing = false;
            cursor.generation += 1;
            self.internal.publish(cursor.state.tick);
        }
        self.cancel_timer().await;
    }

    /// Moves the cursor to the given tick (clamped) without touching
    /// playback, so a progress-bar drag keeps the replay running.
    pub async fn scrub(&self, tick: usize) {
        let mut cursor = self.internal.cursor.lock().await;
        cursor.state.tick = tick.min(self.internal.log.len().saturating_sub(1));
        self.internal.publish(cursor.state.tick);
    }

    /// Stops playback and cancels the pending timer. Dropping the engine has
    /// the same effect.
    pub async fn cancel(&self) {
        self.pause().await;
    }

    async fn restart_timer(&self, generation: u64, interval: Duration) {
        let internal = self.internal.clone();
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                if !internal.advance(generation).await {
                    break;
                }
            }
        });
        // The superseded task already lost its generation under the cursor
        // lock, so aborting it after the swap cannot race an advancement.
        if let Some(previous) = self.timer_handle.lock().await.replace(handle) {
            previous.abort();
        }
    }

    async fn cancel_timer(&self) {
        if let Some(handle) = self.timer_handle.lock().await.take() {
            handle.abort();
        }
    }
}

impl Drop for BattleReplayEngine {
    fn drop(&mut self) {
        if let Some(handle) = self.timer_handle.get_mut().take() {
            handle.abort();
        }
    }
}
