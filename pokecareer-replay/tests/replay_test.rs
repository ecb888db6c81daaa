use std::time::Duration;

use pokecareer_replay::{
    BattleReplayEngine,
    ReplaySpeed,
};
use pokecareer_test_utils::battle_log_for_test;

#[tokio::test(start_paused = true)]
async fn playback_advances_each_interval_and_halts_at_the_final_tick() {
    let engine = BattleReplayEngine::new(battle_log_for_test(5), "Charmander");
    let mut frames = engine.subscribe();
    assert_eq!(frames.borrow_and_update().as_ref().unwrap().tick, 0);

    engine.play().await;
    for expected in 1..=4 {
        frames.changed().await.unwrap();
        assert_eq!(frames.borrow_and_update().as_ref().unwrap().tick, expected);
    }
    assert!(frames.borrow().as_ref().unwrap().at_final_tick);

    // The loop halts at the final index; no further frames arrive.
    assert!(!engine.replay_state().await.is_playing);
    assert!(
        tokio::time::timeout(Duration::from_secs(10), frames.changed())
            .await
            .is_err()
    );
}

#[tokio::test(start_paused = true)]
async fn speed_change_restarts_the_cadence_immediately() {
    let engine = BattleReplayEngine::new(battle_log_for_test(10), "Charmander");
    let mut frames = engine.subscribe();
    frames.borrow_and_update();

    engine.play().await;
    let start = tokio::time::Instant::now();
    frames.changed().await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(1000));

    engine.set_speed(ReplaySpeed::Quadruple).await;
    let start = tokio::time::Instant::now();
    frames.changed().await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(250));

    engine.set_speed(ReplaySpeed::Half).await;
    let start = tokio::time::Instant::now();
    frames.changed().await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn pause_stops_advancement() {
    let engine = BattleReplayEngine::new(battle_log_for_test(5), "Charmander");
    let mut frames = engine.subscribe();
    frames.borrow_and_update();

    engine.play().await;
    frames.changed().await.unwrap();
    engine.pause().await;
    frames.borrow_and_update();

    assert!(!engine.replay_state().await.is_playing);
    assert!(
        tokio::time::timeout(Duration::from_secs(10), frames.changed())
            .await
            .is_err()
    );
}

#[tokio::test(start_paused = true)]
async fn seek_clamps_the_tick_and_pauses() {
    let engine = BattleReplayEngine::new(battle_log_for_test(5), "Charmander");
    let mut frames = engine.subscribe();
    frames.borrow_and_update();

    engine.play().await;
    engine.seek(99).await;

    let state = engine.replay_state().await;
    assert_eq!(state.tick, 4);
    assert!(!state.is_playing);

    frames.changed().await.unwrap();
    assert!(frames.borrow_and_update().as_ref().unwrap().at_final_tick);
    assert!(
        tokio::time::timeout(Duration::from_secs(10), frames.changed())
            .await
            .is_err()
    );
}

#[tokio::test(start_paused = true)]
async fn scrub_moves_the_cursor_without_pausing() {
    let engine = BattleReplayEngine::new(battle_log_for_test(10), "Charmander");
    let mut frames = engine.subscribe();
    frames.borrow_and_update();

    engine.play().await;
    engine.scrub(5).await;

    let state = engine.replay_state().await;
    assert_eq!(state.tick, 5);
    assert!(state.is_playing);

    // The scrub publishes tick 5, then the running timer carries on from it.
    frames.changed().await.unwrap();
    assert_eq!(frames.borrow_and_update().as_ref().unwrap().tick, 5);
    frames.changed().await.unwrap();
    assert_eq!(frames.borrow_and_update().as_ref().unwrap().tick, 6);
}

#[tokio::test(start_paused = true)]
async fn play_at_the_final_tick_is_a_no_op() {
    let engine = BattleReplayEngine::new(battle_log_for_test(3), "Charmander");
    let mut frames = engine.subscribe();

    engine.seek(2).await;
    frames.borrow_and_update();

    engine.play().await;
    assert!(!engine.replay_state().await.is_playing);
    assert!(
        tokio::time::timeout(Duration::from_secs(10), frames.changed())
            .await
            .is_err()
    );
}

#[tokio::test(start_paused = true)]
async fn frames_accumulate_the_classified_log_prefix() {
    let engine = BattleReplayEngine::new(battle_log_for_test(4), "Charmander");
    let mut frames = engine.subscribe();
    frames.borrow_and_update();

    engine.play().await;
    frames.changed().await.unwrap();
    frames.changed().await.unwrap();

    let frame = frames.borrow_and_update().clone().unwrap();
    assert_eq!(frame.tick, 2);
    assert_eq!(frame.log.len(), 2);
    assert_eq!(frame.player_one.name, "Charmander");
    assert_eq!(frame.player_two.name, "Squirtle");
}

#[tokio::test(start_paused = true)]
async fn empty_log_publishes_no_frame() {
    let engine = BattleReplayEngine::new(Vec::new(), "Charmander");
    let frames = engine.subscribe();
    assert!(frames.borrow().is_none());

    engine.play().await;
    assert!(!engine.replay_state().await.is_playing);
}
