use std::time::Duration;

use serde_json::{Value, json};
use tokio::sync::broadcast;
use tokio::time::timeout;

use leaderboard_core::StandingsChange;
use runtime::{
    ChannelPushSource, Event, FeedEvent, PayloadOrigin, Runtime, RuntimeError, RuntimeHandle,
    SnapshotFetchError, StaticSnapshotSource, StreamDisconnected, Topic,
};

const WAIT: Duration = Duration::from_secs(2);

fn payload(uuid: &str, name: &str, day: u32, elves: u32, money: &str) -> Value {
    json!({
        "uuid": uuid,
        "player_name": name,
        "current_day": day,
        "elves_remaining": elves,
        "money_made": money,
    })
}

fn order(handle: &RuntimeHandle) -> Vec<String> {
    handle
        .ordered_identities()
        .iter()
        .map(|id| id.to_string())
        .collect()
}

async fn next_event(rx: &mut broadcast::Receiver<Event>) -> Event {
    timeout(WAIT, rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

async fn started() -> Runtime {
    Runtime::builder()
        .build()
        .await
        .expect("Runtime should start successfully")
}

#[tokio::test]
async fn snapshot_then_push_updates_reorder_rows() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();

    let summary = bridge
        .apply_snapshot(vec![payload("u1", "Steve", 5, 4, "150.00")])
        .await
        .unwrap();
    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.rejected, 0);
    assert_eq!(order(&handle), ["u1"]);
    assert_eq!(
        handle.get("u1").unwrap().money_made(),
        "150.00".parse().unwrap()
    );

    let update = json!({"uuid": "u2", "player_name": "Ana", "money_made": "200.00"});
    bridge.apply_message(&update.to_string()).await.unwrap();
    assert_eq!(order(&handle), ["u2", "u1"]);

    let update = json!({"uuid": "u1", "player_name": "Steve", "money_made": "250.00"});
    let change = bridge.apply_message(&update.to_string()).await.unwrap();
    assert!(matches!(
        change,
        Some(StandingsChange::Changed {
            inserted: false,
            ..
        })
    ));
    assert_eq!(order(&handle), ["u1", "u2"]);
    assert_eq!(handle.view().len(), 2);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn malformed_push_message_is_dropped() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();

    bridge
        .apply_snapshot(vec![
            payload("u1", "Steve", 5, 4, "150.00"),
            payload("u2", "Ana", 3, 6, "200.00"),
        ])
        .await
        .unwrap();
    let before = order(&handle);

    let mut feed = handle.subscribe(Topic::Feed);
    let mut standings = handle.subscribe(Topic::Standings);

    let outcome = bridge
        .apply_message(r#"{"player_name": "Nobody", "money_made": "999.00"}"#)
        .await
        .unwrap();
    assert!(outcome.is_none());
    assert_eq!(order(&handle), before);

    match next_event(&mut feed).await {
        Event::Feed(FeedEvent::PayloadRejected { origin, .. }) => {
            assert_eq!(origin, PayloadOrigin::Push);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(standings.try_recv().is_err(), "no standings notification expected");

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn snapshot_skips_malformed_records_and_keeps_input_order() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();

    let summary = bridge
        .apply_snapshot(vec![
            payload("a", "A", 1, 12, "10.00"),
            json!({"uuid": "broken", "money_made": "not money"}),
            payload("b", "B", 1, 12, "10.00"),
            json!("not an object"),
            payload("c", "C", 2, 10, "30.00"),
        ])
        .await
        .unwrap();

    assert_eq!(summary.accepted, 3);
    assert_eq!(summary.rejected, 2);
    assert_eq!(order(&handle), ["c", "a", "b"]);
    assert!(handle.get("broken").is_none());

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn replace_emits_single_notification() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();
    let mut events = handle.subscribe(Topic::Standings);

    bridge
        .apply_snapshot(vec![
            payload("a", "A", 1, 12, "1.00"),
            payload("b", "B", 1, 12, "2.00"),
            payload("c", "C", 1, 12, "3.00"),
        ])
        .await
        .unwrap();

    assert_eq!(
        next_event(&mut events).await,
        Event::Standings(StandingsChange::Replaced { count: 3 })
    );
    assert!(events.try_recv().is_err());

    bridge
        .apply_snapshot(vec![payload("z", "Z", 1, 12, "0.50")])
        .await
        .unwrap();
    assert_eq!(
        next_event(&mut events).await,
        Event::Standings(StandingsChange::Replaced { count: 1 })
    );
    assert_eq!(order(&handle), ["z"]);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn push_before_snapshot_is_applied_then_overwritten() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();
    let mut events = handle.subscribe(Topic::Standings);

    let (tx, source) = ChannelPushSource::channel(8);
    let subscription = bridge.subscribe(source);

    tx.send(Ok(payload("early", "Early", 2, 9, "500.00").to_string()))
        .await
        .unwrap();
    tx.send(Ok(payload("u1", "Steve", 6, 3, "175.00").to_string()))
        .await
        .unwrap();
    next_event(&mut events).await;
    next_event(&mut events).await;
    assert_eq!(order(&handle), ["early", "u1"]);

    // The snapshot is authoritative: it replaces the early upserts wholesale.
    bridge
        .apply_snapshot(vec![payload("u1", "Steve", 5, 4, "150.00")])
        .await
        .unwrap();
    assert_eq!(order(&handle), ["u1"]);
    assert_eq!(handle.get("u1").unwrap().current_day(), 5);

    drop(tx);
    subscription.join().await.unwrap();
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn push_events_apply_in_arrival_order() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();

    let (tx, source) = ChannelPushSource::channel(32);
    let subscription = bridge.subscribe(source);

    for day in 1..=10u32 {
        let money = format!("{}.00", day * 10);
        tx.send(Ok(payload("u1", "Steve", day, 12, &money).to_string()))
            .await
            .unwrap();
    }
    drop(tx);
    subscription.join().await.unwrap();

    let record = handle.get("u1").unwrap();
    assert_eq!(record.current_day(), 10);
    assert_eq!(record.money_made().to_string(), "100.00");
    assert!(record.is_complete());
    assert_eq!(handle.view().len(), 1);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn snapshot_fetch_failure_leaves_standings_untouched() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();

    bridge
        .apply_message(&payload("u1", "Steve", 1, 12, "10.00").to_string())
        .await
        .unwrap();

    let mut feed = handle.subscribe(Topic::Feed);
    let source = StaticSnapshotSource::failing(SnapshotFetchError::Status {
        status: 503,
        body: "maintenance".into(),
    });

    let result = bridge.load_snapshot(&source).await;
    assert!(matches!(
        result,
        Err(RuntimeError::SnapshotFetch(SnapshotFetchError::Status {
            status: 503,
            ..
        }))
    ));
    assert_eq!(order(&handle), ["u1"]);
    assert!(matches!(
        next_event(&mut feed).await,
        Event::Feed(FeedEvent::SnapshotFailed { .. })
    ));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn load_snapshot_from_source() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();
    let mut feed = handle.subscribe(Topic::Feed);

    let source = StaticSnapshotSource::new(vec![
        payload("u1", "Steve", 5, 4, "150.00"),
        json!({"uuid": "", "money_made": "1.00"}),
    ]);
    let summary = bridge.load_snapshot(&source).await.unwrap();
    assert_eq!((summary.accepted, summary.rejected), (1, 1));

    let mut saw_loaded = false;
    while let Ok(Ok(event)) = timeout(Duration::from_millis(200), feed.recv()).await {
        if event == Event::Feed(FeedEvent::SnapshotLoaded { accepted: 1, rejected: 1 }) {
            saw_loaded = true;
        }
    }
    assert!(saw_loaded);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn stream_disconnect_keeps_last_state() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();
    let mut feed = handle.subscribe(Topic::Feed);

    let (tx, source) = ChannelPushSource::channel(4);
    let subscription = bridge.subscribe(source);

    tx.send(Ok(payload("u1", "Steve", 2, 10, "40.00").to_string()))
        .await
        .unwrap();
    tx.send(Err(StreamDisconnected::new("connection reset")))
        .await
        .unwrap();

    let result = subscription.join().await;
    assert!(matches!(result, Err(RuntimeError::StreamDisconnected(_))));
    assert_eq!(order(&handle), ["u1"]);

    assert_eq!(next_event(&mut feed).await, Event::Feed(FeedEvent::StreamConnected));
    assert_eq!(
        next_event(&mut feed).await,
        Event::Feed(FeedEvent::StreamDisconnected {
            reason: "connection reset".into()
        })
    );

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn views_are_immutable_snapshots() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();

    bridge
        .apply_snapshot(vec![payload("a", "A", 1, 12, "5.00")])
        .await
        .unwrap();
    let before = handle.ordered_identities();

    bridge
        .apply_message(&payload("b", "B", 1, 12, "9.00").to_string())
        .await
        .unwrap();

    let captured: Vec<&str> = before.iter().map(|id| id.as_str()).collect();
    assert_eq!(captured, ["a"]);
    let again: Vec<&str> = (&before).into_iter().map(|id| id.as_str()).collect();
    assert_eq!(again, captured);
    assert_eq!(order(&handle), ["b", "a"]);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn handles_outlive_shutdown() {
    let runtime = started().await;
    let handle = runtime.handle();
    let bridge = runtime.bridge();

    bridge
        .apply_snapshot(vec![payload("a", "A", 1, 12, "5.00")])
        .await
        .unwrap();
    assert!(!handle.is_closed());
    runtime.shutdown().await.unwrap();

    assert!(handle.is_closed());
    assert_eq!(order(&handle), ["a"]);
    let result = bridge
        .apply_message(&payload("b", "B", 1, 12, "9.00").to_string())
        .await;
    assert!(matches!(result, Err(RuntimeError::CommandChannelClosed)));
}
