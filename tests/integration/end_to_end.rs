//! Track, snapshot, and reset through the public API.

use api_telemetry::telemetry::{ApiCategory, Telemetry};
use serde_json::json;

#[test]
fn test_track_report_clear_cycle() {
    let telemetry = Telemetry::new(4);

    telemetry.track(ApiCategory::ManagedTransaction);
    telemetry.track(ApiCategory::UnmanagedTransaction);
    telemetry.track(ApiCategory::DirectRun);
    assert_eq!(telemetry.aggregate_count(), 3);
    assert!(!telemetry.is_cache_full());

    for _ in 0..3 {
        telemetry.track(ApiCategory::ExecuteQuery);
    }
    assert_eq!(telemetry.aggregate_count(), 6);
    assert!(telemetry.is_cache_full());
    assert_eq!(
        telemetry.create_message().to_value().unwrap(),
        json!({"metrics": {"api": {"fn": 1, "tx": 1, "run": 1, "exe": 3}}})
    );

    telemetry.clear();
    assert_eq!(telemetry.aggregate_count(), 0);
    assert!(!telemetry.is_cache_full());
    assert_eq!(
        telemetry.create_message().to_value().unwrap(),
        json!({"metrics": {"api": {}}})
    );
}

#[test]
fn test_message_only_lists_tracked_categories() {
    let telemetry = Telemetry::new(4);
    telemetry.track(ApiCategory::ManagedTransaction);
    telemetry.track(ApiCategory::ManagedTransaction);
    telemetry.track(ApiCategory::DirectRun);

    let message = telemetry.create_message();
    assert_eq!(
        serde_json::to_string(&message).unwrap(),
        r#"{"metrics":{"api":{"fn":2,"run":1}}}"#
    );
}

#[test]
fn test_snapshot_is_detached_from_counter() {
    let telemetry = Telemetry::new(10);
    telemetry.track(ApiCategory::DirectRun);
    let message = telemetry.create_message();

    telemetry.track(ApiCategory::DirectRun);
    telemetry.clear();

    assert_eq!(message.count(ApiCategory::DirectRun), 1);
    assert_eq!(message.total(), 1);
}

#[test]
fn test_reporter_flushes_when_full() {
    let telemetry = Telemetry::new(3);
    let mut exported = Vec::new();

    for call in 0..10u64 {
        let category = ApiCategory::ALL[(call % 4) as usize];
        telemetry.track(category);
        if telemetry.is_cache_full() {
            exported.push(telemetry.drain_message());
        }
    }

    assert_eq!(exported.len(), 3);
    assert!(exported.iter().all(|message| message.total() == 3));
    assert_eq!(telemetry.aggregate_count(), 1);
}
