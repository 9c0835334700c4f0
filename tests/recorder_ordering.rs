mod common;

use std::sync::Arc;

use common::{init_tracing, FakeBridge, UserService};
use lifecycle_recorder::{CallResult, EntryFilter, EventListener, EventRecorder, RecorderError};
use serde_json::json;

#[test]
fn test_drain_all_preserves_invocation_order() {
    init_tracing();
    let mut bridge = FakeBridge::new(EventRecorder::new());

    // 1. Full engine lifecycle
    bridge.listener.engine_created();
    bridge.load_module("app.js");
    bridge.listener.bind_service("UserService", &UserService);
    bridge.call("UserService", Arc::new(UserService), "hello", vec![json!("Jesse")], CallResult::Success(json!("hi Jesse")));
    bridge.listener.service_leaked("UserService");
    bridge.listener.engine_closed();

    // 2. Every hook yields exactly one entry, in order
    let log = bridge.listener.drain_all(&EntryFilter::all());
    assert_eq!(
        log,
        vec![
            "ziplineCreated",
            "moduleLoadStart app.js",
            "moduleLoadEnd app.js",
            "bindService UserService",
            r#"callStart 1 UserService hello ["Jesse"]"#,
            r#"callEnd 1 UserService hello ["Jesse"] Success("hi Jesse")"#,
            "serviceLeaked UserService",
            "ziplineClosed",
        ]
    );
    assert!(bridge.listener.is_empty(), "drain_all must empty the log");
}

#[test]
fn test_take_next_consumes_from_head() {
    let mut recorder = EventRecorder::new();
    recorder.engine_created();
    recorder.module_load_start("m1");
    recorder.engine_closed();
    assert_eq!(recorder.len(), 3);

    let filter = EntryFilter::default();
    assert_eq!(recorder.take_next(&filter).unwrap(), "ziplineCreated");
    assert_eq!(recorder.take_next(&filter).unwrap(), "moduleLoadStart m1");
    assert_eq!(recorder.take_next(&filter).unwrap(), "ziplineClosed");
    assert_eq!(recorder.len(), 0);
}

#[test]
fn test_skipped_entries_are_gone_for_good() {
    let mut recorder = EventRecorder::new();
    recorder.module_load_start("m1");
    recorder.engine_created();

    // Skipping module events discards "moduleLoadStart m1" permanently
    let filter = EntryFilter::default().skip_module_events(true);
    assert_eq!(recorder.take_next(&filter).unwrap(), "ziplineCreated");

    assert!(recorder.drain_all(&EntryFilter::all()).is_empty(), "Skipped entry must not come back");
}

#[test]
fn test_take_next_on_empty_log_underflows() {
    let mut recorder = EventRecorder::new();
    let err = recorder.take_next(&EntryFilter::default()).unwrap_err();
    assert_eq!(err, RecorderError::Underflow { wanted: "a matching entry", discarded: 0 });
}

#[test]
fn test_underflow_after_filtering_everything_out() {
    let mut recorder = EventRecorder::new();
    recorder.module_load_start("m1");
    recorder.module_load_end("m1", None);

    let filter = EntryFilter::default().skip_module_events(true);
    match recorder.take_next(&filter) {
        Err(RecorderError::Underflow { discarded, .. }) => assert_eq!(discarded, 2),
        other => panic!("expected underflow, got {:?}", other),
    }
    // The failed scan still consumed everything
    assert!(recorder.is_empty());
}

#[test]
fn test_drain_all_on_empty_log_never_fails() {
    let mut recorder = EventRecorder::new();
    assert!(recorder.drain_all(&EntryFilter::default()).is_empty());
    assert!(recorder.drain_all(&EntryFilter::all()).is_empty());
    assert!(recorder
        .drain_all(&EntryFilter::default().skip_module_events(true).skip_service_events(true))
        .is_empty());
}

#[test]
fn test_drain_all_interleaves_with_take_next() {
    let mut recorder = EventRecorder::new();
    recorder.engine_created();
    recorder.download_start("red", "https://example.com/red/manifest.json");
    recorder.module_load_start("red.js");
    recorder.engine_closed();

    assert_eq!(recorder.take_next(&EntryFilter::default()).unwrap(), "ziplineCreated");

    let rest = recorder.drain_all(&EntryFilter::default().skip_application_events(true));
    assert_eq!(rest, vec!["moduleLoadStart red.js", "ziplineClosed"]);
}

#[test]
fn test_take_next_entry_exposes_fields() -> anyhow::Result<()> {
    let mut recorder = EventRecorder::new();
    recorder.module_load_start("red.js");
    recorder.application_load_start("red", Some("https://example.com/red/manifest.json"));

    let module = recorder.take_next_entry(&EntryFilter::default())?;
    assert_eq!(module.module_id(), Some("red.js"));
    assert_eq!(module.service_name(), None);
    assert!(module.failure().is_none());

    let app = recorder.take_next_entry(&EntryFilter::default())?;
    assert_eq!(app.application_name(), Some("red"));
    assert_eq!(app.message(), "applicationLoadStart red https://example.com/red/manifest.json");
    Ok(())
}
