use rask_log_relay::{FnSink, LogLevel, LogRecord, Relay, RelayError, StorageSink};
use std::sync::Arc;
use tracing_test::traced_test;

#[traced_test]
#[test]
fn test_dropped_message_is_reported_at_debug() {
    let relay = Relay::new("@quiet", LogLevel::ERROR);
    relay.add_output_to(Arc::new(StorageSink::new()));

    relay.log_at("too chatty", LogLevel::DEBUG).unwrap();

    assert!(logs_contain("Dropped message below relay level"));
    assert!(logs_contain("@quiet"));
}

#[traced_test]
#[test]
fn test_target_failure_is_reported_at_warn() {
    let relay = Relay::new("@loud", LogLevel::ALL);
    relay.add_output_to(Arc::new(FnSink::new("flaky", |_: &LogRecord| {
        Err(RelayError::sink("flaky", "unavailable"))
    })));

    assert!(relay.log("m").is_err());

    assert!(logs_contain("Target failed; remaining targets skipped"));
    assert!(logs_contain("flaky"));
}

#[traced_test]
#[test]
fn test_registration_is_reported() {
    let relay = Relay::new("@wired", LogLevel::ALL);
    relay.add_output_to(Arc::new(StorageSink::new()));

    assert!(logs_contain("Registered output"));
    assert!(logs_contain("storage"));
}
