use quip::setup_logging;

#[test]
fn test_logging_setup() {
    // Subscriber registration is process-global; this test binary owns it, so
    // a single call must succeed without panicking.
    let result = std::panic::catch_unwind(|| {
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging should not panic");
}
