// Runs in its own test binary: it installs the global subscriber and
// changes the process environment.
use tracing::Level;

#[test]
fn test_rust_log_controls_output_without_verbose() {
    // SAFETY: this binary has a single test, so nothing else reads the
    // environment concurrently.
    unsafe {
        std::env::set_var("RUST_LOG", "lookthrough=debug,hyper=debug");
    }
    lookthrough::core::log::init_logging(false);

    assert!(tracing::enabled!(target: "lookthrough", Level::DEBUG));
    assert!(tracing::enabled!(target: "hyper", Level::DEBUG));
    assert!(!tracing::enabled!(target: "lookthrough", Level::TRACE));
    assert!(!tracing::enabled!(target: "axum", Level::DEBUG));
}
