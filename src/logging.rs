use tracing_subscriber::EnvFilter;

/// Log assertion failures through the test harness's captured output.
/// Filter comes from `RUST_LOG`. Calling this again is a no-op.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
