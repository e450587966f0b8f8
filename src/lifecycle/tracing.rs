/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate with:
/// - **Environment-based filtering**: controlled via the `RUST_LOG` variable
/// - **Span tracking**: hierarchical context for async operations
///
/// # Environment Variables
///
/// - `RUST_LOG=info` - actor lifecycle and committed mutations
/// - `RUST_LOG=debug` - full request payloads
/// - `RUST_LOG=club_orders=debug` - debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
