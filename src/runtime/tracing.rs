/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG` environment variable
/// - **Compact formatting**: Spans inline, no module path prefix
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Accepted orders, desk lifecycle, issued numbers
/// - `RUST_LOG=debug` - Also full drafts at submission and store loads
/// - `RUST_LOG=vic_comanda::counter=debug` - Debug only for the counter
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Desk opening");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
