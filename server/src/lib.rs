//! Wedding Chronicle Server Library
//!
//! The invitation itself runs entirely in the browser. This crate only
//! serves the compiled bundle for previews and validates the invitation
//! content before a build.
//!
//! # Modules
//!
//! - [`check`] - Content validation
//! - [`router`] - Static bundle + HTML shell router
//! - [`shell`] - The HTML document that boots the WASM bundle

pub mod check;
pub mod router;
pub mod shell;

pub use router::create_router;
pub use shell::Shell;

/// Invitation content path relative to the workspace root.
pub const DEFAULT_INVITATION: &str = "crates/wedding-core/content/invitation.toml";

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
