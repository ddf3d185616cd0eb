//! navtab Core
//!
//! Coordination layer for the navigation bar: loads the tab table from
//! configuration, classifies each navigation event and hands the highlight
//! model to the rendering layer. Rendering itself happens elsewhere.

mod config;
mod error;
mod navbar;

pub use config::Config;
pub use error::CoreError;
pub use navbar::{NavBar, NavItem, NavUpdate};

// Re-export route classification
pub use navtab_routes::{
    classify, classify_with_reason, Classification, ClassificationInput, MatchKind,
    PrefixOverlap, RouteError, TabDefinition, TabSet,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    init_logging_with("info");
}

/// Initialize logging, using `default_filter` when `RUST_LOG` is unset.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is kept.
pub fn init_logging_with(default_filter: &str) -> bool {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match fmt().with_env_filter(filter).with_target(true).try_init() {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Logging already initialized");
            false
        }
    }
}
