use thiserror::Error;

/// Failures the navbar can run into. None of them is fatal: callers fall
/// back to defaults and log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavbarError {
    #[error("user attribute lookup failed: {0}")]
    Lookup(String),
    #[error("browser storage unavailable: {0}")]
    Storage(String),
    #[error("navigation failed: {0}")]
    Navigation(String),
}
