//! Newsline Core - configuration and shared foundations
//!
//! Provides the configuration layer, runtime mode selection, and the
//! top-level error type shared by the Newsline crates.

pub mod config;
pub mod mode;

// Re-export main types for convenient access
pub use config::NewslineConfig;
pub use mode::RuntimeMode;

/// Errors that can bubble up from any Newsline subsystem.
#[derive(Debug, thiserror::Error)]
pub enum NewslineError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NewslineError>;
