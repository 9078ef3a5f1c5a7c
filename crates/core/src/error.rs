use std::path::PathBuf;
use thiserror::Error;

/// Error type shared by every starbar crate.
///
/// The widget itself never returns one: drawing with missing icons is a
/// no-op and bad numbers are clamped. Errors only come from loading
/// attributes and icon files.
#[derive(Debug, Error)]
pub enum StarBarError {
    #[error("config error: {0}")]
    Config(String),

    #[error("cannot load icon '{}': {reason}", path.display())]
    Icon { path: PathBuf, reason: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = StarBarError> = std::result::Result<T, E>;
