//! Errors raised while streaming a rendering into a caller-supplied sink.

use thiserror::Error;

/// Rendering itself cannot fail. Only the sink it is written to can.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("failed to write rendering: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("failed to write rendering: {0}")]
    Io(#[from] std::io::Error),
}
