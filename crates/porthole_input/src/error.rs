//! Translation error types

use thiserror::Error;

use crate::event::{Key, MouseButton};

/// Failure to resolve a host input identifier to an engine token
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranslateError {
    /// Key has no entry in the key table
    #[error("No engine token for key {0:?}")]
    UnmappedKey(Key),

    /// Mouse button has no entry in the button table
    #[error("No engine token for mouse button {0:?}")]
    UnmappedButton(MouseButton),
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslateError>;
