//! Error types for shoplist-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an entry was rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Error), uniffi(flat_error))]
pub enum ValidationError {
    /// One or more fields blank after trimming
    #[error("all fields must be filled")]
    EmptyField,

    /// Quantity is not a positive number
    #[error("quantity must be a positive number")]
    InvalidQuantity,

    /// Repeated whitespace between quantity and unit
    #[error("quantity and unit must be separated by exactly one space")]
    WhitespaceFormat,

    /// Name already present, ignoring case
    #[error("item already in the list")]
    DuplicateItem,

    /// The id counter cannot advance past `u64::MAX`
    #[error("no more item ids available")]
    IdsExhausted,
}

impl ValidationError {
    /// Stable identifier for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyField => "empty_field",
            Self::InvalidQuantity => "invalid_quantity",
            Self::WhitespaceFormat => "whitespace_format",
            Self::DuplicateItem => "duplicate_item",
            Self::IdsExhausted => "ids_exhausted",
        }
    }
}

/// Errors from parsing a command line into a [`crate::Command`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// Nothing to parse
    #[error("empty command")]
    Empty,

    /// First word is not a known command
    #[error("unknown command: {0}")]
    Unknown(String),

    /// Command given without its argument
    #[error("usage: {0}")]
    MissingArgument(&'static str),

    /// Argument is not a valid item id
    #[error("invalid item id: {0}")]
    InvalidId(String),
}
