//! Error model for the stock-input boundary.

use thiserror::Error;

/// Result type used wherever stock lists are read or decoded.
pub type StockResult<T> = Result<T, StockError>;

/// Failure to obtain a stock list.
///
/// The rule engine itself has no error conditions: any name, any day count
/// and any quality is accepted. These variants only describe documents that
/// could not be read or parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// The stock source could not be read.
    #[error("failed to read stock from {source_name}: {message}")]
    Io {
        source_name: String,
        message: String,
    },

    /// The stock document was not a valid list of items.
    #[error("malformed stock document: {0}")]
    Decode(String),
}

impl StockError {
    pub fn io(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
