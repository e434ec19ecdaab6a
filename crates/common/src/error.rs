use thiserror::Error;

/// Errors produced while managing peer addresses
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid multiaddr {input:?}: {reason}")]
    InvalidMultiaddr { input: String, reason: String },
}

/// Result type for address operations
pub type Result<T> = std::result::Result<T, AddressError>;

impl AddressError {
    pub fn invalid_multiaddr(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMultiaddr {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
