use std::path::PathBuf;

/// The single failure surfaced by a bus exchange.
///
/// Any deviation from a fully completed exchange — missing acknowledge,
/// short read, bus timeout, request rejected by the device — collapses
/// into this one value. The protocol layer deliberately carries no
/// retry policy and no error taxonomy; those belong to the embedding
/// application. Implementations log the underlying cause before
/// returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("bus transaction failed")]
pub struct TransactionError;

/// Failed to open a bus adapter device.
///
/// Opening is setup rather than a transaction, so the cause is kept.
#[derive(Debug, thiserror::Error)]
#[error("failed to open bus device {}: {source}", .path.display())]
pub struct BusOpenError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A device selector outside the 3-bit strap range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("device selector out of range (got {0}, max 7)")]
pub struct SelectorError(pub u8);

pub type Result<T> = std::result::Result<T, TransactionError>;
