/// Errors that can occur in property operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The bus exchange did not complete. Carries no further detail;
    /// a tag rejected by the device lands here too.
    #[error(transparent)]
    Transaction(#[from] motorlink_bus::TransactionError),

    /// The exchange completed but the response bytes were unusable.
    #[error("malformed response: {0}")]
    Response(#[from] motorlink_wire::WireError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
