use thiserror::Error;

/// Failure classes for a transfer session.
///
/// `Configuration` is raised before any network activity, `Transfer` covers
/// anything that went wrong on the wire or in the protocol exchange, and
/// `LocalIo` covers the local file side of a download or upload.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("transfer error: {0}")]
    Transfer(String),

    #[error("local I/O error: {0}")]
    LocalIo(#[source] std::io::Error),
}

impl ClientError {
    pub fn configuration(message: impl Into<String>) -> Self {
        ClientError::Configuration(message.into())
    }

    pub fn transfer(message: impl Into<String>) -> Self {
        ClientError::Transfer(message.into())
    }

    pub fn local_io(err: std::io::Error) -> Self {
        ClientError::LocalIo(err)
    }
}
