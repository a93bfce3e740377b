use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid host name: {0}")]
    InvalidHostName(String),

    #[error("Failed to decode DNS message: {0}")]
    MessageDecode(String),

    #[error("Failed to encode DNS message: {0}")]
    MessageEncode(String),

    #[error("Socket error: {0}")]
    Socket(String),

    #[error("Interface {0} has no IPv4 address")]
    NoIpv4Address(String),

    #[error("Unknown network interface: {0}")]
    UnknownInterface(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
