use crate::host_name::HostName;
use std::net::Ipv4Addr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No names to publish (set MDNS_PUB_NAMES or --names)")]
    NoNames,

    #[error("Invalid name '{0}': {1}")]
    InvalidName(String, String),

    #[error("Bind interface is required (set MDNS_PUB_BIND_IFACE or --bind-iface)")]
    MissingBindInterface,

    #[error("Failed to parse local IP address '{0}'")]
    InvalidLocalIp(String),

    #[error("Failed to resolve a local answer address: {0}")]
    AnswerAddressResolution(String),
}

/// Where the answer address comes from, in the order the bootstrap tries
/// them: an explicit address, the first IPv4 of a named interface, or the
/// source address of the default route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerAddressSource {
    Explicit(Ipv4Addr),
    Interface(String),
    DefaultRoute,
}

/// Fully validated startup configuration.
///
/// Produced once by the bootstrap before any socket is opened; immutable
/// for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Names to answer for. Non-empty, each validated and dot-terminated.
    pub names: Vec<HostName>,

    /// Interface the multicast socket joins the mDNS group on.
    pub bind_interface: String,

    pub answer_address: AnswerAddressSource,
}
