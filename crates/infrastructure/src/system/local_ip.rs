//! Default-route reachability probe.

use mdns_pub_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Address used to discover which local address the default route uses.
/// No packet is ever sent; connecting a UDP socket only selects a route.
const PROBE_ADDR: &str = "8.8.8.8:80";

/// Derives the local IPv4 address the kernel would use to reach the
/// internet. Last-resort fallback when neither an explicit address nor a
/// source interface is configured.
pub fn default_route_ipv4() -> Result<Ipv4Addr, DomainError> {
    let socket = UdpSocket::bind("0.0.0.0:0")
        .map_err(|e| DomainError::IoError(format!("failed to bind probe socket: {}", e)))?;

    socket
        .connect(PROBE_ADDR)
        .map_err(|e| DomainError::IoError(format!("failed to connect probe socket: {}", e)))?;

    let local = socket
        .local_addr()
        .map_err(|e| DomainError::IoError(format!("failed to read probe local address: {}", e)))?;

    match local.ip() {
        IpAddr::V4(addr) => Ok(addr),
        IpAddr::V6(addr) => Err(DomainError::IoError(format!(
            "default route resolved to IPv6 address {}",
            addr
        ))),
    }
}
