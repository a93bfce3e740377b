//! Multicast socket construction.
//!
//! Built with `socket2` so reuse flags can be set before bind: other mDNS
//! stacks (avahi, mDNSResponder) are usually already bound to 5353 on the
//! same host, and SO_REUSEADDR/SO_REUSEPORT lets this responder coexist
//! with them.

use mdns_pub_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, SocketAddrV4};
use tokio::net::UdpSocket;
use tracing::info;

/// IPv4 mDNS well-known group (RFC 6762 §3).
pub const MDNS_GROUP: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 251);

/// mDNS well-known port.
pub const MDNS_PORT: u16 = 5353;

/// Binds `0.0.0.0:5353` and joins the mDNS group on the interface that
/// owns `interface_addr`. The returned socket is non-blocking and
/// registered with the tokio reactor.
pub fn bind_multicast_socket(interface_addr: Ipv4Addr) -> Result<UdpSocket, DomainError> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))
        .map_err(|e| DomainError::Socket(format!("failed to create socket: {}", e)))?;

    socket
        .set_reuse_address(true)
        .map_err(|e| DomainError::Socket(format!("failed to set SO_REUSEADDR: {}", e)))?;

    #[cfg(unix)]
    socket
        .set_reuse_port(true)
        .map_err(|e| DomainError::Socket(format!("failed to set SO_REUSEPORT: {}", e)))?;

    let bind_addr = SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, MDNS_PORT);
    socket
        .bind(&bind_addr.into())
        .map_err(|e| DomainError::Socket(format!("failed to bind {}: {}", bind_addr, e)))?;

    socket
        .join_multicast_v4(&MDNS_GROUP, &interface_addr)
        .map_err(|e| {
            DomainError::Socket(format!(
                "failed to join {} on {}: {}",
                MDNS_GROUP, interface_addr, e
            ))
        })?;

    socket
        .set_nonblocking(true)
        .map_err(|e| DomainError::Socket(format!("failed to set non-blocking: {}", e)))?;

    let std_socket: std::net::UdpSocket = socket.into();
    let socket = UdpSocket::from_std(std_socket)
        .map_err(|e| DomainError::Socket(format!("failed to register with reactor: {}", e)))?;

    info!(group = %MDNS_GROUP, port = MDNS_PORT, interface = %interface_addr, "joined mDNS group");

    Ok(socket)
}
