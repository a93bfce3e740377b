//! Interface address lookup via `getifaddrs(3)`.

use mdns_pub_domain::DomainError;
use std::ffi::CStr;
use std::net::Ipv4Addr;
use std::{io, ptr};

/// Returns the first IPv4 address assigned to the named interface.
///
/// `UnknownInterface` when no interface of that name carries any address,
/// `NoIpv4Address` when the interface exists but is IPv6/link-layer only.
pub fn interface_ipv4(name: &str) -> Result<Ipv4Addr, DomainError> {
    let mut ifaddrs: *mut libc::ifaddrs = ptr::null_mut();

    // SAFETY: getifaddrs allocates the list; it is walked read-only below
    // and released with freeifaddrs before returning.
    let rc = unsafe { libc::getifaddrs(&mut ifaddrs) };
    if rc != 0 {
        return Err(DomainError::IoError(format!(
            "getifaddrs failed: {}",
            io::Error::last_os_error()
        )));
    }

    let mut interface_seen = false;
    let mut found = None;

    let mut cursor = ifaddrs;
    while !cursor.is_null() {
        // SAFETY: cursor is a valid node of the list returned above.
        let entry = unsafe { &*cursor };
        cursor = entry.ifa_next;

        if entry.ifa_name.is_null() {
            continue;
        }
        // SAFETY: ifa_name is a NUL-terminated string owned by the list.
        let entry_name = unsafe { CStr::from_ptr(entry.ifa_name) };
        if entry_name.to_bytes() != name.as_bytes() {
            continue;
        }
        interface_seen = true;

        if entry.ifa_addr.is_null() {
            continue;
        }
        // SAFETY: ifa_addr points at a sockaddr whose family tags its
        // concrete type; only AF_INET entries are reinterpreted.
        let family = unsafe { (*entry.ifa_addr).sa_family };
        if i32::from(family) != libc::AF_INET {
            continue;
        }
        let addr_in = unsafe { &*(entry.ifa_addr as *const libc::sockaddr_in) };

        // s_addr is in network byte order.
        found = Some(Ipv4Addr::from(u32::from_be(addr_in.sin_addr.s_addr)));
        break;
    }

    // SAFETY: releases the list allocated by getifaddrs.
    unsafe { libc::freeifaddrs(ifaddrs) };

    match found {
        Some(addr) => Ok(addr),
        None if interface_seen => Err(DomainError::NoIpv4Address(name.to_string())),
        None => Err(DomainError::UnknownInterface(name.to_string())),
    }
}
