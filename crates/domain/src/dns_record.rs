use crate::record_type::RecordType;
use std::net::Ipv4Addr;

/// TTL advertised on every answer record (RFC 6762 §10 recommendation for
/// records that may change).
pub const DEFAULT_RECORD_TTL: u32 = 120;

/// An answer record built by the matcher: always type A, class IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Dot-terminated owner name, copied from the matched question.
    pub name: String,

    pub record_type: RecordType,

    pub address: Ipv4Addr,

    pub ttl: u32,
}

impl DnsRecord {
    pub fn new(name: String, record_type: RecordType, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name,
            record_type,
            address,
            ttl,
        }
    }
}
