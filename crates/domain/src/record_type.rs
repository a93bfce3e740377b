use std::fmt;

/// DNS record types this responder can see in a question.
///
/// Only `A` is ever answered. The named non-A variants exist so that logs
/// show something readable for the query types common on an mDNS segment;
/// anything else decodes structurally into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    PTR,
    SRV,
    TXT,
    Other(u16),
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::TXT => "TXT",
            RecordType::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Other(code) => write!(f, "TYPE{}", code),
            other => f.write_str(other.as_str()),
        }
    }
}
