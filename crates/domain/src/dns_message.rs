use crate::record_type::RecordType;

/// DNS class of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordClass {
    In,
    Other(u16),
}

/// One entry from the question section of an inbound query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Dot-terminated, fully-qualified name as it appeared on the wire.
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
}

/// A parsed inbound DNS message.
///
/// Transient: constructed per packet, matched, and discarded. Only the
/// fields the matcher and the reply path need are carried; everything else
/// in the wire message is decoded and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMessage {
    /// Transaction id, echoed verbatim into the reply.
    pub id: u16,
    pub questions: Vec<Question>,
}
