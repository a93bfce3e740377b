//! Inbound message decoding.
//!
//! Decodes a raw UDP payload with `hickory-proto` and maps the question
//! section into domain values. Anything truncated or malformed becomes a
//! `DomainError::MessageDecode`; no partial state survives a failed parse.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::Message;
use hickory_proto::rr::DNSClass;
use mdns_pub_domain::{DomainError, Question, QueryMessage, RecordClass};

pub fn parse_query(bytes: &[u8]) -> Result<QueryMessage, DomainError> {
    let message = Message::from_vec(bytes)
        .map_err(|e| DomainError::MessageDecode(e.to_string()))?;

    let questions = message
        .queries()
        .iter()
        .map(|query| {
            // Wire-format names are always fully qualified; keep the
            // registry comparison a plain string match by normalising to
            // the dot-terminated form.
            let mut name = query.name().to_utf8();
            if !name.ends_with('.') {
                name.push('.');
            }

            Question {
                name,
                record_type: RecordTypeMapper::from_hickory(query.query_type()),
                class: match query.query_class() {
                    DNSClass::IN => RecordClass::In,
                    other => RecordClass::Other(u16::from(other)),
                },
            }
        })
        .collect();

    Ok(QueryMessage {
        id: message.id(),
        questions,
    })
}
