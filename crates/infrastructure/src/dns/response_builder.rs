//! Outbound answer encoding.
//!
//! Builds the reply for a matched query in wire format using
//! `hickory-proto`. mDNS answers carry no question echo: the reply is a
//! header (Response, Opcode Query, Authoritative) plus the Answer section.
//! hickory's encoder compresses repeated name suffixes on emit.

use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use mdns_pub_domain::{DnsRecord, DomainError};
use std::str::FromStr;

/// Serializes an authoritative answer message.
///
/// `id` is the transaction id of the query being answered, copied
/// verbatim so the querier can correlate the reply.
pub fn build_answer(id: u16, answers: &[DnsRecord]) -> Result<Vec<u8>, DomainError> {
    let mut message = Message::new();
    message.set_id(id);
    message.set_message_type(MessageType::Response);
    message.set_op_code(OpCode::Query);
    message.set_authoritative(true);

    for answer in answers {
        let name = Name::from_str(&answer.name).map_err(|e| {
            DomainError::MessageEncode(format!("invalid answer name '{}': {}", answer.name, e))
        })?;

        let mut record = Record::from_rdata(name, answer.ttl, RData::A(A(answer.address)));
        record.set_dns_class(DNSClass::IN);
        message.add_answer(record);
    }

    serialize_message(&message)
}

fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::MessageEncode(e.to_string()))?;

    Ok(buf)
}
