use hickory_proto::rr::RecordType as HickoryRecordType;
use mdns_pub_domain::RecordType;

/// Mapper between domain `RecordType` and `hickory_proto::rr::RecordType`.
///
/// Only `A` is ever answered; the other named variants exist so that the
/// query types common on an mDNS segment log readably. Everything else
/// round-trips through `Other` with its raw type code.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::SRV => RecordType::SRV,
            HickoryRecordType::TXT => RecordType::TXT,
            other => RecordType::Other(u16::from(other)),
        }
    }

    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::Other(code) => HickoryRecordType::from(code),
        }
    }
}
