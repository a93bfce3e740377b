//! mdns-pub Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod host_name;
pub mod name_registry;
pub mod record_type;

pub use config::{AnswerAddressSource, ConfigError, PublisherConfig};
pub use dns_message::{Question, QueryMessage, RecordClass};
pub use dns_record::{DnsRecord, DEFAULT_RECORD_TTL};
pub use errors::DomainError;
pub use host_name::HostName;
pub use name_registry::NameRegistry;
pub use record_type::RecordType;
