pub mod query_parser;
pub mod record_type_map;
pub mod responder;
pub mod response_builder;
pub mod socket;

pub use responder::MdnsResponder;
pub use socket::{bind_multicast_socket, MDNS_GROUP, MDNS_PORT};
