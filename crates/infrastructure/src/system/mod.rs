//! Startup-only OS adapters: interface address lookup and the
//! default-route reachability probe. Nothing here runs after bootstrap.
pub mod interfaces;
pub mod local_ip;

pub use interfaces::interface_ipv4;
pub use local_ip::default_route_ipv4;
