//! mdns-pub Infrastructure Layer
//!
//! Wire codec (hickory-proto), multicast socket construction, the
//! responder loop, and the startup-only system adapters.
pub mod dns;
pub mod system;
