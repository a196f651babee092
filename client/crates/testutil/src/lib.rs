//! Test Support
//!
//! In-process stand-ins for the two portal services, plus a shared
//! call log. Integration tests point a real client at these stubs to
//! observe exact request counts, ordering, and cookie renewal without
//! any external infrastructure.
//!
//! Dev-dependency only; nothing in this crate ships.

pub mod log;
pub mod server;
pub mod stub;
