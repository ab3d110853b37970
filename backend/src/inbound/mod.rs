//! Inbound adapters translating external requests into domain service calls.
//!
//! Only HTTP is exposed; handlers live under [`http`].

pub mod http;
