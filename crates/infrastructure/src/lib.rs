//! splitdns Infrastructure Layer
//!
//! Concrete adapters behind the application ports: the TTL-aware answer
//! cache, wire-format forwarding over UDP and DNS-over-HTTPS, and the
//! hickory-server request handler.
pub mod dns;
