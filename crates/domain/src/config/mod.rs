//! Configuration module for splitdns
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: DNS listener binding
//! - `dns`: Upstream timeout and forwarding rules
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use dns::{DnsConfig, ForwardRule};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
