//! splitdns Domain Layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod forward_target;
pub mod fqdn;
pub mod record_type;

pub use answer::Answer;
pub use config::{CliOverrides, Config, ConfigError, DnsConfig, ForwardRule};
pub use errors::DomainError;
pub use forward_target::{ForwardTarget, UnsupportedReason};
pub use fqdn::normalize_fqdn;
pub use record_type::RecordType;
