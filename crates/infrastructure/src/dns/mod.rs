pub mod cache;
pub mod forwarding;
pub mod resolver;
pub mod server;
pub mod transport;

pub use cache::{AnswerCache, CacheKey, CachedEntry, Clock, ManualClock, SystemClock};
pub use forwarding::{AnswerRecordBuilder, DnsForwarder, MessageBuilder, ResponseParser};
pub use resolver::ResolverBuilder;
pub use server::DnsServerHandler;
pub use transport::{DnsTransport, Transport, TransportResponse};
