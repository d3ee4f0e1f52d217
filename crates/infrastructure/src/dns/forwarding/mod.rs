pub mod answer_record;
pub mod forwarder;
pub mod message_builder;
pub mod response_parser;

pub use answer_record::AnswerRecordBuilder;
pub use forwarder::DnsForwarder;
pub use message_builder::MessageBuilder;
pub use response_parser::{DnsResponse, ResponseParser};
