use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, TXT};
use hickory_proto::rr::{Name, RData, Record};
use splitdns_domain::{Answer, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Turns resolver answers back into wire records.
///
/// Supports A, AAAA, CNAME, NS, PTR, TXT and MX; anything else, or a value
/// that does not parse for its type, yields `None`.
pub struct AnswerRecordBuilder;

impl AnswerRecordBuilder {
    pub fn to_record(answer: &Answer) -> Option<Record> {
        let name = Name::from_str(&answer.name).ok()?;
        let rdata = Self::to_rdata(answer.record_type, &answer.data)?;
        Some(Record::from_rdata(name, answer.ttl, rdata))
    }

    fn to_rdata(record_type: u16, data: &str) -> Option<RData> {
        let rdata = match RecordType::from_u16(record_type)? {
            RecordType::A => RData::A(A(Ipv4Addr::from_str(data).ok()?)),
            RecordType::AAAA => RData::AAAA(AAAA(Ipv6Addr::from_str(data).ok()?)),
            RecordType::CNAME => RData::CNAME(CNAME(Name::from_str(data).ok()?)),
            RecordType::NS => RData::NS(NS(Name::from_str(data).ok()?)),
            RecordType::PTR => RData::PTR(PTR(Name::from_str(data).ok()?)),
            RecordType::TXT => RData::TXT(TXT::new(vec![data.to_string()])),
            RecordType::MX => {
                let (preference, exchange) = data.split_once(' ')?;
                RData::MX(MX::new(
                    preference.parse().ok()?,
                    Name::from_str(exchange.trim()).ok()?,
                ))
            }
            _ => return None,
        };
        Some(rdata)
    }
}
