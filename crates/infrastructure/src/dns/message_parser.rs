use ferrous_ipset_domain::{DnsAnswer, DnsMessage, DnsQuestion, DomainError, RecordType};
use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use std::sync::Arc;
use tracing::debug;

/// Converts hickory messages into the classifier's [`DnsMessage`] view.
pub struct DnsMessageParser;

impl DnsMessageParser {
    pub fn parse(bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS message: {}", e))
        })?;
        Ok(Self::from_message(&message))
    }

    pub fn from_message(message: &Message) -> DnsMessage {
        let questions = message
            .queries()
            .iter()
            .map(|query| DnsQuestion {
                name: Arc::from(query.name().to_utf8()),
                record_type: RecordType::from_u16(u16::from(query.query_type())),
            })
            .collect();

        let answers: Vec<DnsAnswer> = message
            .answers()
            .iter()
            .map(|record| match record.data() {
                RData::A(a) => DnsAnswer::A(a.0),
                RData::AAAA(aaaa) => DnsAnswer::AAAA(aaaa.0),
                RData::CNAME(canonical) => DnsAnswer::CNAME {
                    target: Arc::from(canonical.to_utf8()),
                },
                _ => DnsAnswer::Other(RecordType::from_u16(u16::from(record.record_type()))),
            })
            .collect();

        debug!(
            id = message.id(),
            questions = message.queries().len(),
            answers = answers.len(),
            "DNS message parsed"
        );

        DnsMessage {
            id: message.id(),
            questions,
            answers,
        }
    }
}
