use crate::dns_record::{DnsAnswer, RecordType};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuestion {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            name: Arc::from(name),
            record_type,
        }
    }
}

impl fmt::Display for DnsQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.record_type)
    }
}

/// Transport-agnostic view of a DNS message: the question and answer
/// sections are all the classifier looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsMessage {
    pub id: u16,
    pub questions: Vec<DnsQuestion>,
    pub answers: Vec<DnsAnswer>,
}

impl DnsMessage {
    pub fn query(id: u16, name: &str, record_type: RecordType) -> Self {
        Self {
            id,
            questions: vec![DnsQuestion::new(name, record_type)],
            answers: Vec::new(),
        }
    }

    pub fn with_answer(mut self, answer: DnsAnswer) -> Self {
        self.answers.push(answer);
        self
    }

    pub fn question_names(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.name.as_ref())
    }

    pub fn cname_targets(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().filter_map(|answer| match answer {
            DnsAnswer::CNAME { target } => Some(target.as_ref()),
            _ => None,
        })
    }
}
