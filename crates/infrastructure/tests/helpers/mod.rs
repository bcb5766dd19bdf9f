#![allow(dead_code)]

use ferrous_ipset_application::ports::IpSetWriter;
use ferrous_ipset_domain::{SetEntry, SetMutationError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::io::Write;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::Mutex;
use tempfile::NamedTempFile;

pub fn list_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn name(domain: &str) -> Name {
    Name::from_str(domain).unwrap()
}

pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn response(id: u16, qname: &str, qtype: RecordType) -> Self {
        let mut message = Message::new(id, MessageType::Response, OpCode::Query);
        message.add_query(Query::query(name(qname), qtype));
        Self { message }
    }

    pub fn a(mut self, owner: &str, ip: Ipv4Addr) -> Self {
        self.message
            .add_answer(Record::from_rdata(name(owner), 300, RData::A(A(ip))));
        self
    }

    pub fn aaaa(mut self, owner: &str, ip: Ipv6Addr) -> Self {
        self.message
            .add_answer(Record::from_rdata(name(owner), 300, RData::AAAA(AAAA(ip))));
        self
    }

    pub fn cname(mut self, owner: &str, target: &str) -> Self {
        self.message.add_answer(Record::from_rdata(
            name(owner),
            300,
            RData::CNAME(CNAME(name(target))),
        ));
        self
    }

    pub fn txt(mut self, owner: &str, text: &str) -> Self {
        self.message.add_answer(Record::from_rdata(
            name(owner),
            300,
            RData::TXT(TXT::new(vec![text.to_string()])),
        ));
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

#[derive(Default)]
pub struct RecordingWriter {
    pub entries: Mutex<Vec<SetEntry>>,
}

impl RecordingWriter {
    pub fn entries(&self) -> Vec<SetEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl IpSetWriter for RecordingWriter {
    fn add_cidr(&self, entry: &SetEntry) -> Result<(), SetMutationError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}
