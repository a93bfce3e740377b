use mdns_pub_domain::{DnsRecord, NameRegistry, QueryMessage, RecordType, DEFAULT_RECORD_TTL};
use std::net::Ipv4Addr;
use tracing::{debug, info};

/// Decides which questions of an inbound query to answer.
///
/// Pure over its input: one answer record per type-A question whose exact
/// dot-terminated name is registered, in question order, all pointing at
/// the configured answer address. An empty result means the query goes
/// unanswered — mDNS silence for names we are not authoritative for.
pub struct AnswerQueryUseCase {
    registry: NameRegistry,
    answer_address: Ipv4Addr,
    ttl: u32,
}

impl AnswerQueryUseCase {
    pub fn new(registry: NameRegistry, answer_address: Ipv4Addr) -> Self {
        Self {
            registry,
            answer_address,
            ttl: DEFAULT_RECORD_TTL,
        }
    }

    pub fn execute(&self, query: &QueryMessage) -> Vec<DnsRecord> {
        let mut answers = Vec::new();

        for question in &query.questions {
            debug!(
                name = %question.name,
                record_type = %question.record_type,
                "received question"
            );

            if question.record_type != RecordType::A {
                continue;
            }

            if !self.registry.contains(&question.name) {
                continue;
            }

            info!(name = %question.name, "answering query");

            answers.push(DnsRecord::new(
                question.name.clone(),
                RecordType::A,
                self.answer_address,
                self.ttl,
            ));
        }

        answers
    }
}
