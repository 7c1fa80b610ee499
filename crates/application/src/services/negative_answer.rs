use crate::ports::RecordRepository;
use basalt_dns_domain::{name, DomainError, RecordType, ResourceRecord};
use std::sync::Arc;

/// Synthesizes the supplementary SOA record for a negative answer.
pub struct NegativeAnswerBuilder {
    repository: Arc<dyn RecordRepository>,
}

impl NegativeAnswerBuilder {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// The SOA stored at exactly `qname`, materialized. No ancestor walk:
    /// a miss, or unparsable SOA content, means the negative answer goes
    /// out without one.
    pub async fn resolve_soa(
        &self,
        qname: &str,
        class: u16,
    ) -> Result<Option<ResourceRecord>, DomainError> {
        let qname = name::normalize(qname);
        let records = self
            .repository
            .find_records(&qname, Some(&[RecordType::SOA]))
            .await?;

        let Some(record) = records.first() else {
            return Ok(None);
        };

        ResourceRecord::materialize(record, class)
    }
}
