use crate::ports::RecordRepository;
use crate::services::{ChainResolver, NegativeAnswerBuilder, WildcardLocator};
use basalt_dns_domain::{name, DomainError, QueryType, ResourceRecord};
use std::sync::Arc;
use tracing::debug;

/// A parsed query as delivered by the hosting server.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub qname: Arc<str>,
    pub qtype: QueryType,
    pub class: u16,
}

impl LookupRequest {
    pub fn new(qname: impl Into<Arc<str>>, qtype: QueryType, class: u16) -> Self {
        Self {
            qname: qname.into(),
            qtype,
            class,
        }
    }
}

/// What the boundary should do with the query.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveOutcome {
    /// Answer directly with these records.
    Answered(Vec<ResourceRecord>),
    /// Nothing resolved here; hand the query onward, attaching the zone
    /// SOA to the supplementary section when one was found.
    Delegated { soa: Option<ResourceRecord> },
}

/// Sequences one query through direct lookup, wildcard search and the
/// negative-SOA fallback, then materializes whatever resolved.
pub struct ResolveQueryUseCase {
    chain: ChainResolver,
    wildcard: WildcardLocator,
    negative: NegativeAnswerBuilder,
}

impl ResolveQueryUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self {
            chain: ChainResolver::new(repository.clone()),
            wildcard: WildcardLocator::new(repository.clone()),
            negative: NegativeAnswerBuilder::new(repository),
        }
    }

    pub async fn execute(
        &self,
        request: &LookupRequest,
    ) -> Result<ResolveOutcome, DomainError> {
        let qname = name::normalize(&request.qname);

        let mut records = self.chain.resolve(&qname, request.qtype).await?;

        if records.is_empty() {
            let matches = self.wildcard.search(&qname, request.qtype).await?;
            for record in matches {
                let target = if record.is_cname() && !request.qtype.is_any() {
                    Some(record.content.clone())
                } else {
                    None
                };

                records.push(record);

                if let Some(target) = target {
                    let chained = self.chain.resolve(&target, request.qtype).await?;
                    records.extend(chained);
                }
            }
        }

        if records.is_empty() {
            let soa = self.negative.resolve_soa(&qname, request.class).await?;
            debug!(qname = %qname, qtype = %request.qtype, has_soa = soa.is_some(), "No records resolved, delegating");
            return Ok(ResolveOutcome::Delegated { soa });
        }

        let mut answers = Vec::with_capacity(records.len());
        for record in &records {
            if let Some(rr) = ResourceRecord::materialize(record, request.class)? {
                answers.push(rr);
            }
        }

        // Everything resolved was dropped as unsupported or unparsable.
        if answers.is_empty() {
            debug!(qname = %qname, qtype = %request.qtype, "No materializable records, delegating");
            return Ok(ResolveOutcome::Delegated { soa: None });
        }

        debug!(qname = %qname, qtype = %request.qtype, answers = answers.len(), "Query answered");
        Ok(ResolveOutcome::Answered(answers))
    }
}
