use crate::ports::RecordRepository;
use basalt_dns_domain::{name, DomainError, QueryType, StoredRecord};
use std::sync::Arc;
use tracing::debug;

/// Finds the owning zone for a missed name and matches its wildcard-owned
/// records against the query.
pub struct WildcardLocator {
    repository: Arc<dyn RecordRepository>,
}

impl WildcardLocator {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Wildcard records covering `qname`, each renamed to the literal query
    /// name. Empty when no ancestor zone exists or nothing matches; a plain
    /// miss is never an error.
    pub async fn search(
        &self,
        qname: &str,
        qtype: QueryType,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let qname = name::normalize(qname);

        // Ancestor suffixes, most specific first. The full name is not a
        // candidate: it already missed the direct lookup.
        let labels = name::split_labels(&qname);
        if labels.len() < 2 {
            return Ok(Vec::new());
        }
        let candidates: Vec<String> = (1..labels.len())
            .map(|i| labels[i..].join("."))
            .collect();

        let Some(zone) = self.repository.find_zone_among(&candidates).await? else {
            return Ok(Vec::new());
        };
        debug!(zone = %zone.name, qname = %qname, "Searching wildcards in owning zone");

        let types = qtype.lookup_types();
        let records = self
            .repository
            .find_wildcard_records(zone.id, types.as_deref())
            .await?;

        Ok(records
            .into_iter()
            .filter(|r| name::wildcard_match(&qname, &r.name))
            .map(|mut r| {
                r.name = qname.clone();
                r
            })
            .collect())
    }
}
