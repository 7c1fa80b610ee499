use async_trait::async_trait;
use basalt_dns_domain::{DomainError, RecordType, StoredRecord, Zone};

/// Read-side contract over the zone/record store. Implementations never
/// return rows whose disabled flag is set.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Enabled records owned by exactly `name`, in repository iteration
    /// order. `types` restricts the record type; `None` applies no filter.
    async fn find_records(
        &self,
        name: &str,
        types: Option<&[RecordType]>,
    ) -> Result<Vec<StoredRecord>, DomainError>;

    /// The most specific (longest-named) zone among the candidate apex
    /// names, if any of them exists.
    async fn find_zone_among(&self, candidates: &[String])
        -> Result<Option<Zone>, DomainError>;

    /// Enabled records within a zone whose owner name starts with the
    /// wildcard label.
    async fn find_wildcard_records(
        &self,
        zone_id: i64,
        types: Option<&[RecordType]>,
    ) -> Result<Vec<StoredRecord>, DomainError>;
}
