use crate::ports::RecordRepository;
use basalt_dns_domain::{name, DomainError, QueryType, StoredRecord};
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::debug;

/// Upper bound on CNAME indirection hops before a chain is declared
/// runaway. Authoritative zone data should never get close to this.
const MAX_CHAIN_DEPTH: usize = 8;

/// Direct lookup with recursive CNAME expansion.
pub struct ChainResolver {
    repository: Arc<dyn RecordRepository>,
}

impl ChainResolver {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Records at `qname` in repository order, with every CNAME among them
    /// expanded recursively unless the query is ANY; each chain link
    /// precedes the records it resolves to. An empty result is a miss, not
    /// an error.
    pub async fn resolve(
        &self,
        qname: &str,
        qtype: QueryType,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let mut visited = HashSet::new();
        self.resolve_at(name::normalize(qname), qtype, 0, &mut visited)
            .await
    }

    fn resolve_at<'a>(
        &'a self,
        lookup: String,
        qtype: QueryType,
        depth: usize,
        visited: &'a mut HashSet<String>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StoredRecord>, DomainError>> + Send + 'a>> {
        Box::pin(async move {
            if depth > MAX_CHAIN_DEPTH {
                return Err(DomainError::CnameChainTooDeep(lookup));
            }
            if !visited.insert(lookup.clone()) {
                return Err(DomainError::CnameLoop(lookup));
            }

            let types = qtype.lookup_types();
            let records = self
                .repository
                .find_records(&lookup, types.as_deref())
                .await?;

            let mut resolved = Vec::with_capacity(records.len());
            for record in records {
                let follow = record.is_cname() && !qtype.is_any();
                let target = if follow {
                    Some(name::normalize(&record.content))
                } else {
                    None
                };

                resolved.push(record);

                if let Some(target) = target {
                    debug!(from = %lookup, to = %target, "Following CNAME");
                    let chained = self
                        .resolve_at(target, qtype, depth + 1, visited)
                        .await?;
                    resolved.extend(chained);
                }
            }

            Ok(resolved)
        })
    }
}
