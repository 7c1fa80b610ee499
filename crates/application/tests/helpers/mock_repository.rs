#![allow(dead_code)]

use async_trait::async_trait;
use basalt_dns_application::ports::RecordRepository;
use basalt_dns_domain::{DomainError, RecordType, StoredRecord, Zone, ZoneKind};
use std::sync::Mutex;

/// In-memory stand-in for the SQL repository. Honors the port contract:
/// disabled rows never surface, type filters match the stored mnemonic,
/// name comparison is case-insensitive.
pub struct MockRecordRepository {
    records: Mutex<Vec<StoredRecord>>,
    zones: Mutex<Vec<Zone>>,
    should_fail: Mutex<bool>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            zones: Mutex::new(Vec::new()),
            should_fail: Mutex::new(false),
        }
    }

    pub fn add_zone(&self, id: i64, name: &str) {
        self.zones.lock().unwrap().push(Zone {
            id,
            name: name.to_string(),
            kind: ZoneKind::Native,
            master: None,
            last_check: None,
            notified_serial: None,
            account: None,
        });
    }

    pub fn add_record(&self, domain_id: i64, name: &str, rtype: &str, content: &str) {
        let next_id = self.records.lock().unwrap().len() as i64 + 1;
        self.push(StoredRecord {
            id: Some(next_id),
            domain_id: Some(domain_id),
            name: name.to_string(),
            rtype: rtype.to_string(),
            content: content.to_string(),
            ttl: 3600,
            prio: 0,
            change_date: None,
            disabled: false,
        });
    }

    pub fn push(&self, record: StoredRecord) {
        self.records.lock().unwrap().push(record);
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(())
    }

    fn type_matches(record: &StoredRecord, types: Option<&[RecordType]>) -> bool {
        match types {
            None => true,
            Some(types) => record
                .record_type()
                .is_some_and(|t| types.contains(&t)),
        }
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn find_records(
        &self,
        name: &str,
        types: Option<&[RecordType]>,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        self.check_failure()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                !r.disabled
                    && r.name.eq_ignore_ascii_case(name)
                    && Self::type_matches(r, types)
            })
            .cloned()
            .collect())
    }

    async fn find_zone_among(
        &self,
        candidates: &[String],
    ) -> Result<Option<Zone>, DomainError> {
        self.check_failure()?;
        Ok(self
            .zones
            .lock()
            .unwrap()
            .iter()
            .filter(|z| candidates.iter().any(|c| c.eq_ignore_ascii_case(&z.name)))
            .max_by_key(|z| z.name.len())
            .cloned())
    }

    async fn find_wildcard_records(
        &self,
        zone_id: i64,
        types: Option<&[RecordType]>,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        self.check_failure()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                !r.disabled
                    && r.domain_id == Some(zone_id)
                    && r.name.starts_with("*.")
                    && Self::type_matches(r, types)
            })
            .cloned()
            .collect())
    }
}
