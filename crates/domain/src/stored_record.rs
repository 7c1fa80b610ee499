use crate::record_type::RecordType;

/// One row of the records table, as stored. Content stays in its text
/// encoding until materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: Option<i64>,
    pub domain_id: Option<i64>,
    pub name: String,
    pub rtype: String,
    pub content: String,
    pub ttl: u32,
    pub prio: i64,
    pub change_date: Option<i64>,
    pub disabled: bool,
}

impl StoredRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        self.rtype.parse().ok()
    }

    pub fn is_cname(&self) -> bool {
        self.record_type() == Some(RecordType::CNAME)
    }
}
