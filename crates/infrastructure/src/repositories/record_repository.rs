use async_trait::async_trait;
use basalt_dns_application::ports::RecordRepository;
use basalt_dns_domain::{DomainError, RecordType, StoredRecord, Zone, ZoneKind};
use sqlx::{QueryBuilder, SqlitePool};
use tracing::{error, instrument};

type RecordRow = (
    i64,
    Option<i64>,
    String,
    String,
    String,
    i64,
    i64,
    Option<i64>,
    i64,
);

type ZoneRow = (
    i64,
    String,
    String,
    Option<String>,
    Option<i64>,
    Option<i64>,
    Option<String>,
);

const RECORD_COLUMNS: &str = "id, domain_id, name, type, content, ttl, prio, change_date, disabled";
const ZONE_COLUMNS: &str = "id, name, type, master, last_check, notified_serial, account";

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> StoredRecord {
        let (id, domain_id, name, rtype, content, ttl, prio, change_date, disabled) = row;
        StoredRecord {
            id: Some(id),
            domain_id,
            name,
            rtype,
            content,
            ttl: ttl as u32,
            prio,
            change_date,
            disabled: disabled != 0,
        }
    }

    fn row_to_zone(row: ZoneRow) -> Zone {
        let (id, name, kind, master, last_check, notified_serial, account) = row;
        Zone {
            id,
            name,
            kind: kind.parse::<ZoneKind>().unwrap_or(ZoneKind::Native),
            master,
            last_check,
            notified_serial,
            account,
        }
    }

    fn push_type_filter(qb: &mut QueryBuilder<'_, sqlx::Sqlite>, types: &[RecordType]) {
        qb.push(" AND type IN (");
        {
            let mut sep = qb.separated(", ");
            for rtype in types {
                sep.push_bind(rtype.as_str());
            }
        }
        qb.push(")");
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn find_records(
        &self,
        name: &str,
        types: Option<&[RecordType]>,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let mut qb = QueryBuilder::new(format!(
            "SELECT {} FROM records WHERE disabled = 0 AND name = ",
            RECORD_COLUMNS
        ));
        qb.push_bind(name);
        if let Some(types) = types {
            Self::push_type_filter(&mut qb, types);
        }
        qb.push(" ORDER BY id ASC");

        let rows: Vec<RecordRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, name, "Failed to query records");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find_zone_among(
        &self,
        candidates: &[String],
    ) -> Result<Option<Zone>, DomainError> {
        if candidates.is_empty() {
            return Ok(None);
        }

        let mut qb = QueryBuilder::new(format!(
            "SELECT {} FROM domains WHERE name IN (",
            ZONE_COLUMNS
        ));
        {
            let mut sep = qb.separated(", ");
            for candidate in candidates {
                sep.push_bind(candidate.as_str());
            }
        }
        // Most specific suffix wins.
        qb.push(") ORDER BY LENGTH(name) DESC LIMIT 1");

        let row: Option<ZoneRow> = qb
            .build_query_as()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query domains");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Self::row_to_zone))
    }

    #[instrument(skip(self))]
    async fn find_wildcard_records(
        &self,
        zone_id: i64,
        types: Option<&[RecordType]>,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let mut qb = QueryBuilder::new(format!(
            "SELECT {} FROM records WHERE disabled = 0 AND domain_id = ",
            RECORD_COLUMNS
        ));
        qb.push_bind(zone_id);
        qb.push(" AND name LIKE '*.%'");
        if let Some(types) = types {
            Self::push_type_filter(&mut qb, types);
        }
        qb.push(" ORDER BY id ASC");

        let rows: Vec<RecordRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, zone_id, "Failed to query wildcard records");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }
}
