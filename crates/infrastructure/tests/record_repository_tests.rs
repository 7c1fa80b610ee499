use basalt_dns_application::ports::RecordRepository;
use basalt_dns_domain::RecordType;
use basalt_dns_infrastructure::repositories::SqliteRecordRepository;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE domains (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(255) NOT NULL COLLATE NOCASE,
            master VARCHAR(128) DEFAULT NULL,
            last_check INTEGER DEFAULT NULL,
            type VARCHAR(6) NOT NULL DEFAULT 'NATIVE',
            notified_serial INTEGER DEFAULT NULL,
            account VARCHAR(40) DEFAULT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            domain_id INTEGER DEFAULT NULL REFERENCES domains(id),
            name VARCHAR(255) NOT NULL COLLATE NOCASE,
            type VARCHAR(10) NOT NULL,
            content TEXT NOT NULL,
            ttl INTEGER NOT NULL DEFAULT 3600,
            prio INTEGER NOT NULL DEFAULT 0,
            change_date INTEGER DEFAULT NULL,
            disabled BOOLEAN NOT NULL DEFAULT 0
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

async fn insert_zone(pool: &SqlitePool, name: &str) -> i64 {
    let row: (i64,) =
        sqlx::query_as("INSERT INTO domains (name, type) VALUES (?, 'NATIVE') RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap();
    row.0
}

async fn insert_record(pool: &SqlitePool, domain_id: i64, name: &str, rtype: &str, content: &str) {
    sqlx::query(
        "INSERT INTO records (domain_id, name, type, content, ttl) VALUES (?, ?, ?, ?, 3600)",
    )
    .bind(domain_id)
    .bind(name)
    .bind(rtype)
    .bind(content)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_disabled_record(
    pool: &SqlitePool,
    domain_id: i64,
    name: &str,
    rtype: &str,
    content: &str,
) {
    sqlx::query(
        "INSERT INTO records (domain_id, name, type, content, ttl, disabled) VALUES (?, ?, ?, ?, 3600, 1)",
    )
    .bind(domain_id)
    .bind(name)
    .bind(rtype)
    .bind(content)
    .execute(pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_find_records_returns_rows_in_insertion_order() {
    let pool = create_test_db().await;
    let zone = insert_zone(&pool, "example.org").await;
    insert_record(&pool, zone, "multi.example.org", "A", "192.168.1.2").await;
    insert_record(&pool, zone, "multi.example.org", "A", "192.168.1.3").await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo.find_records("multi.example.org", None).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].content, "192.168.1.2");
    assert_eq!(records[1].content, "192.168.1.3");
    assert_eq!(records[0].ttl, 3600);
    assert_eq!(records[0].domain_id, Some(zone));
}

#[tokio::test]
async fn test_find_records_excludes_disabled_rows() {
    let pool = create_test_db().await;
    let zone = insert_zone(&pool, "example.org").await;
    insert_record(&pool, zone, "example.org", "A", "192.168.1.1").await;
    insert_disabled_record(&pool, zone, "example.org", "A", "192.168.1.99").await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo.find_records("example.org", None).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content, "192.168.1.1");
}

#[tokio::test]
async fn test_find_records_applies_type_filter() {
    let pool = create_test_db().await;
    let zone = insert_zone(&pool, "example.org").await;
    insert_record(&pool, zone, "example.org", "A", "192.168.1.1").await;
    insert_record(&pool, zone, "example.org", "TXT", "hello").await;
    insert_record(&pool, zone, "example.org", "MX", "10 mail.example.org").await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo
        .find_records("example.org", Some(&[RecordType::CNAME, RecordType::A]))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rtype, "A");

    let records = repo
        .find_records("example.org", Some(&[RecordType::CNAME]))
        .await
        .unwrap();
    assert!(records.is_empty());

    let records = repo.find_records("example.org", None).await.unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_find_records_name_compare_is_case_insensitive() {
    let pool = create_test_db().await;
    let zone = insert_zone(&pool, "example.org").await;
    insert_record(&pool, zone, "NoCase.Example.ORG", "A", "192.168.1.1").await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo.find_records("nocase.example.org", None).await.unwrap();

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_find_records_misses_are_empty_not_errors() {
    let pool = create_test_db().await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo.find_records("absent.example.org", None).await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_find_zone_among_prefers_longest_suffix() {
    let pool = create_test_db().await;
    insert_zone(&pool, "org").await;
    let expected = insert_zone(&pool, "example.org").await;
    let repo = SqliteRecordRepository::new(pool);

    let zone = repo
        .find_zone_among(&["example.org".to_string(), "org".to_string()])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(zone.id, expected);
    assert_eq!(zone.name, "example.org");
}

#[tokio::test]
async fn test_find_zone_among_no_match_is_none() {
    let pool = create_test_db().await;
    insert_zone(&pool, "example.org").await;
    let repo = SqliteRecordRepository::new(pool);

    assert!(repo
        .find_zone_among(&["example.net".to_string()])
        .await
        .unwrap()
        .is_none());
    assert!(repo.find_zone_among(&[]).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_wildcard_records_scopes_to_zone_and_prefix() {
    let pool = create_test_db().await;
    let zone = insert_zone(&pool, "example.org").await;
    let other = insert_zone(&pool, "example.net").await;
    insert_record(&pool, zone, "*.example.org", "CNAME", "example.org").await;
    insert_record(&pool, zone, "plain.example.org", "A", "192.168.1.1").await;
    insert_record(&pool, other, "*.example.net", "A", "10.0.0.1").await;
    insert_disabled_record(&pool, zone, "*.example.org", "A", "192.168.1.50").await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo.find_wildcard_records(zone, None).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "*.example.org");
    assert_eq!(records[0].rtype, "CNAME");
}

#[tokio::test]
async fn test_find_wildcard_records_applies_type_filter() {
    let pool = create_test_db().await;
    let zone = insert_zone(&pool, "example.org").await;
    insert_record(&pool, zone, "*.example.org", "CNAME", "example.org").await;
    insert_record(&pool, zone, "*.example.org", "TXT", "wild").await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo
        .find_wildcard_records(zone, Some(&[RecordType::CNAME, RecordType::A]))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rtype, "CNAME");
}
