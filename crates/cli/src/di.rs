use basalt_dns_application::use_cases::ResolveQueryUseCase;
use basalt_dns_infrastructure::dns::DnsServerHandler;
use basalt_dns_infrastructure::repositories::SqliteRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Services {
    pub handler: DnsServerHandler,
}

impl Services {
    pub fn new(pool: SqlitePool) -> Self {
        let repository = Arc::new(SqliteRecordRepository::new(pool));
        let use_case = Arc::new(ResolveQueryUseCase::new(repository));

        Self {
            handler: DnsServerHandler::new(use_case),
        }
    }
}
