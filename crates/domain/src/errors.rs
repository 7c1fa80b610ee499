use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Malformed {rtype} record content: {content}")]
    MalformedContent {
        rtype: &'static str,
        content: String,
    },

    #[error("CNAME chain starting at {0} exceeds maximum depth")]
    CnameChainTooDeep(String),

    #[error("CNAME loop detected at {0}")]
    CnameLoop(String),
}
