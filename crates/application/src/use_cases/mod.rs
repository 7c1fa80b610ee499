pub mod resolve_query;

pub use resolve_query::{LookupRequest, ResolveOutcome, ResolveQueryUseCase};
