//! Basalt DNS application layer: repository ports and the resolution
//! services behind the query use case.
pub mod ports;
pub mod services;
pub mod use_cases;
