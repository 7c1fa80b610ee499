//! Basalt DNS infrastructure layer: the SQLite record repository and the
//! hickory-server boundary.
pub mod database;
pub mod dns;
pub mod repositories;
