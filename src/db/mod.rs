//! Database module: models, schema and storage accessors.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: pool setup plus the user and alert accessors

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbAlert, DbUser, NewAlert};
pub use schema::SQLITE_INIT;
pub use sqlite::{AlertStorage, SqlitePool, UserStorage, connect};
