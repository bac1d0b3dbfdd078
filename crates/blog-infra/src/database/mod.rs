//! Database connection management.

mod connections;
pub mod entity;
mod schema;
mod sqlite_repo;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use schema::ensure_schema;
pub use sea_orm::DbErr;
pub use sqlite_repo::SqliteBlogPostRepository;
