//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! SQLite storage through SeaORM and JWT-signed CSRF tokens.

pub mod csrf;
pub mod database;

pub use csrf::{CsrfConfig, JwtCsrfService};
pub use database::{DatabaseConfig, DatabaseConnections, SqliteBlogPostRepository};
