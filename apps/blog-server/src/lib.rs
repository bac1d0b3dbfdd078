//! # Blog Server
//!
//! Actix-web application serving the blog's HTML pages.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
pub mod views;
