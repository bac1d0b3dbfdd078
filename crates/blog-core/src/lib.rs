//! # Blog Core
//!
//! The domain layer of the blog.
//! Posts, form validation and the publishing flow live here, with no
//! infrastructure dependencies: storage is reached through the ports.

pub mod domain;
pub mod error;
pub mod ports;
pub mod publish;

pub use error::RepoError;
pub use publish::{PublishOutcome, publish_post};
