//! # Blog Shared
//!
//! Types shared between the request handlers and the HTML views.

pub mod dto;
pub mod response;

pub use dto::PostForm;
pub use response::{ErrorPage, Flash};
