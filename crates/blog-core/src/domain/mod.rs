//! Domain entities - the core business objects.

mod post;
pub mod validation;

pub use post::{BlogPost, NewBlogPost, POST_DATE_FORMAT, format_post_date};
pub use validation::{FieldErrors, PostDraft, ValidPost};
