use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format of [`BlogPost::date`], e.g. `January 05 2024`.
pub const POST_DATE_FORMAT: &str = "%B %d %Y";

/// Format a calendar date the way posts store it.
pub fn format_post_date(date: NaiveDate) -> String {
    date.format(POST_DATE_FORMAT).to_string()
}

/// A stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    /// Raw markup, stored verbatim.
    pub body: String,
    pub author: Option<String>,
    pub img_url: String,
}

/// A post that has passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub author: Option<String>,
    pub img_url: String,
}
