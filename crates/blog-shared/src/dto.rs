//! Data Transfer Objects - submitted forms.

use serde::{Deserialize, Serialize};

/// The "new post" form as submitted by the browser.
///
/// Missing fields deserialize as empty strings so that they surface as
/// validation errors instead of a rejected request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub img_url: String,
    pub body: String,
    pub csrf_token: String,
}
