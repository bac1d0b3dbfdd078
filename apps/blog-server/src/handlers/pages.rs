//! Static pages.

use actix_web::HttpResponse;

use crate::middleware::error::AppResult;
use crate::views::{self, AboutTemplate, ContactTemplate};

/// GET /about
pub async fn about() -> AppResult<HttpResponse> {
    views::render(&AboutTemplate)
}

/// GET /contact
pub async fn contact() -> AppResult<HttpResponse> {
    views::render(&ContactTemplate)
}
