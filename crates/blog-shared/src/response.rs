//! Page-level messages: flash notices and error pages.

/// A one-shot notice shown above a page's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// Bootstrap alert class.
    pub category: &'static str,
    pub message: String,
}

impl Flash {
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            category: "danger",
            message: message.into(),
        }
    }
}

/// Content of the HTML error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    /// The HTTP status code.
    pub status: u16,

    /// A short, human-readable summary of the problem.
    pub title: String,

    /// An explanation specific to this occurrence; empty when there is none.
    pub detail: String,

    /// Id of the failed request, matching its log lines; empty when unknown.
    pub request_id: String,
}

impl ErrorPage {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            detail: String::new(),
            request_id: String::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    // Common error constructors
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
