//! Cross-site request forgery protection for submitted forms.

/// Issues and checks the signed tokens embedded in HTML forms.
pub trait CsrfGuard: Send + Sync {
    /// Create a fresh token for a form about to be rendered.
    fn issue(&self) -> Result<String, CsrfError>;

    /// Accept or reject a token that came back with a submission.
    fn verify(&self, token: &str) -> Result<(), CsrfError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CsrfError {
    #[error("CSRF token missing")]
    Missing,

    #[error("CSRF token expired")]
    Expired,

    #[error("Invalid CSRF token: {0}")]
    Invalid(String),

    #[error("Could not sign CSRF token: {0}")]
    Signing(String),
}
