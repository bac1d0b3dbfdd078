//! Validation of submitted post forms.
//!
//! Validation is pure: it never touches storage and can be called any number
//! of times on the same draft.

use chrono::NaiveDate;
use url::{Host, Url};

use super::post::{NewBlogPost, format_post_date};

/// Longest accepted value for the single-line fields.
pub const MAX_FIELD_LEN: usize = 250;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_URL_MESSAGE: &str = "Invalid Image URL";
pub const TOO_LONG_MESSAGE: &str = "Field cannot be longer than 250 characters.";

/// Raw, unvalidated values of the "new post" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub img_url: String,
    pub body: String,
}

/// A draft whose fields satisfied every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPost {
    title: String,
    subtitle: String,
    author: Option<String>,
    img_url: String,
    body: String,
}

impl ValidPost {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Attach the creation date and turn this into an insertable post.
    pub fn into_new_post(self, created_on: NaiveDate) -> NewBlogPost {
        NewBlogPost {
            title: self.title,
            subtitle: self.subtitle,
            date: format_post_date(created_on),
            body: self.body,
            author: self.author,
            img_url: self.img_url,
        }
    }
}

/// Per-field error messages, kept in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: Vec<(&'static str, Vec<String>)>,
}

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.fields.push((field, vec![message])),
        }
    }

    /// Messages recorded for `field`; empty when the field is valid.
    pub fn get(&self, field: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl PostDraft {
    /// Check every field and either build a [`ValidPost`] or report all
    /// problems at once.
    pub fn validate(&self) -> Result<ValidPost, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = required_line(&mut errors, "title", &self.title);
        let subtitle = required_line(&mut errors, "subtitle", &self.subtitle);

        let author = self.author.trim();
        if author.chars().count() > MAX_FIELD_LEN {
            errors.add("author", TOO_LONG_MESSAGE);
        }

        let img_url = required_line(&mut errors, "img_url", &self.img_url);
        if !img_url.is_empty() && !is_valid_url(img_url) {
            errors.add("img_url", INVALID_URL_MESSAGE);
        }

        // Markup is stored verbatim.
        if self.body.trim().is_empty() {
            errors.add("body", REQUIRED_MESSAGE);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidPost {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            author: (!author.is_empty()).then(|| author.to_string()),
            img_url: img_url.to_string(),
            body: self.body.clone(),
        })
    }
}

/// Trim `value` and record an error if it is blank or too long.
fn required_line<'a>(errors: &mut FieldErrors, field: &'static str, value: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED_MESSAGE);
    } else if value.chars().count() > MAX_FIELD_LEN {
        errors.add(field, TOO_LONG_MESSAGE);
    }
    value
}

/// An absolute URL with a scheme and a host. Domain names need a dot,
/// so `http://localhost` is rejected while IP addresses are accepted.
fn is_valid_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };

    match url.host() {
        Some(Host::Domain(domain)) => {
            let domain = domain.trim_end_matches('.');
            domain.contains('.') && !domain.starts_with('.')
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}
