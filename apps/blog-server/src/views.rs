//! HTML views. Templates live in `templates/` and are compiled in.

use actix_web::{HttpResponse, http::header::ContentType};
use askama::Template;

use blog_core::domain::{BlogPost, FieldErrors};
use blog_shared::{ErrorPage, Flash, PostForm};

use crate::middleware::error::AppResult;

/// Render `template` as a `200 OK` HTML response.
pub fn render<T: Template>(template: &T) -> AppResult<HttpResponse> {
    let body = template.render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// A post prepared for display.
#[derive(Debug, Clone, Default)]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    /// "Posted by {author} on {date}", or "Posted on {date}" without an author.
    pub byline: String,
    pub body: String,
    pub img_url: String,
}

impl From<&BlogPost> for PostView {
    fn from(post: &BlogPost) -> Self {
        let byline = match &post.author {
            Some(author) => format!("Posted by {} on {}", author, post.date),
            None => format!("Posted on {}", post.date),
        };
        Self {
            id: post.id,
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            byline,
            body: post.body.clone(),
            img_url: post.img_url.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<PostView>,
}

impl IndexTemplate {
    pub fn new(posts: &[BlogPost]) -> Self {
        Self {
            posts: posts.iter().map(PostView::from).collect(),
        }
    }
}

/// Detail page. A missing post renders as an empty page, not an error.
#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub found: bool,
    pub post: PostView,
}

impl PostTemplate {
    pub fn new(post: Option<&BlogPost>) -> Self {
        Self {
            found: post.is_some(),
            post: post.map(PostView::from).unwrap_or_default(),
        }
    }
}

/// One input of the post form.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub multiline: bool,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "make-post.html")]
pub struct MakePostTemplate {
    pub flashes: Vec<Flash>,
    pub fields: Vec<FormField>,
    pub csrf_token: String,
}

impl MakePostTemplate {
    /// The form, refilled with `form`'s values and annotated with `errors`.
    pub fn new(
        form: &PostForm,
        errors: &FieldErrors,
        flashes: Vec<Flash>,
        csrf_token: String,
    ) -> Self {
        let field = |name: &'static str, label: &'static str, value: &str, multiline: bool| {
            FormField {
                name,
                label,
                value: value.to_string(),
                multiline,
                errors: errors.get(name).to_vec(),
            }
        };

        Self {
            flashes,
            fields: vec![
                field("title", "Enter Blog Title", &form.title, false),
                field("subtitle", "Enter Subtitle", &form.subtitle, false),
                field("author", "Author's name", &form.author, false),
                field("img_url", "Background image URL", &form.img_url, false),
                field("body", "Post Content", &form.body, true),
            ],
            csrf_token,
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub page: &'a ErrorPage,
}
