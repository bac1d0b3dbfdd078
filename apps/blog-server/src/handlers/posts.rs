//! Blog post handlers.

use actix_web::{HttpResponse, http::header, web};
use chrono::Local;

use blog_core::domain::{FieldErrors, PostDraft};
use blog_core::{PublishOutcome, RepoError, publish_post};
use blog_shared::{Flash, PostForm};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, IndexTemplate, MakePostTemplate, PostTemplate};

pub const INVALID_CSRF_MESSAGE: &str = "The CSRF token is missing or invalid.";

/// GET /
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    views::render(&IndexTemplate::new(&posts))
}

/// GET /post/{post_id}
///
/// An unknown id renders the detail page without a post. Negative and
/// non-numeric ids never reach the handler.
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let post = match stored_id(post_id) {
        Some(id) => state.posts.find_by_id(id).await?,
        None => None,
    };

    if post.is_none() {
        tracing::debug!(post_id, "Requested post does not exist");
    }

    views::render(&PostTemplate::new(post.as_ref()))
}

/// GET /new_post
pub async fn new_post_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render_form(&state, &PostForm::default(), &FieldErrors::default(), Vec::new())
}

/// POST /new_post
pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if let Err(e) = state.csrf.verify(&form.csrf_token) {
        tracing::warn!(error = %e, "Rejected post submission");
        return render_form(
            &state,
            &form,
            &FieldErrors::default(),
            vec![Flash::danger(INVALID_CSRF_MESSAGE)],
        );
    }

    let today = Local::now().date_naive();
    match publish_post(state.posts.as_ref(), &draft_from(&form), today).await? {
        PublishOutcome::Published(_) => Ok(redirect_to_index()),
        PublishOutcome::DuplicateTitle(title) => render_form(
            &state,
            &form,
            &FieldErrors::default(),
            vec![Flash::danger(format!("Post with {} already exists", title))],
        ),
        PublishOutcome::Invalid(errors) => render_form(&state, &form, &errors, Vec::new()),
    }
}

/// GET|POST /delete/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let not_found = || AppError::NotFound(format!("Post with id {} not found", post_id));

    let id = stored_id(post_id).ok_or_else(not_found)?;
    state.posts.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => not_found(),
        other => other.into(),
    })?;

    tracing::info!(post_id, "Post deleted");
    Ok(redirect_to_index())
}

/// Ids above `i32::MAX` cannot exist in the table.
fn stored_id(post_id: u32) -> Option<i32> {
    i32::try_from(post_id).ok()
}

/// Render the post form with a fresh CSRF token.
fn render_form(
    state: &AppState,
    form: &PostForm,
    errors: &FieldErrors,
    flashes: Vec<Flash>,
) -> AppResult<HttpResponse> {
    let csrf_token = state
        .csrf
        .issue()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    views::render(&MakePostTemplate::new(form, errors, flashes, csrf_token))
}

fn draft_from(form: &PostForm) -> PostDraft {
    PostDraft {
        title: form.title.clone(),
        subtitle: form.subtitle.clone(),
        author: form.author.clone(),
        img_url: form.img_url.clone(),
        body: form.body.clone(),
    }
}

fn redirect_to_index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
