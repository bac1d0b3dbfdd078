//! End-to-end tests of the HTTP surface against an in-memory database.

use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::middleware::from_fn;
use actix_web::{App, test, web};
use chrono::Local;

use blog_core::domain::format_post_date;
use blog_infra::database::DatabaseConfig;
use blog_server::config::AppConfig;
use blog_server::handlers::configure_routes;
use blog_server::observability::assign_request_id;
use blog_server::state::AppState;
use blog_shared::PostForm;

fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig::in_memory(),
        secret_key: "test-secret-key".to_string(),
        csrf_ttl_secs: 60,
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(from_fn(assign_request_id))
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

fn valid_form(state: &AppState, title: &str) -> PostForm {
    PostForm {
        title: title.to_string(),
        subtitle: "Who knew that cacti lived such interesting lives.".to_string(),
        author: "Angela".to_string(),
        img_url: "https://images.unsplash.com/photo-1530482054429".to_string(),
        body: "<p>Nori grape silver beet broccoli kombu beet.</p>".to_string(),
        csrf_token: state.csrf.issue().unwrap(),
    }
}

async fn body_text<B: actix_web::body::MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location<B>(resp: &ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[actix_web::test]
async fn test_create_then_list() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/new_post")
        .set_form(valid_form(&state, "The Life of Cactus"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/");

    let posts = state.posts.list_all().await.unwrap();
    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.title, "The Life of Cactus");
    assert_eq!(post.author.as_deref(), Some("Angela"));
    assert_eq!(post.img_url, "https://images.unsplash.com/photo-1530482054429");
    assert_eq!(post.date, format_post_date(Local::now().date_naive()));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("The Life of Cactus"));
    assert!(html.contains(&format!("/post/{}", post.id)));
}

#[actix_web::test]
async fn test_show_post_renders_body_markup() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/new_post")
        .set_form(valid_form(&state, "Markup"))
        .to_request();
    test::call_service(&app, req).await;
    let id = state.posts.list_all().await.unwrap()[0].id;

    let req = test::TestRequest::get()
        .uri(&format!("/post/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("<p>Nori grape silver beet broccoli kombu beet.</p>"));
    assert!(html.contains("Posted by Angela on"));
}

#[actix_web::test]
async fn test_duplicate_title_keeps_count_and_warns() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/new_post")
        .set_form(valid_form(&state, "Twice"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let req = test::TestRequest::post()
        .uri("/new_post")
        .set_form(valid_form(&state, "Twice"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Post with Twice already exists"));
    assert!(html.contains("value=\"Twice\""));
    assert_eq!(state.posts.count().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_long_body_is_accepted() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let mut form = valid_form(&state, "Long Read");
    form.body = format!("<p>{}</p>", "a".repeat(20_000));

    let req = test::TestRequest::post()
        .uri("/new_post")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    let posts = state.posts.list_all().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].body.len(), 20_007);
}

#[actix_web::test]
async fn test_invalid_submission_creates_nothing() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let mut form = valid_form(&state, "");
    form.subtitle = String::new();
    form.body = String::new();
    form.img_url = "not-a-url".to_string();

    let req = test::TestRequest::post()
        .uri("/new_post")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert_eq!(html.matches("This field is required.").count(), 3);
    assert!(html.contains("Invalid Image URL"));
    assert_eq!(state.posts.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_missing_fields_are_validation_errors() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let token = state.csrf.issue().unwrap();
    let req = test::TestRequest::post()
        .uri("/new_post")
        .set_form([("csrf_token", token.as_str()), ("title", "Only a title")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(state.posts.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_invalid_csrf_token_rejected() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let mut form = valid_form(&state, "Forged");
    form.csrf_token = "forged".to_string();

    let req = test::TestRequest::post()
        .uri("/new_post")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("The CSRF token is missing or invalid."));
    assert_eq!(state.posts.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_new_post_form_carries_token() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/new_post").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("name=\"csrf_token\""));
    assert!(html.contains("Enter Blog Title"));
}

#[actix_web::test]
async fn test_delete_existing_and_missing() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    for title in ["Keep", "Remove"] {
        let req = test::TestRequest::post()
            .uri("/new_post")
            .set_form(valid_form(&state, title))
            .to_request();
        test::call_service(&app, req).await;
    }
    let posts = state.posts.list_all().await.unwrap();
    let removed = posts.iter().find(|p| p.title == "Remove").unwrap().id;

    let req = test::TestRequest::get()
        .uri(&format!("/delete/{}", removed))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/");

    let titles: Vec<String> = state
        .posts
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["Keep"]);

    let req = test::TestRequest::post()
        .uri(&format!("/delete/{}", removed))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(state.posts.count().await.unwrap(), 1);

    // Showing the deleted post is not an error.
    let req = test::TestRequest::get()
        .uri(&format!("/post/{}", removed))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_out_of_range_ids() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    for uri in ["/post/-1", "/delete/-1", "/post/abc", "/post/4294967296"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    // Valid ids that no post can have.
    let req = test::TestRequest::get().uri("/post/3000000000").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post().uri("/delete/3000000000").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_static_pages_ignore_database_state() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);
    state.shutdown().await;

    for (uri, heading) in [("/about", "About Me"), ("/contact", "Contact Me")] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert!(body_text(resp).await.contains(heading));
    }
}

#[actix_web::test]
async fn test_list_fails_when_database_closed() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);
    state.shutdown().await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("x-request-id", "req-500"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "req-500");
    let html = body_text(resp).await;
    assert!(html.contains("Request ID: <code>req-500</code>"));
    assert!(!html.contains("Database"));
}

#[actix_web::test]
async fn test_not_found_page_shows_request_id() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/delete/99").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    let html = body_text(resp).await;
    assert!(html.contains("Post with id 99 not found"));
    assert!(html.contains(&request_id));
}

#[actix_web::test]
async fn test_request_id_header() {
    let state = AppState::new(&test_config()).await.unwrap();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("x-request-id", "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "abc-123");

    let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["request_id"], "abc-123");
}
