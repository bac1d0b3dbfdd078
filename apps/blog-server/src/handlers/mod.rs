//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;

use actix_web::web;

/// Largest accepted urlencoded form. Post bodies are raw markup with no
/// length limit of their own.
pub const MAX_FORM_BYTES: usize = 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(MAX_FORM_BYTES))
        .route("/", web::get().to(posts::list_posts))
        .route("/post/{post_id}", web::get().to(posts::show_post))
        .service(
            web::resource("/new_post")
                .route(web::get().to(posts::new_post_form))
                .route(web::post().to(posts::create_post)),
        )
        .service(
            web::resource("/delete/{post_id}")
                .route(web::get().to(posts::delete_post))
                .route(web::post().to(posts::delete_post)),
        )
        // Static pages
        .route("/about", web::get().to(pages::about))
        .route("/contact", web::get().to(pages::contact))
        .route("/health", web::get().to(health::health_check));
}
