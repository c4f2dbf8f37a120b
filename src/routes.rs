// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{auth, pages, videos},
    state::AppState,
};

/// Assembles the main application router.
///
/// * One GET route per navigation entry (the render dispatch table).
/// * Form posts for the three mutating operations.
/// * Unknown paths fall back to the home view.
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/games", get(pages::games))
        .route("/redeem", get(pages::redeem))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/profile", get(pages::profile))
        .route("/admin", get(pages::admin));

    let auth_routes = Router::new()
        .route("/signin", get(auth::sign_in_page).post(auth::sign_in))
        .route("/signout", post(auth::sign_out));

    let video_routes = Router::new().route(
        "/videos",
        get(videos::videos_page).post(videos::add_video),
    );

    Router::new()
        .merge(page_routes)
        .merge(auth_routes)
        .merge(video_routes)
        .fallback(pages::fallback_home)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
