use std::path::Path;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::activity_store::ActivityStore;
use crate::web::routes::{activities, home};

/// Full application: JSON API, root redirect and the static front-end under `/static`.
pub fn build_router(store: ActivityStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(home::root_redirect))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        // Rosters change on every signup; never let a browser cache them.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
