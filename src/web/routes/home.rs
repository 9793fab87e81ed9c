use axum::response::Redirect;

pub const HOME_PAGE: &str = "/static/index.html";

pub async fn root_redirect() -> Redirect {
    Redirect::temporary(HOME_PAGE)
}
