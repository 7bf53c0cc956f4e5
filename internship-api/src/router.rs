use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

const WELCOME_STATUS: u16 = 234;

pub fn create(app_state: AppState, config: &Settings) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allowed_origin(&config.application.app_url));

    Router::new()
        .route("/", get(welcome))
        .merge(routes::api())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

async fn welcome() -> (StatusCode, &'static str) {
    let status = StatusCode::from_u16(WELCOME_STATUS).unwrap_or(StatusCode::OK);
    (status, "Welcome to the Main Page")
}

fn allowed_origin(app_url: &str) -> AllowOrigin {
    match HeaderValue::from_str(app_url) {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(_) => {
            tracing::warn!("app_url '{app_url}' is not a valid origin, allowing any origin");
            AllowOrigin::any()
        }
    }
}
