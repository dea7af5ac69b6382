//! HTTP server assembly

use crate::app::App;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use leptos::LeptosOptions;
use leptos_axum::{generate_route_list, LeptosRoutes};
use std::path::Path;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Page routes, `/health`, `/assets` and the compiled site under
/// `site_root`. Anything else renders the app, which answers 404.
///
/// `/:variant` claims every single-segment path, so site files live
/// below a directory such as `/pkg`.
pub fn router(leptos_options: LeptosOptions, assets_dir: &Path) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .route("/health", get(health_check))
        .leptos_routes(&leptos_options, routes, App)
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn health_check() -> &'static str {
    "ok"
}

/// Serve a file from the site root, or render the app for the request.
pub async fn file_and_error_handler(
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    if let Some(file) = static_file(req.uri().clone(), &options.site_root).await {
        return file;
    }
    let render = leptos_axum::render_app_to_stream(options, App);
    render(req).await.into_response()
}

async fn static_file(uri: Uri, root: &str) -> Option<Response> {
    let req = Request::builder().uri(uri).body(Body::empty()).ok()?;
    let res = ServeDir::new(root).oneshot(req).await.ok()?;
    (res.status() == StatusCode::OK).then(|| res.into_response())
}
