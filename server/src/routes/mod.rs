//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves everything: the Leptos SSR pages (`/` and
//! `/itinerary`), the hydration bundle under `/pkg`, the decorative photos
//! under `/photos`, and a health probe. There is no API surface.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Static asset routes and the health probe.
fn asset_routes(site_root: &Path, photos_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/photos", ServeDir::new(photos_dir))
}

/// Full application router: assets + Leptos SSR pages.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let photos_dir = config.resolve_photos_dir(&site_root);
    tracing::info!(site_root = %site_root.display(), photos_dir = %photos_dir.display(), "serving assets");

    asset_routes(&site_root, &photos_dir)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
