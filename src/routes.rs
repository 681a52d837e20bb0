//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR landing page, the compiled WASM/JS/CSS bundle under
//! `/pkg`, public assets from the site root, and a health probe under a
//! single Axum router.

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
use crate::error::ServerError;

/// Full application router: SSR page + static assets + health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(avotonix_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || avotonix_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = resolve_site_root(config.site_root.as_deref(), leptos_options.site_root.as_ref());
    if !site_root.is_dir() {
        tracing::warn!(path = %site_root.display(), "site root missing; static assets will 404");
    }

    let router = service_routes().merge(leptos_router);
    Ok(with_layers(with_static_assets(router, &site_root)))
}

/// Routes that do not depend on Leptos.
fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// `/pkg` bundle plus public files at the site root for anything unrouted.
fn with_static_assets(router: Router, site_root: &Path) -> Router {
    router
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// The configured override wins over the Leptos `site-root`.
fn resolve_site_root(configured: Option<&Path>, leptos_site_root: &str) -> PathBuf {
    configured.map_or_else(|| PathBuf::from(leptos_site_root), Path::to_path_buf)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
