//! Thrive Marketing Site
//!
//! A Leptos SSR marketing website with the introduction section and the
//! contact dialog.

use axum::Router;
use leptos::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thrive_core::ContactConfig;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod components;
mod pages;

use app::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "thrive_marketing=debug,thrive_core=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let contact = ContactConfig::default();
    match contact.validate() {
        Ok(()) => tracing::info!("Leads will be posted to {}", contact.sheets_url()),
        Err(e) => tracing::warn!("Contact form is misconfigured: {}", e),
    }

    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(leptos_axum::file_and_error_handler(App))
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Marketing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
