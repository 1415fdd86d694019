//! Backend for a single-politician campaign site.
//!
//! Serves the JSON API consumed by the public page and the admin panel:
//!
//! - `/api/politician` — the singleton profile (fetch, partial update,
//!   photo upload)
//! - `/api/journey` — career milestones, listed ascending by year
//! - `/api/gallery` — photo gallery, images stored as inline `data:` URIs
//! - `/api/contact` — public contact form plus the admin inbox
//!
//! All state is in-process memory seeded at startup; a restart resets
//! everything. See the `storage` module for the ordering and id rules.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{delete, get, patch, post},
    Router,
};
use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod routes;
pub mod schema;
pub mod state;
pub mod storage;
pub mod utils;

use routes::{
    create_contact_handler, create_milestone_handler, delete_gallery_image_handler,
    delete_milestone_handler, get_contact_handler, get_gallery_handler, get_journey_handler,
    get_politician_handler, update_milestone_handler, update_politician_handler,
    upload_gallery_image_handler, upload_photo_handler,
};
use state::AppState;
use utils::MAX_UPLOAD_BYTES;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/api/politician",
            get(get_politician_handler).patch(update_politician_handler),
        )
        .route(
            "/api/politician/photo",
            post(upload_photo_handler).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/api/journey",
            get(get_journey_handler).post(create_milestone_handler),
        )
        .route(
            "/api/journey/{id}",
            patch(update_milestone_handler).delete(delete_milestone_handler),
        )
        .route(
            "/api/gallery",
            get(get_gallery_handler)
                .post(upload_gallery_image_handler)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/gallery/{id}", delete(delete_gallery_image_handler))
        .route(
            "/api/contact",
            get(get_contact_handler).post(create_contact_handler),
        )
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");
    let app = build_router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind address");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
