use std::net::{Ipv4Addr, SocketAddr};

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::PlayerStore;

mod db;
mod error;
mod models;
mod routes;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_DATABASE_PATH: &str = "data/players.json";

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting player store service...");

    dotenvy::dotenv().ok();

    let db_path = std::env::var("DATABASE_PATH")
        .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
    let store = PlayerStore::new(db_path);

    tracing::info!("Serving player collection from {}", store.path().display());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::app(store)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
