use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use dinedir_api::handlers::{contact, debug, health, pages};
use dinedir_api::state::AppState;
use dinedir_api::templates;
use dinedir_core::repositories::{MenuItemRepository, RestaurantRepository, StoreInspector};
use dinedir_core::services::MenuService;
use dinedir_infrastructure::database::connection;
use dinedir_infrastructure::{
    MongoMenuItemRepository, MongoRestaurantRepository, MongoStoreInspector,
};
use dinedir_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    dinedir_shared::telemetry::init_telemetry();

    info!("DineDir server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Build the document store client
    let client = connection::create_client(&config.database.uri).await?;
    let db = client.database(&config.database.name);
    info!(
        "Document store client ready for database {}",
        config.database.name
    );

    // Wire repositories behind their ports
    let restaurants: Arc<dyn RestaurantRepository> = Arc::new(MongoRestaurantRepository::new(&db));
    let menu_items: Arc<dyn MenuItemRepository> = Arc::new(MongoMenuItemRepository::new(&db));
    let inspector: Arc<dyn StoreInspector> = Arc::new(MongoStoreInspector::new(
        client.clone(),
        config.database.name.clone(),
    ));

    let state = AppState {
        restaurants,
        menu: Arc::new(MenuService::new(menu_items)),
        inspector,
        templates: Arc::new(templates::build_registry()?),
        config: config.clone(),
    };

    // Build router
    let app = Router::new()
        .route("/", get(pages::home))
        .route("/restaurant/{id}", get(pages::restaurant_detail))
        .route("/contact", post(contact::submit))
        .route("/health", get(health::health_check))
        .route("/api/debug", get(debug::database_report))
        .fallback(pages::fallback)
        .with_state(state)
        // Every render reads fresh data; nothing downstream may cache it
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http());

    // Bind address
    let host: IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Close the store client explicitly once the server has drained
    client.shutdown().await;
    info!("Document store client closed.");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
