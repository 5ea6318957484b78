//! Server: reads settings, prepares the store, serves the item routes.

use item_listing::{
    apply_migrations, build_router, default_seed, ensure_database_exists, seed_items, AppState, ItemStore,
    MemoryItemStore, PgItemStore, Settings, StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("item_listing=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(store = ?settings.store, order = settings.order.as_str(), "starting");

    let store: Arc<dyn ItemStore> = match settings.store {
        StoreKind::Postgres => Arc::new(postgres_store(&settings).await?),
        StoreKind::Memory => {
            let store = MemoryItemStore::new();
            if settings.seed {
                default_seed().into_iter().for_each(|item| store.insert(item));
            }
            Arc::new(store)
        }
    };

    let app = build_router(AppState::new(store, settings.order));
    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn postgres_store(settings: &Settings) -> Result<PgItemStore, Box<dyn std::error::Error>> {
    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    apply_migrations(&pool, &settings.schema).await?;
    if settings.seed {
        seed_items(&pool, &settings.schema, &default_seed()).await?;
    }
    Ok(PgItemStore::new(pool, settings.schema.clone()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down");
}
