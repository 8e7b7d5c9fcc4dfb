//! clientes-api - Main application entry point

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clientes_api::config::Config;
use clientes_api::db::{check_connection, create_pool, run_migrations};
use clientes_api::handlers;
use clientes_api::services::{ClienteRepository, MySqlClienteRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clientes_api=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let server_addr = config.server_addr();

    let pool = create_pool(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database connection pool created"
    );

    // Startup check runs in the background; a database outage must not block serving
    let startup_pool = pool.clone();
    actix_web::rt::spawn(async move {
        if let Err(e) = check_connection(&startup_pool).await {
            tracing::warn!("Database not reachable at startup, serving anyway: {}", e);
        }
    });

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(std::io::Error::other)?;
        tracing::info!("Database migrations completed");
    }

    let repository: Arc<dyn ClienteRepository> = Arc::new(MySqlClienteRepository::new(pool.clone()));
    let repository = web::Data::from(repository);
    let app_config = web::Data::new(config.clone());

    tracing::info!("Starting server at http://{}", server_addr);
    tracing::info!("API documentation available at {}/api-docs", config.public_base_url);

    let result = HttpServer::new(move || {
        App::new()
            .app_data(repository.clone())
            .app_data(app_config.clone())
            // Open to every origin
            .wrap(Cors::permissive())
            // Request logging
            .wrap(Logger::default())
            // Distributed tracing
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&server_addr)?
    .run()
    .await;

    pool.close().await;
    tracing::info!("Database connection pool closed");

    result
}
