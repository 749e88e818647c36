//! Taskboard HTTP server.
//!
//! Diesel migrations run before the server binds, so a fresh database is
//! fully provisioned on first start.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use actix_web_prometheus::PrometheusMetricsBuilder;
use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use taskboard::{
    config::Config,
    handlers::{self, AppState},
    initialize_db_pool,
};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply pending migrations before accepting traffic.
fn run_migrations(database_url: &str) {
    let mut conn = PgConnection::establish(database_url)
        .expect("Failed to connect to database for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });
    let port = config.port;

    run_migrations(&config.database_url);

    let pool = initialize_db_pool(&config.database_url, config.pool.max_size);
    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .unwrap();

    log::info!("starting HTTP server at http://0.0.0.0:{port}");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(prometheus.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
