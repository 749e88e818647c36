pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod validation;

use diesel_async::AsyncPgConnection;
/// Short-hand for the database pool type to use throughout the app.
use diesel_async::pooled_connection::AsyncDieselConnectionManager;

pub type DbPool = ::deadpool::managed::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

pub type Conn = deadpool::managed::Object<
    diesel_async::pooled_connection::AsyncDieselConnectionManager<diesel_async::AsyncPgConnection>,
>;

/// Build the shared connection pool. Panics on invalid pool configuration,
/// which is only reachable at startup.
pub fn initialize_db_pool(database_url: &str, max_size: usize) -> DbPool {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    DbPool::builder(manager)
        .max_size(max_size)
        .build()
        .expect("Failed to build database connection pool")
}
