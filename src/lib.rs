#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "db")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "db")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "db")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "db")]
pub mod schema;
#[cfg(feature = "server")]
pub mod seed;
#[cfg(feature = "server")]
pub mod services;

/// Path of the workation collection on the backend.
pub const WORKATIONS_PATH: &str = "/api/v1/workations";

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use std::path::Path;

    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::{establish_connection_pool, run_migrations};
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::configure;
    use crate::seed::seed_from_csv;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let applied = run_migrations(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to migrate database: {e}")))?;
        if applied > 0 {
            log::info!("Applied {applied} database migrations");
        }

        let repo = DieselRepository::new(pool);

        if let Some(seed_csv) = &server_config.seed_csv {
            // A failed import leaves the service usable with an empty table.
            if let Err(e) = seed_from_csv(&repo, Path::new(seed_csv)) {
                log::error!("Failed to seed database: {e}");
            }
        }

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .configure(configure)
                .app_data(web::Data::new(repo.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
