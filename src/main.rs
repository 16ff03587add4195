use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use hotel_backend::config::Config;
use hotel_backend::handlers;
use hotel_backend::store::Stores;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let stores = web::Data::new(Stores::new(&config));

    log::info!("Hotel backing file: {}", stores.hotels.path().display());
    log::info!("Room backing file: {}", stores.rooms.path().display());
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(stores.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
