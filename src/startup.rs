use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use reqwest::Client;
use sqlx::SqlitePool;

use crate::{
    routes::{history_route, index_route},
    services::{citizendium::Citizendium, wikipedia::Wikipedia},
};

pub fn run(
    listener: TcpListener,
    db_pool: SqlitePool,
    http_client: Client,
    wikipedia: Wikipedia,
    citizendium: Citizendium,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);
    let http_client = web::Data::new(http_client);
    let wikipedia = web::Data::new(wikipedia);
    let citizendium = web::Data::new(citizendium);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(index_route::index)
            .service(index_route::search)
            .service(history_route::history)
            .service(history_route::clear_history)
            .app_data(db_pool.clone())
            .app_data(http_client.clone())
            .app_data(wikipedia.clone())
            .app_data(citizendium.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
