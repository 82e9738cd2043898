use std::net::TcpListener;

use env_logger::Env;
use primer::{
    configuration::get_configuration,
    dal::search_log_db,
    services::{citizendium::Citizendium, encyclopedia::http_client, wikipedia::Wikipedia},
    startup::run,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let connect_options = SqliteConnectOptions::new()
        .filename(&configuration.database.path)
        .create_if_missing(true);
    let connection_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(connect_options);

    search_log_db::create_search_log_table(&connection_pool)
        .await
        .expect("Failed to create the search log table.");

    let wikipedia = Wikipedia::new(
        configuration
            .sources
            .wikipedia_url
            .parse()
            .expect("Invalid Wikipedia base url."),
    );
    let citizendium = Citizendium::new(
        configuration
            .sources
            .citizendium_url
            .parse()
            .expect("Invalid Citizendium base url."),
    );

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    run(
        listener,
        connection_pool,
        http_client(),
        wikipedia,
        citizendium,
    )?
    .await
}
