use actix_web::{App, HttpServer};
use connector_env::logger;
use connector_server::{
    app::{AppState, Connector, Health, Orders},
    settings::Settings,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = Settings::new().map_err(|error| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("failed to load configuration: {error}"),
        )
    })?;

    let _guard = logger::setup(
        &settings.log,
        &["connector_server", "connector_core", "connector_models"],
    );

    let bind = (settings.server.host.clone(), settings.server.port);
    logger::info!(host = %bind.0, port = bind.1, "starting the order connector");

    let state = AppState::new(settings);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(Health::server(state.clone()))
            .service(Orders::server(state.clone()))
            .service(Connector::server(state.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
