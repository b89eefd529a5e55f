use connector_env::logger;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn health() -> impl actix_web::Responder {
    logger::info!("Health was called");
    actix_web::HttpResponse::Ok().body("health is good")
}
