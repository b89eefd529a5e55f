use actix_web::{http::header, web, HttpRequest, HttpResponse, ResponseError};
use connector_core::{configuration, errors::ErrorSwitch};
use connector_env::{logger, Flow};
use masking::Secret;
use tracing::instrument;

use crate::app::AppState;

fn header_value(request: &HttpRequest, name: &str) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Configuration handshake: the marketplace discovers the connector's
/// callback endpoint after proving it holds valid credentials.
#[instrument(skip_all, fields(flow = %Flow::ConnectorConfig))]
pub async fn connector_config(state: web::Data<AppState>, request: HttpRequest) -> HttpResponse {
    let app_key = header_value(&request, "appkey");
    let app_token = header_value(&request, "apptoken").map(Secret::new);

    match configuration::get_connector_config(
        state.identity.as_ref(),
        &state.settings.connector,
        app_key,
        app_token,
    )
    .await
    {
        Ok(config) => HttpResponse::Ok().json(config),
        Err(error) => {
            logger::warn!(?error, "connector config handshake rejected");
            error.current_context().switch().error_response()
        }
    }
}

/// Sends the caller to the product mapper UI for this account.
#[instrument(skip_all, fields(flow = %Flow::MapperRedirect))]
pub async fn mapper_redirect(state: web::Data<AppState>) -> HttpResponse {
    let mapper_id = &state.settings.connector.mapper_id;
    logger::info!(mapper_id = %mapper_id, "redirecting to the product mapper");

    HttpResponse::Found()
        .insert_header((header::LOCATION, configuration::mapper_url(mapper_id)))
        .finish()
}
