use crate::errors::Result;
use crate::mix_controller::state::MixState;
use actix_web::{web, HttpResponse, ResponseError};
use common::model::source::Source;
use log::{debug, error};

/// Actix web handler for `GET /api/mix/sources`.
///
/// Returns the whole catalog as a JSON array, or `503 Service Unavailable`
/// when the catalog cannot be read.
pub(crate) async fn process(state: web::Data<MixState>) -> HttpResponse {
    match list_sources(&state).await {
        Ok(sources) => HttpResponse::Ok().json(sources),
        Err(e) => {
            error!("Error listing sources: {}", e);
            e.error_response()
        }
    }
}

async fn list_sources(state: &MixState) -> Result<Vec<Source>> {
    let sources = state.fetch(|catalog| catalog.list_all()).await?;
    debug!("catalog holds {} sources", sources.len());
    Ok(sources)
}
