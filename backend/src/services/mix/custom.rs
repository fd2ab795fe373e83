use crate::errors::{MixError, Result};
use actix_web::{web, HttpResponse, ResponseError};
use common::model::mix::MixResult;
use common::requests::CustomMixRequest;
use log::debug;

/// Actix web handler for `POST /api/mix/custom`.
///
/// Echoes the requested pair back once both fields are present. There is no
/// catalog lookup and nothing is stored.
pub(crate) async fn process(payload: web::Json<CustomMixRequest>) -> HttpResponse {
    match validate_custom_mix(payload.into_inner()) {
        Ok(mix) => HttpResponse::Ok().json(mix),
        Err(e) => {
            debug!("Rejected custom mix: {}", e);
            e.error_response()
        }
    }
}

fn validate_custom_mix(request: CustomMixRequest) -> Result<MixResult> {
    let audio_id = request
        .audio_id
        .ok_or_else(|| MixError::Validation("audioId is required".to_string()))?;
    let video_id = request
        .video_id
        .ok_or_else(|| MixError::Validation("videoId is required".to_string()))?;

    Ok(MixResult { audio_id, video_id })
}
