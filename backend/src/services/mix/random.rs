use crate::errors::{MixError, Result};
use crate::mix_controller::state::MixState;
use actix_web::{web, HttpResponse, ResponseError};
use common::model::mix::MixResult;
use log::{debug, error, info};

/// Actix web handler for `GET /api/mix/random`.
///
/// # Returns
/// - `200 OK` with a `MixResult` on success.
/// - `404 Not Found` when the catalog or its video subset is empty.
/// - `503 Service Unavailable` when the catalog cannot be read.
pub(crate) async fn process(state: web::Data<MixState>) -> HttpResponse {
    match random_mix(&state).await {
        Ok(mix) => {
            info!("Random mix: audio {} / video {}", mix.audio_id, mix.video_id);
            HttpResponse::Ok().json(mix)
        }
        Err(e @ MixError::NoMixAvailable) => {
            debug!("No random mix: catalog or video subset is empty");
            e.error_response()
        }
        Err(e) => {
            error!("Error building random mix: {}", e);
            e.error_response()
        }
    }
}

/// Fetches the catalog and its video subset as two separate snapshots, then
/// draws the pairing.
async fn random_mix(state: &MixState) -> Result<MixResult> {
    let all_sources = state.fetch(|catalog| catalog.list_all()).await?;
    let video_sources = state
        .fetch(|catalog| catalog.list_by_video_flag(true))
        .await?;
    debug!(
        "drawing mix from {} sources, {} with video",
        all_sources.len(),
        video_sources.len()
    );

    state.pick_mix(&all_sources, &video_sources)
}
