//! # Mix Selector
//!
//! Pure selection logic: pairs one random source from the whole catalog
//! (the audio) with one random source from the video-flagged subset (the
//! clip). The two draws are independent; no attempt is made to match them.
//!
//! The random generator is always supplied by the caller, so a seeded
//! generator gives reproducible mixes.

use crate::errors::{MixError, Result};
use common::model::mix::MixResult;
use common::model::source::Source;
use rand::Rng;

/// Picks a random audio/video pairing.
///
/// The audio pick is drawn uniformly from all of `all_sources`, video
/// sources included. The video pick is drawn uniformly from `video_sources`.
/// Fails with `NoMixAvailable` if either slice is empty.
pub fn select_random_mix<R>(
    rng: &mut R,
    all_sources: &[Source],
    video_sources: &[Source],
) -> Result<MixResult>
where
    R: Rng + ?Sized,
{
    if all_sources.is_empty() || video_sources.is_empty() {
        return Err(MixError::NoMixAvailable);
    }

    let audio = &all_sources[rng.random_range(0..all_sources.len())];
    let video = &video_sources[rng.random_range(0..video_sources.len())];

    Ok(MixResult {
        audio_id: audio.link.clone(),
        video_id: video.link.clone(),
    })
}
