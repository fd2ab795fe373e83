//! Error taxonomy for the mix service.
//!
//! Every failure is terminal for the request that hit it. The mapping to HTTP
//! status codes lives in the `ResponseError` impl so handlers can hand errors
//! straight back to actix.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MixError>;

#[derive(Debug, Error)]
pub enum MixError {
    /// The catalog database could not be opened or queried.
    #[error("source catalog unavailable: {0}")]
    StoreUnavailable(String),

    /// The catalog, or its video-flagged subset, is empty.
    #[error("no mix available")]
    NoMixAvailable,

    /// An inbound request is missing a required field.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Startup configuration could not be read.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for MixError {
    fn from(e: rusqlite::Error) -> Self {
        MixError::StoreUnavailable(e.to_string())
    }
}

impl ResponseError for MixError {
    fn status_code(&self) -> StatusCode {
        match self {
            MixError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            MixError::NoMixAvailable => StatusCode::NOT_FOUND,
            MixError::Validation(_) => StatusCode::BAD_REQUEST,
            MixError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_its_status() {
        assert_eq!(
            MixError::StoreUnavailable("down".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(MixError::NoMixAvailable.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            MixError::Validation("audioId".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn sqlite_errors_become_store_unavailable() {
        let err: MixError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, MixError::StoreUnavailable(_)));
    }
}
