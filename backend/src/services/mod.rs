pub mod health;
pub mod mix;

use actix_cors::Cors;

/// Cross-origin policy for the API: any origin, method and header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
