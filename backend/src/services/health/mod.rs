//! Liveness probe. Does not touch the catalog.

use actix_web::web::{get, resource};
use actix_web::{HttpResponse, Resource, Responder};

const API_PATH: &str = "/api/health";

pub fn configure_routes() -> Resource {
    resource(API_PATH).route(get().to(process))
}

async fn process() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn reports_ok() {
        let app = test::init_service(App::new().service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }
}
