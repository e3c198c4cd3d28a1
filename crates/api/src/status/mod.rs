use actix_web::{web, HttpResponse};

const GREETING: &str = "Hello from HealthSphere Backend!";

async fn status() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(GREETING)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
