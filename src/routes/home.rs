use actix_web::{web, HttpResponse};
use serde::Serialize;

pub const PAGE_TITLE: &str = "메모 서비스";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)));
}

#[derive(Serialize)]
struct HomeDto {
    title: &'static str,
}

/// Page model for the listing page; rendering happens outside this service.
async fn home() -> HttpResponse {
    HttpResponse::Ok().json(HomeDto { title: PAGE_TITLE })
}
