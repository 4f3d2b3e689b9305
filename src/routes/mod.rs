pub mod home;
pub mod memo;

use actix_web::web;

use crate::response::{json_error_handler, path_error_handler};

/// Mounts every route of the service together with the extractor settings
/// they rely on.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .configure(home::config)
        .service(web::scope("/memo").configure(memo::config));
}
