// Route exports
pub mod content;
pub mod discover;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(discover::configure)
            .configure(content::configure),
    );
}
