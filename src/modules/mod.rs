pub mod groups;
pub mod health;
pub mod students;
pub mod tasks;

use actix_web::web;

use crate::middleware::error_handler;

/// Register every controller plus the extractor error handlers
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(error_handler::configure)
        .configure(health::controllers::configure)
        .service(
            web::scope("/api")
                .configure(groups::controllers::configure)
                .configure(students::controllers::configure)
                .configure(tasks::controllers::configure),
        );
}
