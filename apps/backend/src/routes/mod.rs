use actix_web::web;

pub mod ai;
pub mod games;
pub mod gesture;
pub mod health;

/// Configure application routes for the server and for tests.
///
/// `main.rs` wraps these in the CORS / trace / logging middleware stack;
/// integration tests register the same paths directly so endpoint behavior
/// can be exercised without the outer wrappers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(health::root)));
    cfg.service(web::resource("/health").route(web::get().to(health::health)));

    cfg.service(web::scope("/api/games").configure(games::configure_routes));
    cfg.service(web::scope("/api/ai").configure(ai::configure_routes));
    cfg.service(web::scope("/api/gesture").configure(gesture::configure_routes));
}
