use actix_web::web;

pub mod game_sets;
pub mod misc;
pub mod rounds;
pub mod templates;

/// Configure application routes.
///
/// `main.rs` wires these under the full middleware stack; tests register
/// the same paths on a bare test app so endpoint behavior can be exercised
/// directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health + category listing: /api/health, /api/categories
    cfg.configure(misc::configure_routes);

    // Game-set namespace routes: /api/game-sets/**
    cfg.service(web::scope("/api/game-sets").configure(game_sets::configure_routes));

    // Round routes: /api/rounds/**
    cfg.service(web::scope("/api/rounds").configure(rounds::configure_routes));

    // Template routes: /api/templates/**
    cfg.service(web::scope("/api/templates").configure(templates::configure_routes));
}
