//! Health check and dataset category listing.
//!
//! These are the only endpoints that do not require a game-set token.

use actix_web::{web, Result};

use crate::domain::catalog;
use crate::error::AppError;

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(serde::Serialize)]
struct CategoriesResponse {
    categories: Vec<String>,
}

/// GET /api/health
async fn health() -> Result<web::Json<HealthResponse>, AppError> {
    Ok(web::Json(HealthResponse { status: "ok" }))
}

/// GET /api/categories
async fn categories() -> Result<web::Json<CategoriesResponse>, AppError> {
    Ok(web::Json(CategoriesResponse {
        categories: catalog::list_categories(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/health").route(web::get().to(health)));
    cfg.service(web::resource("/api/categories").route(web::get().to(categories)));
}
