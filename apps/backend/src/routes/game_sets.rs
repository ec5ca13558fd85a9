//! Game-set namespace routes.
//!
//! The name comes from the path here (not the header): these endpoints are
//! how a client establishes the namespace in the first place.

use actix_web::{web, HttpRequest, Result};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::game_sets;
use crate::state::app_state::AppState;

#[derive(serde::Serialize)]
struct ExistsResponse {
    exists: bool,
}

#[derive(serde::Serialize)]
struct CreatedResponse {
    created: bool,
}

/// GET /api/game-sets/{name}
///
/// Existence check by (validated) name.
async fn game_set_exists(
    http_req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ExistsResponse>, AppError> {
    let name = game_sets::validate_name(&path.into_inner())?;

    let exists = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(game_sets::exists(txn, &name).await?) })
    })
    .await?;

    Ok(web::Json(ExistsResponse { exists }))
}

/// POST /api/game-sets/{name}
///
/// Idempotent creation: creating an existing game set is not an error.
async fn create_game_set(
    http_req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<CreatedResponse>, AppError> {
    let name = game_sets::validate_name(&path.into_inner())?;

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(game_sets::create(txn, &name).await?) })
    })
    .await?;

    Ok(web::Json(CreatedResponse { created: true }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{name}")
            .route(web::get().to(game_set_exists))
            .route(web::post().to(create_game_set)),
    );
}
