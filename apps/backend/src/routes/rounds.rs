//! Round HTTP routes: creation, inspection, elimination.
//!
//! Every handler runs its service calls inside one `with_txn` unit and
//! returns the freshly projected round view.

use actix_web::{web, HttpRequest, Result};
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::domain::view::RoundView;
use crate::error::AppError;
use crate::extractors::game_set::GameSet;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::rounds as rounds_service;
use crate::state::app_state::AppState;

fn default_category() -> String {
    "movies".to_string()
}

#[derive(serde::Deserialize)]
struct CreateRoundRequest {
    #[serde(default = "default_category")]
    category: String,
}

#[derive(serde::Deserialize)]
struct EliminateRequest {
    item_id: Uuid,
}

#[derive(serde::Deserialize)]
struct CreateRoundFromTemplateRequest {
    template_id: Uuid,
}

/// POST /api/rounds
///
/// Create a rated round from a built-in dataset category.
async fn create_round(
    http_req: HttpRequest,
    game_set: GameSet,
    body: ValidatedJson<CreateRoundRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoundView>, AppError> {
    let category = body.into_inner().category;
    let game_set = game_set.0;

    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let round_id =
                rounds_service::create_from_dataset(txn, &game_set, &category).await?;
            Ok(rounds_service::load_view(txn, &game_set, round_id).await?)
        })
    })
    .await?;

    Ok(web::Json(view))
}

/// POST /api/rounds/from-template
///
/// Create a round from an authored template.
async fn create_round_from_template(
    http_req: HttpRequest,
    game_set: GameSet,
    body: ValidatedJson<CreateRoundFromTemplateRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoundView>, AppError> {
    let template_id = body.into_inner().template_id;
    let game_set = game_set.0;

    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let round_id =
                rounds_service::create_from_template(txn, &game_set, template_id).await?;
            Ok(rounds_service::load_view(txn, &game_set, round_id).await?)
        })
    })
    .await?;

    Ok(web::Json(view))
}

/// GET /api/rounds/{round_id}
async fn get_round(
    http_req: HttpRequest,
    game_set: GameSet,
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoundView>, AppError> {
    let round_id = path.into_inner();
    let game_set = game_set.0;

    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(rounds_service::load_view(txn, &game_set, round_id).await?) })
    })
    .await?;

    Ok(web::Json(view))
}

/// POST /api/rounds/{round_id}/eliminate
///
/// Eliminate one item and return the updated view. The read-check-write
/// sequence and the follow-up read share a single transaction.
async fn eliminate(
    http_req: HttpRequest,
    game_set: GameSet,
    path: web::Path<Uuid>,
    body: ValidatedJson<EliminateRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoundView>, AppError> {
    let round_id = path.into_inner();
    let item_id = body.into_inner().item_id;
    let game_set = game_set.0;

    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            rounds_service::eliminate(txn, &game_set, round_id, item_id).await?;
            Ok(rounds_service::load_view(txn, &game_set, round_id).await?)
        })
    })
    .await?;

    Ok(web::Json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // the static segment must be registered before the {round_id} matcher
    cfg.service(web::resource("").route(web::post().to(create_round)));
    cfg.service(web::resource("/from-template").route(web::post().to(create_round_from_template)));
    cfg.service(web::resource("/{round_id}").route(web::get().to(get_round)));
    cfg.service(web::resource("/{round_id}/eliminate").route(web::post().to(eliminate)));
}
