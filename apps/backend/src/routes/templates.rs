//! Template CRUD routes.

use actix_web::{web, HttpRequest, Result};
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::game_set::GameSet;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::templates::{
    self as templates_service, TemplateOut, TemplatePayload, TemplateSummary,
};
use crate::state::app_state::AppState;

#[derive(serde::Serialize)]
struct TemplatesResponse {
    templates: Vec<TemplateSummary>,
}

#[derive(serde::Serialize)]
struct DeletedResponse {
    status: &'static str,
}

/// GET /api/templates
async fn list_templates(
    http_req: HttpRequest,
    game_set: GameSet,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TemplatesResponse>, AppError> {
    let game_set = game_set.0;

    let templates = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(templates_service::list(txn, &game_set).await?) })
    })
    .await?;

    Ok(web::Json(TemplatesResponse { templates }))
}

/// GET /api/templates/{template_id}
async fn get_template(
    http_req: HttpRequest,
    game_set: GameSet,
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TemplateOut>, AppError> {
    let template_id = path.into_inner();
    let game_set = game_set.0;

    let template = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(templates_service::get(txn, &game_set, template_id).await?) })
    })
    .await?;

    Ok(web::Json(template))
}

/// POST /api/templates
async fn create_template(
    http_req: HttpRequest,
    game_set: GameSet,
    body: ValidatedJson<TemplatePayload>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TemplateOut>, AppError> {
    let payload = body.into_inner();
    let game_set = game_set.0;

    let template = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(templates_service::create(txn, &game_set, payload).await?) })
    })
    .await?;

    Ok(web::Json(template))
}

/// PUT /api/templates/{template_id}
///
/// Full replace: the item collection is deleted and reinserted.
async fn update_template(
    http_req: HttpRequest,
    game_set: GameSet,
    path: web::Path<Uuid>,
    body: ValidatedJson<TemplatePayload>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TemplateOut>, AppError> {
    let template_id = path.into_inner();
    let payload = body.into_inner();
    let game_set = game_set.0;

    let template = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(templates_service::update(txn, &game_set, template_id, payload).await?)
        })
    })
    .await?;

    Ok(web::Json(template))
}

/// DELETE /api/templates/{template_id}
async fn delete_template(
    http_req: HttpRequest,
    game_set: GameSet,
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<DeletedResponse>, AppError> {
    let template_id = path.into_inner();
    let game_set = game_set.0;

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(templates_service::delete(txn, &game_set, template_id).await?) })
    })
    .await?;

    Ok(web::Json(DeletedResponse { status: "deleted" }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_templates))
            .route(web::post().to(create_template)),
    );
    cfg.service(
        web::resource("/{template_id}")
            .route(web::get().to(get_template))
            .route(web::put().to(update_template))
            .route(web::delete().to(delete_template)),
    );
}
