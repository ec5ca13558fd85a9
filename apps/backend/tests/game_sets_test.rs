mod common;

use actix_web::{test, web, App};
use backend::infra::state::build_state;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::{DbKind, RuntimeEnv};
use common::assert_problem_details;
use serde_json::Value;

#[actix_web::test]
async fn game_set_lifecycle_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(RequestTrace)
            .configure(routes::configure),
    )
    .await;

    // not there yet
    let req = test::TestRequest::get()
        .uri("/api/game-sets/ABC123")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["exists"], false);

    // create
    let req = test::TestRequest::post()
        .uri("/api/game-sets/ABC123")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["created"], true);

    // now it exists
    let req = test::TestRequest::get()
        .uri("/api/game-sets/ABC123")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["exists"], true);

    // creating again is not an error
    let req = test::TestRequest::post()
        .uri("/api/game-sets/ABC123")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    Ok(())
}

#[actix_web::test]
async fn wrong_length_names_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(RequestTrace)
            .configure(routes::configure),
    )
    .await;

    for uri in ["/api/game-sets/ABC12", "/api/game-sets/ABC1234"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, 400, "INVALID_GAME_SET").await;

        let req = test::TestRequest::post().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, 400, "INVALID_GAME_SET").await;
    }

    Ok(())
}

#[actix_web::test]
async fn health_and_categories_need_no_game_set() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(RequestTrace)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["categories"], serde_json::json!(["movies"]));

    Ok(())
}
