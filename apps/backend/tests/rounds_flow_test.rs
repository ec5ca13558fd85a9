mod common;

use actix_web::{test, web, App};
use backend::infra::state::build_state;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::{DbKind, RuntimeEnv};
use common::{assert_problem_details, item_id_by_title, remaining_titles};
use serde_json::{json, Value};

const GAME_SET: &str = "MOV123";

// The movies dataset has exactly 11 entries, so the sample is the whole
// pool and the minimum-rating target is fixed.
const TARGET_TITLE: &str = "Battlefield Earth (2000)";

async fn create_movies_round(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> Value {
    let req = test::TestRequest::post()
        .uri("/api/game-sets/MOV123")
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .insert_header(("X-Game-Set", GAME_SET))
        .set_json(json!({ "category": "movies" }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "create round failed");
    test::read_body_json(resp).await
}

async fn eliminate(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    round_id: &str,
    item_id: &str,
) -> actix_web::dev::ServiceResponse {
    let req = test::TestRequest::post()
        .uri(&format!("/api/rounds/{round_id}/eliminate"))
        .insert_header(("X-Game-Set", GAME_SET))
        .set_json(json!({ "item_id": item_id }))
        .to_request();
    test::call_service(app, req).await
}

#[actix_web::test]
async fn create_round_exposes_active_state_and_hides_everything(
) -> Result<(), Box<dyn std::error::Error>> {
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

    let round = create_movies_round(&app).await;

    assert_eq!(round["status"], "active");
    assert_eq!(round["kind"], "rated");
    assert_eq!(round["category"], "movies");
    assert_eq!(round["current_team"], 1);
    assert_eq!(round["winner_team"], Value::Null);
    assert_eq!(round["loser_team"], Value::Null);
    assert_eq!(round["prompt"], "Find the lowest-rated movie.");

    let items = round["items"].as_array().expect("items");
    assert_eq!(items.len(), 11);
    for item in items {
        assert_eq!(item["eliminated"], false);
        assert_eq!(item["eliminated_by_team"], Value::Null);
        // nothing hidden may leak while the round is active
        assert_eq!(item["rating"], Value::Null);
        assert_eq!(item["secret_text"], Value::Null);
        assert_eq!(item["is_target"], Value::Null);
        assert_eq!(item["image_data"], Value::Null);
    }

    Ok(())
}

#[actix_web::test]
async fn eliminating_the_lowest_rated_item_loses_for_team_one(
) -> Result<(), Box<dyn std::error::Error>> {
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

    let round = create_movies_round(&app).await;
    let round_id = round["id"].as_str().expect("round id").to_string();
    let target_id = item_id_by_title(&round, TARGET_TITLE);

    let resp = eliminate(&app, &round_id, &target_id).await;
    assert!(resp.status().is_success());
    let finished: Value = test::read_body_json(resp).await;

    assert_eq!(finished["status"], "finished");
    assert_eq!(finished["loser_team"], 1);
    assert_eq!(finished["winner_team"], 2);

    // finishing reveals ratings and target flags for every item
    for item in finished["items"].as_array().expect("items") {
        assert!(item["rating"].is_string() || item["rating"].is_number());
        let is_target = item["is_target"].as_bool().expect("is_target revealed");
        assert_eq!(is_target, item["title"] == TARGET_TITLE);
    }

    let target = finished["items"]
        .as_array()
        .expect("items")
        .iter()
        .find(|item| item["title"] == TARGET_TITLE)
        .expect("target item present");
    assert_eq!(target["eliminated"], true);
    assert_eq!(target["eliminated_by_team"], 1);

    Ok(())
}

#[actix_web::test]
async fn avoiding_the_target_until_the_end_is_a_draw() -> Result<(), Box<dyn std::error::Error>> {
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

    let mut round = create_movies_round(&app).await;
    let round_id = round["id"].as_str().expect("round id").to_string();

    let mut expected_team = 1i64;
    loop {
        let titles = remaining_titles(&round);
        let next = titles
            .iter()
            .find(|t| t.as_str() != TARGET_TITLE)
            .expect("a non-target remains")
            .clone();
        let item_id = item_id_by_title(&round, &next);

        assert_eq!(round["current_team"], expected_team);
        let resp = eliminate(&app, &round_id, &item_id).await;
        assert!(resp.status().is_success());
        round = test::read_body_json(resp).await;

        if round["status"] == "finished" {
            break;
        }
        // the turn must have flipped
        expected_team = if expected_team == 1 { 2 } else { 1 };
        assert_eq!(round["current_team"], expected_team);
    }

    // all ten non-target eliminations happened, nobody picked the target
    assert_eq!(round["winner_team"], Value::Null);
    assert_eq!(round["loser_team"], Value::Null);
    assert_eq!(remaining_titles(&round), vec![TARGET_TITLE.to_string()]);

    Ok(())
}

#[actix_web::test]
async fn get_round_is_byte_identical_between_reads() -> Result<(), Box<dyn std::error::Error>> {
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

    let round = create_movies_round(&app).await;
    let round_id = round["id"].as_str().expect("round id");

    let req = test::TestRequest::get()
        .uri(&format!("/api/rounds/{round_id}"))
        .insert_header(("X-Game-Set", GAME_SET))
        .to_request();
    let first = test::call_and_read_body(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/rounds/{round_id}"))
        .insert_header(("X-Game-Set", GAME_SET))
        .to_request();
    let second = test::call_and_read_body(&app, req).await;

    assert_eq!(first, second);

    Ok(())
}

#[actix_web::test]
async fn conflicts_and_scoping_errors() -> Result<(), Box<dyn std::error::Error>> {
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

    let round = create_movies_round(&app).await;
    let round_id = round["id"].as_str().expect("round id").to_string();

    // unknown round id
    let ghost = uuid::Uuid::new_v4();
    let req = test::TestRequest::get()
        .uri(&format!("/api/rounds/{ghost}"))
        .insert_header(("X-Game-Set", GAME_SET))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, 404, "ROUND_NOT_FOUND").await;

    // a round created under one game set is invisible to another
    let req = test::TestRequest::post()
        .uri("/api/game-sets/XYZ789")
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());
    let req = test::TestRequest::get()
        .uri(&format!("/api/rounds/{round_id}"))
        .insert_header(("X-Game-Set", "XYZ789"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, 404, "ROUND_NOT_FOUND").await;

    // unknown item in a real round
    let req = test::TestRequest::post()
        .uri(&format!("/api/rounds/{round_id}/eliminate"))
        .insert_header(("X-Game-Set", GAME_SET))
        .set_json(json!({ "item_id": uuid::Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, 404, "ITEM_NOT_FOUND").await;

    // double elimination of the same item
    let victim = item_id_by_title(&round, "Cats (2019)");
    let resp = eliminate(&app, &round_id, &victim).await;
    assert!(resp.status().is_success());
    let resp = eliminate(&app, &round_id, &victim).await;
    assert_problem_details(resp, 409, "ITEM_ALREADY_ELIMINATED").await;

    // unknown category on create
    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .insert_header(("X-Game-Set", GAME_SET))
        .set_json(json!({ "category": "board-games" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, 400, "UNKNOWN_CATEGORY").await;

    // finish the round, then try to keep playing
    let target_id = item_id_by_title(&round, TARGET_TITLE);
    let resp = eliminate(&app, &round_id, &target_id).await;
    assert!(resp.status().is_success());
    let survivor = item_id_by_title(&round, "Twilight (2008)");
    let resp = eliminate(&app, &round_id, &survivor).await;
    assert_problem_details(resp, 409, "ROUND_FINISHED").await;

    Ok(())
}
