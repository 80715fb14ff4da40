use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use orrery::server::controller::admin::{entity_form, list_entity};

use super::*;

/// Expect 200 with the entity's rows for a registered view
#[tokio::test]
async fn list_entity_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    test.insert_planet("Tatooine").await?;

    let result = list_entity(State(app_state(&test)), Path("planet".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["entity"], "planet");
    assert_eq!(value["rows"][0]["label"], "Tatooine");

    Ok(())
}

/// Expect 404 for an entity with no registered view
#[tokio::test]
async fn list_entity_unknown_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = list_entity(State(app_state(&test)), Path("starship".to_string())).await;

    let resp = match result {
        Err(err) => err.into_response(),
        Ok(_) => panic!("expected an error for an unregistered entity"),
    };
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the favorite form to carry injected choice fields
#[tokio::test]
async fn entity_form_injects_choice_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    test.insert_planet("Tatooine").await?;
    test.insert_user("ana@example.com", "Ana Solo").await?;

    let state = app_state(&test);
    let result = entity_form(State(state.clone()), Path("favorite".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let planet_field = value["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|field| field["name"] == "planet")
        .expect("planet field missing");

    assert_eq!(planet_field["kind"], "select");
    assert_eq!(planet_field["choices"][0]["value"], serde_json::Value::Null);
    assert_eq!(planet_field["choices"][0]["label"], "Select Planet...");
    assert_eq!(planet_field["choices"][1]["label"], "Tatooine");

    Ok(())
}

/// Expect a second form request against the same state to match the first
#[tokio::test]
async fn entity_form_is_stable_across_requests() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let state = app_state(&test);

    let first = entity_form(State(state.clone()), Path("favorite".to_string()))
        .await
        .unwrap()
        .into_response();
    let second = entity_form(State(state), Path("favorite".to_string()))
        .await
        .unwrap()
        .into_response();

    let first_body = axum::body::to_bytes(first.into_body(), usize::MAX)
        .await
        .unwrap();
    let second_body = axum::body::to_bytes(second.into_body(), usize::MAX)
        .await
        .unwrap();

    assert_eq!(first_body, second_body);

    Ok(())
}
