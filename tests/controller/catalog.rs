use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::favorite::FavoriteKind;
use orrery::server::controller::catalog::{get_favorites, get_person, get_planets};
use orrery::server::data::favorite::FavoriteRepository;

use super::*;

/// Expect 200 with live favorite counts for each planet
#[tokio::test]
async fn get_planets_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let ana = test.insert_user("ana@example.com", "Ana Solo").await?;
    let planet = test.insert_planet("Tatooine").await?;

    FavoriteRepository::new(&test.db)
        .create(FavoriteKind::Planet, ana.id, Some(planet.id), None)
        .await
        .unwrap();

    let result = get_planets(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(value[0]["name"], "Tatooine");
    assert_eq!(value[0]["favoriteCount"], 1);

    Ok(())
}

/// Expect 404 for a person that does not exist
#[tokio::test]
async fn get_person_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_person(State(app_state(&test)), Path(99)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect favorites to nest their subject's serialization
#[tokio::test]
async fn get_favorites_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let ana = test.insert_user("ana@example.com", "Ana Solo").await?;
    let people = test.insert_people("Luke Skywalker").await?;

    FavoriteRepository::new(&test.db)
        .create(FavoriteKind::People, ana.id, None, Some(people.id))
        .await
        .unwrap();

    let result = get_favorites(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(value[0]["type"], "people");
    assert_eq!(value[0]["favoriteItem"]["name"], "Luke Skywalker");
    assert_eq!(value[0]["favoriteItem"]["favoriteCount"], 1);

    Ok(())
}
