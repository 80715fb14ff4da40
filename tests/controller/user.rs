use axum::{extract::State, http::StatusCode, response::IntoResponse};
use orrery::server::controller::user::get_users;

use super::*;

/// Expect 200 with serialized users and no password key in the body
#[tokio::test]
async fn get_users_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    test.insert_user("ana@example.com", "Ana Solo").await?;

    let result = get_users(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(value[0]["fullname"], "Ana Solo");
    assert!(value[0].get("password").is_none());

    Ok(())
}

/// Expect Error when required tables are not present
#[tokio::test]
async fn get_users_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_users(State(app_state(&test))).await;

    assert!(result.is_err());

    Ok(())
}
