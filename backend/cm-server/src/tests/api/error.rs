use crate::ApiError;

use cm_core::parse_user_id;
use cm_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "No route for /nope".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No route for /nope");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "bad id".into(),
        field: Some("id".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "id");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "not json".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unavailable_returns_503() {
    let error = ApiError::Unavailable {
        message: "Database unavailable".into(),
        source: None,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        source: None,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_invalid_user_id_converts_to_validation_on_id_field() {
    let core_error = parse_user_id("not-a-uuid").unwrap_err();

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("id"));
            assert!(message.contains("not-a-uuid"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_pool_closed_converts_to_unavailable() {
    let db_error = DbError::from(sqlx::Error::PoolClosed);

    let api_error: ApiError = db_error.into();

    assert!(matches!(api_error, ApiError::Unavailable { .. }));
}

#[test]
fn test_pool_timeout_converts_to_unavailable() {
    let db_error = DbError::from(sqlx::Error::PoolTimedOut);

    let api_error: ApiError = db_error.into();

    assert!(matches!(api_error, ApiError::Unavailable { .. }));
}

#[test]
fn test_row_not_found_converts_to_internal() {
    let db_error = DbError::from(sqlx::Error::RowNotFound);

    let api_error: ApiError = db_error.into();

    assert!(matches!(api_error, ApiError::Internal { .. }));
}

#[test]
fn test_internal_error_does_not_leak_database_details() {
    let db_error = DbError::from(sqlx::Error::Protocol("secret table layout".into()));

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::Internal { message, .. } => assert!(!message.contains("secret")),
        other => panic!("Expected Internal, got {:?}", other),
    }
}

#[test]
fn test_client_errors_log_below_error_and_store_failures_at_error() {
    let not_found = ApiError::NotFound {
        message: "No route for /nope".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let validation: ApiError = parse_user_id("nope").unwrap_err().into();
    let unavailable: ApiError = DbError::from(sqlx::Error::PoolClosed).into();
    let internal: ApiError = DbError::from(sqlx::Error::RowNotFound).into();

    assert_eq!(not_found.log_level(), log::Level::Debug);
    assert_eq!(validation.log_level(), log::Level::Warn);
    assert_eq!(unavailable.log_level(), log::Level::Error);
    assert_eq!(internal.log_level(), log::Level::Error);
}

#[test]
fn test_store_failure_keeps_database_error_as_source() {
    let db_error = DbError::from(sqlx::Error::Protocol("secret table layout".into()));
    let api_error: ApiError = db_error.into();

    let source = std::error::Error::source(&api_error).map(|e| e.to_string());

    assert!(source.unwrap().contains("secret table layout"));
}
