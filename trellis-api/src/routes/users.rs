/// User endpoints
///
/// # Endpoints
///
/// - `GET /users` - List all users
/// - `POST /users` - Create a user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    payload,
    validate::{FieldRules, Rule, Shape},
};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use trellis_shared::models::user::{CreateUser, User};

/// Validation shape for user creation payloads
const USER_SHAPE: Shape = &[
    FieldRules {
        field: "name",
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "email",
        rules: &[Rule::Required],
    },
];

/// Lists all users
///
/// # Errors
///
/// - `400 Bad Request`: Store failure
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await.map_err(ApiError::store_read)?;

    Ok(Json(users))
}

/// Creates a user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com"
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed, or the store rejected
///   the insert
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let data: CreateUser = payload::parse(USER_SHAPE, body)?;

    let user = User::create(&state.db, data)
        .await
        .map_err(ApiError::store_write)?;

    tracing::debug!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_shape_accepts_valid_payload() {
        let data: CreateUser = payload::parse(
            USER_SHAPE,
            json!({ "name": "Ada Lovelace", "email": "ada@example.com" }),
        )
        .unwrap();

        assert_eq!(data.name, "Ada Lovelace");
        assert_eq!(data.email, "ada@example.com");
    }

    #[test]
    fn test_user_shape_reports_both_missing_fields() {
        let err = payload::parse::<CreateUser>(USER_SHAPE, json!({})).unwrap_err();

        match err {
            ApiError::ValidationError(violations) => {
                assert_eq!(violations.len(), 2);
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
