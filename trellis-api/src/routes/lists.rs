/// List endpoints, nested under a board
///
/// The owning board is identified by the path; any `boardId` the client
/// puts in the body is overwritten before validation runs.
///
/// # Endpoints
///
/// - `GET /boards/:board_id/lists` - Lists on a board
/// - `POST /boards/:board_id/lists` - Create a list on a board

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    payload,
    validate::{FieldRules, Rule, Shape},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use trellis_shared::models::list::{CreateList, List};
use uuid::Uuid;

/// Validation shape for list creation payloads (after path injection)
const LIST_SHAPE: Shape = &[
    FieldRules {
        field: "name",
        rules: &[Rule::Required, Rule::Length { min: 5, max: 30 }],
    },
    FieldRules {
        field: "boardId",
        rules: &[Rule::Required, Rule::Identifier],
    },
];

/// Lists all lists on a board
///
/// # Errors
///
/// - `400 Bad Request`: Malformed board id in the path, or store failure
pub async fn list_lists(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> ApiResult<Json<Vec<List>>> {
    let lists = List::list_by_board(&state.db, board_id)
        .await
        .map_err(ApiError::store_read)?;

    Ok(Json(lists))
}

/// Creates a list on a board
///
/// # Endpoint
///
/// ```text
/// POST /boards/:board_id/lists
/// Content-Type: application/json
///
/// {
///   "name": "In Progress"
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed, or the store rejected
///   the insert (e.g. the board does not exist)
pub async fn create_list(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<List>)> {
    let body = payload::inject(body, &[("boardId", board_id)]);
    let data: CreateList = payload::parse(LIST_SHAPE, body)?;

    let list = List::create(&state.db, data)
        .await
        .map_err(ApiError::store_write)?;

    tracing::debug!(list_id = %list.id, board_id = %board_id, "List created");
    Ok((StatusCode::CREATED, Json(list)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_board_id_overrides_body() {
        let path_id = Uuid::new_v4();
        let body = json!({ "name": "In Progress", "boardId": Uuid::new_v4().to_string() });

        let injected = payload::inject(body, &[("boardId", path_id)]);
        let data: CreateList = payload::parse(LIST_SHAPE, injected).unwrap();

        assert_eq!(data.board_id, path_id);
    }

    #[test]
    fn test_list_name_length_rule() {
        let path_id = Uuid::new_v4();

        let err = payload::parse::<CreateList>(
            LIST_SHAPE,
            payload::inject(json!({ "name": "abcd" }), &[("boardId", path_id)]),
        )
        .unwrap_err();

        match err {
            ApiError::ValidationError(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "name");
                assert_eq!(violations[0].rule, "length");
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_name_is_reported() {
        let path_id = Uuid::new_v4();

        let err = payload::parse::<CreateList>(
            LIST_SHAPE,
            payload::inject(json!({}), &[("boardId", path_id)]),
        )
        .unwrap_err();

        match err {
            ApiError::ValidationError(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "name");
                assert_eq!(violations[0].rule, "required");
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
