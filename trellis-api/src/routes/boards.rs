/// Board endpoints
///
/// Board creation is the one transactional pipeline in the system: the
/// board row and its admin membership row are inserted under a single
/// transaction, so a board with zero memberships is never observable.
///
/// # Endpoints
///
/// - `GET /boards` - List all boards with their admin user
/// - `POST /boards` - Create a board and its admin membership atomically

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    payload,
    validate::{FieldRules, Rule, Shape},
};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use trellis_shared::models::board::{Board, BoardWithAdmin, CreateBoard};

/// Validation shape for board creation payloads
const BOARD_SHAPE: Shape = &[
    FieldRules {
        field: "name",
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "adminUserId",
        rules: &[Rule::Required, Rule::Identifier],
    },
];

/// Lists all boards joined with their admin membership
///
/// # Errors
///
/// - `400 Bad Request`: Store failure
pub async fn list_boards(State(state): State<AppState>) -> ApiResult<Json<Vec<BoardWithAdmin>>> {
    let boards = Board::list_with_admin(&state.db)
        .await
        .map_err(ApiError::store_read)?;

    Ok(Json(boards))
}

/// Creates a board and its admin membership atomically
///
/// # Endpoint
///
/// ```text
/// POST /boards
/// Content-Type: application/json
///
/// {
///   "name": "Sprint",
///   "adminUserId": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed, or either insert was
///   rejected — in which case the transaction rolled back and no board row
///   remains visible
pub async fn create_board(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Board>)> {
    let data: CreateBoard = payload::parse(BOARD_SHAPE, body)?;

    let board = Board::create(&state.db, data)
        .await
        .map_err(ApiError::store_write)?;

    tracing::info!(board_id = %board.id, "Board created");
    Ok((StatusCode::CREATED, Json(board)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_board_shape_accepts_valid_payload() {
        let admin = Uuid::new_v4();
        let data: CreateBoard = payload::parse(
            BOARD_SHAPE,
            json!({ "name": "Sprint", "adminUserId": admin.to_string() }),
        )
        .unwrap();

        assert_eq!(data.name, "Sprint");
        assert_eq!(data.admin_user_id, admin);
    }

    #[test]
    fn test_board_shape_rejects_malformed_admin_id() {
        let err = payload::parse::<CreateBoard>(
            BOARD_SHAPE,
            json!({ "name": "Sprint", "adminUserId": "not-a-uuid" }),
        )
        .unwrap_err();

        match err {
            ApiError::ValidationError(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "adminUserId");
                assert_eq!(violations[0].rule, "identifier");
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
