/// Card endpoints, nested under a list
///
/// The owning list is identified by the path; any `listId` the client
/// puts in the body is overwritten before validation runs.
///
/// # Endpoints
///
/// - `GET /lists/:list_id/cards` - Cards on a list
/// - `POST /lists/:list_id/cards` - Create a card on a list

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
use trellis_shared::models::card::{Card, CreateCard};
use uuid::Uuid;

/// Validation shape for card creation payloads (after path injection)
const CARD_SHAPE: Shape = &[
    FieldRules {
        field: "title",
        rules: &[Rule::Required, Rule::Length { min: 5, max: 50 }],
    },
    FieldRules {
        field: "description",
        rules: &[Rule::Required, Rule::Length { min: 0, max: 255 }],
    },
    FieldRules {
        field: "due_date",
        rules: &[Rule::Text],
    },
    FieldRules {
        field: "listId",
        rules: &[Rule::Required, Rule::Identifier],
    },
];

/// Lists all cards on a list
///
/// # Errors
///
/// - `400 Bad Request`: Malformed list id in the path, or store failure
pub async fn list_cards(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Card>>> {
    let cards = Card::list_by_list(&state.db, list_id)
        .await
        .map_err(ApiError::store_read)?;

    Ok(Json(cards))
}

/// Creates a card on a list
///
/// # Endpoint
///
/// ```text
/// POST /lists/:list_id/cards
/// Content-Type: application/json
///
/// {
///   "title": "Write release notes",
///   "description": "Cover the validator changes",
///   "due_date": "2025-07-01"
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed, or the store rejected
///   the insert (e.g. the list does not exist)
pub async fn create_card(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Card>)> {
    let body = payload::inject(body, &[("listId", list_id)]);
    let data: CreateCard = payload::parse(CARD_SHAPE, body)?;

    let card = Card::create(&state.db, data)
        .await
        .map_err(ApiError::store_write)?;

    tracing::debug!(card_id = %card.id, list_id = %list_id, "Card created");
    Ok((StatusCode::CREATED, Json(card)))
}
