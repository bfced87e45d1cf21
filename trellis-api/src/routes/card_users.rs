/// Card owner endpoints
///
/// A card has at most one owner. The lookup distinguishes "no owner
/// assigned" (404) from a successful read; the assignment endpoint takes
/// both foreign keys from the path and always persists `isOwner = true` —
/// it only ever assigns an owner, never a non-owner collaborator.
///
/// # Endpoints
///
/// - `GET /cards/:card_id/users` - The card's owner, joined with the user row
/// - `POST /cards/:card_id/users/:user_id` - Assign a user as the card's owner

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
use trellis_shared::models::card_membership::{CardMembership, CardOwner, CreateCardMembership};
use uuid::Uuid;

/// Validation shape for owner assignment payloads (after path injection)
const CARD_USER_SHAPE: Shape = &[
    FieldRules {
        field: "cardId",
        rules: &[Rule::Required, Rule::Identifier],
    },
    FieldRules {
        field: "userId",
        rules: &[Rule::Required, Rule::Identifier],
    },
    FieldRules {
        field: "isOwner",
        rules: &[Rule::Required, Rule::Boolean],
    },
];

/// Gets the owner of a card
///
/// # Errors
///
/// - `404 Not Found`: No owner membership exists for the card
/// - `400 Bad Request`: Malformed card id in the path, or store failure
pub async fn get_card_owner(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
) -> ApiResult<Json<CardOwner>> {
    let owner = CardMembership::find_owner(&state.db, card_id)
        .await
        .map_err(ApiError::store_read)?
        .ok_or_else(|| ApiError::NotFound("No owner is assigned to this card".to_string()))?;

    Ok(Json(owner))
}

/// Assigns a user as the owner of a card
///
/// The persisted owner flag is forced to true regardless of the value the
/// client sent; the body's `isOwner` is still validated as a required
/// boolean.
///
/// # Endpoint
///
/// ```text
/// POST /cards/:card_id/users/:user_id
/// Content-Type: application/json
///
/// {
///   "isOwner": true
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed, or the store rejected
///   the insert (e.g. the card or user does not exist, or the membership
///   already exists)
pub async fn assign_card_owner(
    State(state): State<AppState>,
    Path((card_id, user_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<CardMembership>)> {
    let body = payload::inject(body, &[("cardId", card_id), ("userId", user_id)]);
    let mut data: CreateCardMembership = payload::parse(CARD_USER_SHAPE, body)?;

    // This endpoint only assigns owners.
    data.is_owner = true;

    let membership = CardMembership::create(&state.db, data)
        .await
        .map_err(ApiError::store_write)?;

    tracing::debug!(card_id = %card_id, user_id = %user_id, "Card owner assigned");
    Ok((StatusCode::CREATED, Json(membership)))
}
