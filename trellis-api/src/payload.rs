/// Path-derived field injection and payload parsing
///
/// Foreign keys carried in the request path (a list's board, a card's
/// list, a membership's card and user) are merged into the payload
/// *before* validation runs, overwriting any client-supplied value of the
/// same name. A malformed or malicious body-supplied foreign key can
/// therefore never reach persistence. Injection is idempotent.
///
/// After validation, [`parse`] coerces the payload into the typed
/// `Create*` value — an explicit step with no hidden mutation of the
/// caller's data.

use crate::error::ApiError;
use crate::validate::{validate, Shape};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

/// Overwrites the named payload fields with path-derived identifiers
///
/// A non-object payload is replaced by an empty object first, so
/// validation reports the missing declared fields instead of the parse
/// failing opaquely.
pub fn inject(payload: Value, fields: &[(&str, Uuid)]) -> Value {
    let mut map = match payload {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    for (field, id) in fields {
        map.insert((*field).to_string(), Value::String(id.to_string()));
    }

    Value::Object(map)
}

/// Validates a payload against its shape, then coerces it to a typed value
///
/// # Errors
///
/// - [`ApiError::ValidationError`] with the full violation list when any
///   declared rule fails
/// - [`ApiError::BadRequest`] if the validated payload still cannot be
///   deserialized (a shape/type mismatch between the rule table and the
///   target struct)
pub fn parse<T: DeserializeOwned>(shape: Shape, payload: Value) -> Result<T, ApiError> {
    validate(shape, &payload).map_err(ApiError::ValidationError)?;

    serde_json::from_value(payload)
        .map_err(|err| ApiError::BadRequest(format!("Malformed payload: {}", err)))
}
