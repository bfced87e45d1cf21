/// Declarative payload validation
///
/// Each entity declares its shape once as a table of per-field rules; a
/// single generic evaluator walks the table against the raw JSON payload
/// and collects every violation. Validation is purely a function of
/// shape + payload: no I/O, no side effects.
///
/// All violated fields are reported together rather than failing on the
/// first, so clients get an actionable error list. Fields present on the
/// payload but absent from the shape are ignored.
///
/// # Example
///
/// ```
/// use trellis_api::validate::{validate, FieldRules, Rule, Shape};
/// use serde_json::json;
///
/// const SHAPE: Shape = &[FieldRules {
///     field: "name",
///     rules: &[Rule::Required, Rule::Length { min: 5, max: 30 }],
/// }];
///
/// assert!(validate(SHAPE, &json!({ "name": "Backlog grooming" })).is_ok());
/// assert!(validate(SHAPE, &json!({})).is_err());
/// ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A single per-field constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field must be present and non-null
    Required,

    /// Value must be a string whose character count lies within
    /// [min, max], both bounds inclusive
    Length { min: usize, max: usize },

    /// Value must be a string parseable as a UUID
    Identifier,

    /// Value must be a JSON boolean
    Boolean,

    /// Value must be a JSON string when present; absence and null are
    /// accepted (used for optional fields)
    Text,
}

impl Rule {
    /// Short rule name carried in the violation descriptor
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Length { .. } => "length",
            Rule::Identifier => "identifier",
            Rule::Boolean => "boolean",
            Rule::Text => "string",
        }
    }
}

/// Rules declared for one payload field
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    /// Wire name of the field on the JSON payload
    pub field: &'static str,

    /// Rules evaluated in declaration order
    pub rules: &'static [Rule],
}

/// An entity shape: the full rule table for one payload
pub type Shape = &'static [FieldRules];

/// A single field-level violation, carried in 422 response bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field that failed validation
    pub field: String,

    /// Name of the violated rule
    pub rule: String,

    /// Human-readable error message
    pub message: String,
}

/// Validates a raw payload against an entity shape
///
/// Walks every declared field and accumulates all violations. A field
/// that fails `Required` skips its remaining rules so one missing field
/// does not report a cascade of secondary errors.
///
/// # Errors
///
/// Returns the full violation list when any declared rule fails.
pub fn validate(shape: Shape, payload: &Value) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    for entry in shape {
        let value = payload.get(entry.field);

        for rule in entry.rules {
            if let Err(violation) = check(entry.field, rule, value) {
                let missing = matches!(rule, Rule::Required);
                violations.push(violation);
                if missing {
                    break;
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Evaluates one rule against one field value
///
/// Rules other than `Required` treat absence and null as vacuously
/// satisfied; presence is `Required`'s concern.
fn check(field: &str, rule: &Rule, value: Option<&Value>) -> Result<(), FieldViolation> {
    let violation = |message: String| FieldViolation {
        field: field.to_string(),
        rule: rule.name().to_string(),
        message,
    };

    let present = match value {
        Some(v) if !v.is_null() => Some(v),
        _ => None,
    };

    match rule {
        Rule::Required => {
            if present.is_none() {
                return Err(violation(format!("{field} is required")));
            }
        }
        Rule::Length { min, max } => {
            if let Some(v) = present {
                match v.as_str() {
                    Some(s) if (*min..=*max).contains(&s.chars().count()) => {}
                    _ => {
                        return Err(violation(format!(
                            "{field} must be a string between {min} and {max} characters"
                        )));
                    }
                }
            }
        }
        Rule::Identifier => {
            if let Some(v) = present {
                let parsed = v.as_str().map(Uuid::parse_str);
                if !matches!(parsed, Some(Ok(_))) {
                    return Err(violation(format!("{field} must be a valid identifier")));
                }
            }
        }
        Rule::Boolean => {
            if let Some(v) = present {
                if !v.is_boolean() {
                    return Err(violation(format!("{field} must be a boolean")));
                }
            }
        }
        Rule::Text => {
            if let Some(v) = present {
                if !v.is_string() {
                    return Err(violation(format!("{field} must be a string")));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SHAPE: Shape = &[
        FieldRules {
            field: "name",
            rules: &[Rule::Required, Rule::Length { min: 5, max: 30 }],
        },
        FieldRules {
            field: "boardId",
            rules: &[Rule::Required, Rule::Identifier],
        },
    ];

    fn board_id() -> String {
        "550e8400-e29b-41d4-a716-446655440000".to_string()
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = json!({ "name": "Backlog", "boardId": board_id() });
        assert!(validate(SHAPE, &payload).is_ok());
    }

    #[test]
    fn test_missing_required_field_is_reported() {
        let payload = json!({ "boardId": board_id() });
        let violations = validate(SHAPE, &payload).unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
        assert_eq!(violations[0].rule, "required");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let payload = json!({ "name": null, "boardId": board_id() });
        let violations = validate(SHAPE, &payload).unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "required");
    }

    #[test]
    fn test_all_violations_reported_together() {
        let payload = json!({ "name": "abc", "boardId": "not-a-uuid" });
        let violations = validate(SHAPE, &payload).unwrap_err();

        assert_eq!(violations.len(), 2);
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"boardId"));
    }

    #[test]
    fn test_required_failure_skips_remaining_rules() {
        // Missing name must report "required" once, not also "length".
        let payload = json!({ "boardId": board_id() });
        let violations = validate(SHAPE, &payload).unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "required");
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        for len in [5usize, 30] {
            let payload = json!({ "name": "x".repeat(len), "boardId": board_id() });
            assert!(validate(SHAPE, &payload).is_ok(), "length {len} must pass");
        }

        for len in [4usize, 31] {
            let payload = json!({ "name": "x".repeat(len), "boardId": board_id() });
            let violations = validate(SHAPE, &payload).unwrap_err();
            assert_eq!(violations[0].rule, "length", "length {len} must fail");
        }
    }

    #[test]
    fn test_length_rejects_non_string() {
        let payload = json!({ "name": 12345, "boardId": board_id() });
        let violations = validate(SHAPE, &payload).unwrap_err();
        assert_eq!(violations[0].rule, "length");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = json!({
            "name": "Backlog",
            "boardId": board_id(),
            "extra": "ignored",
            "nested": { "also": "ignored" },
        });
        assert!(validate(SHAPE, &payload).is_ok());
    }

    #[test]
    fn test_boolean_rule() {
        const OWNER_SHAPE: Shape = &[FieldRules {
            field: "isOwner",
            rules: &[Rule::Required, Rule::Boolean],
        }];

        assert!(validate(OWNER_SHAPE, &json!({ "isOwner": true })).is_ok());
        assert!(validate(OWNER_SHAPE, &json!({ "isOwner": false })).is_ok());

        let violations = validate(OWNER_SHAPE, &json!({ "isOwner": "yes" })).unwrap_err();
        assert_eq!(violations[0].rule, "boolean");
    }

    #[test]
    fn test_optional_text_rule() {
        const DUE_SHAPE: Shape = &[FieldRules {
            field: "due_date",
            rules: &[Rule::Text],
        }];

        // Absent and null are both fine for an optional field.
        assert!(validate(DUE_SHAPE, &json!({})).is_ok());
        assert!(validate(DUE_SHAPE, &json!({ "due_date": null })).is_ok());
        assert!(validate(DUE_SHAPE, &json!({ "due_date": "2025-07-01" })).is_ok());

        let violations = validate(DUE_SHAPE, &json!({ "due_date": 20250701 })).unwrap_err();
        assert_eq!(violations[0].rule, "string");
    }

    #[test]
    fn test_empty_description_passes_zero_min_length() {
        const DESC_SHAPE: Shape = &[FieldRules {
            field: "description",
            rules: &[Rule::Required, Rule::Length { min: 0, max: 255 }],
        }];

        assert!(validate(DESC_SHAPE, &json!({ "description": "" })).is_ok());
    }

    #[test]
    fn test_non_object_payload_reports_required_fields() {
        let violations = validate(SHAPE, &json!("not an object")).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.rule == "required"));
    }
}
