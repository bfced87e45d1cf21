/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User listing and creation
/// - `boards`: Board listing and transactional creation
/// - `lists`: Lists nested under a board
/// - `cards`: Cards nested under a list
/// - `card_users`: Card owner lookup and assignment
///
/// Every POST handler is the same fixed pipeline: inject path-derived
/// fields (where the route carries any) → validate against the entity
/// shape → parse to a typed value → persist → respond 201 with the row.
/// GET handlers skip injection/validation and go straight to persistence.

pub mod boards;
pub mod card_users;
pub mod cards;
pub mod health;
pub mod lists;
pub mod users;
