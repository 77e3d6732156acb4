/// Tagged decoding of dataset `access` rules and entity resolution.
pub mod access_rule;
/// Structured extraction errors.
pub mod error;
/// Typed accessors that turn document lookups into [`error::ExtractError`]s.
pub mod fields;
/// The two resource shapes the tool extracts.
pub mod resource_kind;
/// Finds resource bodies of a given kind in a parsed document.
pub mod selector;
