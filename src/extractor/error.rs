use thiserror::Error;

/// A resource body did not have the shape extraction needs.
///
/// `path` is a dotted document path such as
/// `google_bigquery_dataset.analytics.access[2]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A required attribute is absent.
    #[error("{path}: missing required attribute `{field}`")]
    MissingField {
        /// Location of the mapping that lacks the attribute.
        path: String,
        /// Attribute name.
        field: &'static str,
    },
    /// A value exists but has the wrong shape.
    #[error("{path}: expected {expected}, found {found}")]
    WrongShape {
        /// Location of the offending value.
        path: String,
        /// Shape that was required.
        expected: &'static str,
        /// Shape that was found.
        found: &'static str,
    },
}
