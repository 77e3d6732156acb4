//! Extract IAM member bindings and BigQuery dataset access rules from Terraform files.
#![warn(missing_docs)]

/// Resource selection, access-rule decoding, and structured extraction errors.
pub mod extractor;
/// Numbered output records built from selected resources.
pub mod generator;
/// CSV output and run reporting.
pub mod output;
/// Terraform loading into a typed document tree.
pub mod parser;
