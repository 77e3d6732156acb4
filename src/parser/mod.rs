/// Document tree produced from a configuration file: mappings, sequences, and scalars.
pub mod document;
/// Thin wrapper around `hcl-rs` that loads Terraform text into a [`document::Node`].
pub mod hcl_loader;
