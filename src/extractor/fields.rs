use crate::extractor::error::ExtractError;
use crate::parser::document::{Mapping, Node, Scalar};

/// Require `node` to be a mapping.
pub fn expect_mapping<'a>(node: &'a Node, path: &str) -> Result<&'a Mapping, ExtractError> {
    node.as_mapping()
        .ok_or_else(|| wrong_shape(path, "mapping", node))
}

/// Require `node` to be a sequence.
pub fn expect_sequence<'a>(node: &'a Node, path: &str) -> Result<&'a [Node], ExtractError> {
    node.as_sequence()
        .ok_or_else(|| wrong_shape(path, "sequence", node))
}

/// Require `field` to be present in `mapping` and hold non-null scalar text.
pub fn required_text<'a>(
    mapping: &'a Mapping,
    field: &'static str,
    path: &str,
) -> Result<&'a str, ExtractError> {
    let node = required(mapping, field, path)?;
    node.as_text()
        .ok_or_else(|| wrong_shape(&format!("{path}.{field}"), "non-null scalar", node))
}

/// Require `field` to be present in `mapping` and hold a sequence.
pub fn required_sequence<'a>(
    mapping: &'a Mapping,
    field: &'static str,
    path: &str,
) -> Result<&'a [Node], ExtractError> {
    let node = required(mapping, field, path)?;
    expect_sequence(node, &format!("{path}.{field}"))
}

/// Text of `field` when set. Terraform treats `null` as unset, so a null
/// value reads as absent; any other non-scalar value is an error.
pub fn optional_text<'a>(
    mapping: &'a Mapping,
    field: &'static str,
    path: &str,
) -> Result<Option<&'a str>, ExtractError> {
    match mapping.get(field) {
        None | Some(Node::Scalar(Scalar::Null)) => Ok(None),
        Some(node) => node
            .as_text()
            .map(Some)
            .ok_or_else(|| wrong_shape(&format!("{path}.{field}"), "non-null scalar", node)),
    }
}

fn required<'a>(
    mapping: &'a Mapping,
    field: &'static str,
    path: &str,
) -> Result<&'a Node, ExtractError> {
    let Some(node) = mapping.get(field) else {
        return Err(ExtractError::MissingField {
            path: path.to_string(),
            field,
        });
    };
    Ok(node)
}

fn wrong_shape(path: &str, expected: &'static str, found: &Node) -> ExtractError {
    ExtractError::WrongShape {
        path: path.to_string(),
        expected,
        found: found.shape_name(),
    }
}
