use std::collections::HashSet;
use std::path::{Path, PathBuf};

use hcl::expr::{Expression, ObjectKey, TemplateExpr};
use hcl::structure::{Block, Body};
use thiserror::Error;

use crate::parser::document::{Mapping, Node, Scalar};

/// Failure to turn a configuration file into a document tree.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The text is not valid HCL.
    #[error("HCL syntax error: {0}")]
    Syntax(#[from] hcl::Error),
}

/// Read and parse a Terraform file.
pub fn load_document(path: &Path) -> Result<Node, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&source)
}

/// Parse HCL text into a document tree.
///
/// Blocks are grouped by identifier into sequences, each item being the block
/// body wrapped once per label, so `resource "t" "n" { .. }` becomes
/// `resource: [{ t: { n: { .. } } }]`.
pub fn parse_document(source: &str) -> Result<Node, LoadError> {
    let body = hcl::parse(source)?;
    Ok(Node::Mapping(body_to_mapping(&body)))
}

fn body_to_mapping(body: &Body) -> Mapping {
    let mut mapping = Mapping::new();

    for attribute in body.attributes() {
        mapping.push(attribute.key(), expression_to_node(attribute.expr()));
    }

    let mut grouped: HashSet<&str> = HashSet::new();
    for block in body.blocks() {
        let identifier = block.identifier();
        let item = block_to_node(block);
        if grouped.contains(identifier) {
            if let Some(Node::Sequence(items)) = mapping.get_mut(identifier) {
                items.push(item);
                continue;
            }
        }
        grouped.insert(identifier);
        mapping.push(identifier, Node::Sequence(vec![item]));
    }

    mapping
}

fn block_to_node(block: &Block) -> Node {
    let mut node = Node::Mapping(body_to_mapping(block.body()));
    for label in block.labels().iter().rev() {
        let mut wrapper = Mapping::new();
        wrapper.push(label.as_str(), node);
        node = Node::Mapping(wrapper);
    }
    node
}

fn expression_to_node(expr: &Expression) -> Node {
    match expr {
        Expression::Null => Node::Scalar(Scalar::Null),
        Expression::Bool(value) => Node::Scalar(Scalar::Bool(*value)),
        Expression::Number(number) => Node::Scalar(Scalar::Number(number.to_string())),
        Expression::String(text) => Node::Scalar(Scalar::String(text.clone())),
        Expression::Array(items) => {
            Node::Sequence(items.iter().map(expression_to_node).collect())
        }
        Expression::Object(object) => Node::Mapping(
            object
                .iter()
                .map(|(key, value)| (object_key_text(key), expression_to_node(value)))
                .collect(),
        ),
        Expression::TemplateExpr(template) => {
            Node::Scalar(Scalar::String(template_text(template).to_string()))
        }
        other => Node::Scalar(Scalar::String(format!("${{{other}}}"))),
    }
}

fn template_text(template: &TemplateExpr) -> &str {
    match template {
        TemplateExpr::QuotedString(text) => text,
        TemplateExpr::Heredoc(heredoc) => &heredoc.template,
    }
}

#[allow(unreachable_patterns)]
fn object_key_text(key: &ObjectKey) -> String {
    match key {
        ObjectKey::Identifier(ident) => ident.to_string(),
        ObjectKey::Expression(Expression::String(text)) => text.clone(),
        ObjectKey::Expression(Expression::TemplateExpr(template)) => {
            template_text(template).to_string()
        }
        ObjectKey::Expression(expr) => expr.to_string(),
        _ => String::new(),
    }
}
