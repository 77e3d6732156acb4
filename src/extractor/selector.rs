use tracing::debug;

use crate::extractor::error::ExtractError;
use crate::extractor::fields::{expect_mapping, expect_sequence};
use crate::extractor::resource_kind::ResourceKind;
use crate::parser::document::{Mapping, Node};

/// One resource definition matched by [`select`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceBlock<'a> {
    /// Kind the block was selected for.
    pub kind: ResourceKind,
    /// Local resource name (`"viewer"` in `resource "google_project_iam_member" "viewer"`).
    pub name: &'a str,
    /// Resource attributes.
    pub body: &'a Mapping,
}

impl ResourceBlock<'_> {
    /// Terraform address of the block, e.g. `google_project_iam_member.viewer`.
    pub fn address(&self) -> String {
        format!("{}.{}", self.kind.resource_type(), self.name)
    }
}

/// Collect every resource body of `kind`, in document order.
///
/// A missing `resource` key or no matching blocks yields an empty list.
pub fn select(
    document: &Node,
    kind: ResourceKind,
) -> Result<Vec<ResourceBlock<'_>>, ExtractError> {
    let root = expect_mapping(document, "<root>")?;
    let Some(resources) = root.get("resource") else {
        debug!(
            resource_type = kind.resource_type(),
            "document has no resource blocks"
        );
        return Ok(Vec::new());
    };

    let resource_type = kind.resource_type();
    let mut selected = Vec::new();
    for (index, block) in expect_sequence(resources, "resource")?.iter().enumerate() {
        let block = expect_mapping(block, &format!("resource[{index}]"))?;
        let Some(named) = block.get(resource_type) else {
            continue;
        };

        let named = expect_mapping(named, resource_type)?;
        let Some((name, body)) = named.first() else {
            return Err(ExtractError::WrongShape {
                path: resource_type.to_string(),
                expected: "a named resource",
                found: "empty mapping",
            });
        };
        let body = expect_mapping(body, &format!("{resource_type}.{name}"))?;

        debug!(resource = %format!("{resource_type}.{name}"), "selected resource block");
        selected.push(ResourceBlock { kind, name, body });
    }

    Ok(selected)
}
