use crate::extractor::error::ExtractError;
use crate::extractor::fields::{expect_mapping, optional_text, required_sequence, required_text};
use crate::parser::document::{Mapping, Node, Scalar};

/// Role written for every record expanded from a `view` reference.
pub const VIEW_ROLE: &str = "view";

/// Attribute naming the grantee of a direct access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKey {
    /// `user_by_email`
    UserByEmail,
    /// `domain`
    Domain,
    /// `special_group`
    SpecialGroup,
    /// `group_by_email`
    GroupByEmail,
}

/// Entity keys in evaluation order. When several are set the last one wins.
pub const ENTITY_PRIORITY: [EntityKey; 4] = [
    EntityKey::UserByEmail,
    EntityKey::Domain,
    EntityKey::SpecialGroup,
    EntityKey::GroupByEmail,
];

impl EntityKey {
    /// Attribute name in the dataset `access` block.
    pub const fn attribute(self) -> &'static str {
        match self {
            EntityKey::UserByEmail => "user_by_email",
            EntityKey::Domain => "domain",
            EntityKey::SpecialGroup => "special_group",
            EntityKey::GroupByEmail => "group_by_email",
        }
    }
}

/// A view authorized on a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewReference<'a> {
    /// Dataset holding the view.
    pub dataset_id: &'a str,
    /// Project holding the view.
    pub project_id: &'a str,
}

/// Entity resolved from a direct access rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntity<'a> {
    /// The winning key, `None` when no entity key is set.
    pub key: Option<EntityKey>,
    /// Value of the winning key, empty when unset.
    pub value: &'a str,
    /// Every entity key that was set, in evaluation order.
    pub present: Vec<EntityKey>,
}

impl ResolvedEntity<'_> {
    /// More than one entity key was set on the same rule.
    pub fn is_ambiguous(&self) -> bool {
        self.present.len() > 1
    }
}

/// One entry of a dataset's `access` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRule<'a> {
    /// Rule with a `view` list: one record per referenced view.
    ViewExpansion(Vec<ViewReference<'a>>),
    /// Direct grant of `role` to an entity.
    Attributed {
        /// Granted role.
        role: &'a str,
        /// Grantee.
        entity: ResolvedEntity<'a>,
    },
}

/// Classify an access rule. A rule carrying `view` is always a view expansion.
pub fn decode_rule<'a>(rule: &'a Node, path: &str) -> Result<AccessRule<'a>, ExtractError> {
    let rule = expect_mapping(rule, path)?;

    if matches!(rule.get("view"), Some(view) if !matches!(view, Node::Scalar(Scalar::Null))) {
        let views = required_sequence(rule, "view", path)?
            .iter()
            .enumerate()
            .map(|(index, view)| {
                let view_path = format!("{path}.view[{index}]");
                let view = expect_mapping(view, &view_path)?;
                Ok(ViewReference {
                    dataset_id: required_text(view, "dataset_id", &view_path)?,
                    project_id: required_text(view, "project_id", &view_path)?,
                })
            })
            .collect::<Result<Vec<_>, ExtractError>>()?;
        return Ok(AccessRule::ViewExpansion(views));
    }

    Ok(AccessRule::Attributed {
        role: required_text(rule, "role", path)?,
        entity: resolve_entity(rule, path)?,
    })
}

/// Walk [`ENTITY_PRIORITY`] and keep the last key that is set.
pub fn resolve_entity<'a>(
    rule: &'a Mapping,
    path: &str,
) -> Result<ResolvedEntity<'a>, ExtractError> {
    let mut resolved = ResolvedEntity {
        key: None,
        value: "",
        present: Vec::new(),
    };
    for key in ENTITY_PRIORITY {
        if let Some(value) = optional_text(rule, key.attribute(), path)? {
            resolved.key = Some(key);
            resolved.value = value;
            resolved.present.push(key);
        }
    }
    Ok(resolved)
}
