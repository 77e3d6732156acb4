use tracing::{debug, warn};

use crate::extractor::access_rule::{decode_rule, AccessRule, VIEW_ROLE};
use crate::extractor::error::ExtractError;
use crate::extractor::fields::{required_sequence, required_text};
use crate::extractor::selector::ResourceBlock;
use crate::generator::records::DatasetAccessRecord;

struct Grant<'a> {
    dataset_id: &'a str,
    role: &'a str,
    entity: &'a str,
}

/// Flatten every dataset's `access` list into records.
///
/// View rules expand to one record per view with role `view`; other rules
/// give one record for the parent dataset. Numbering runs over the flattened
/// list, so it never restarts per dataset.
pub fn normalize_bq(
    blocks: &[ResourceBlock<'_>],
) -> Result<Vec<DatasetAccessRecord>, ExtractError> {
    let mut grants = Vec::new();
    for block in blocks {
        collect_dataset_grants(block, &mut grants)?;
    }

    Ok(grants
        .into_iter()
        .enumerate()
        .map(|(index, grant)| DatasetAccessRecord {
            no: index + 1,
            dataset_id: grant.dataset_id.to_string(),
            role: grant.role.to_string(),
            entity: grant.entity.to_string(),
        })
        .collect())
}

fn collect_dataset_grants<'a>(
    block: &ResourceBlock<'a>,
    grants: &mut Vec<Grant<'a>>,
) -> Result<(), ExtractError> {
    let address = block.address();
    let rules = required_sequence(block.body, "access", &address)?;

    for (index, rule) in rules.iter().enumerate() {
        let rule_path = format!("{address}.access[{index}]");
        match decode_rule(rule, &rule_path)? {
            AccessRule::ViewExpansion(views) => {
                debug!(rule = %rule_path, views = views.len(), "view access rule");
                grants.extend(views.into_iter().map(|view| Grant {
                    dataset_id: view.dataset_id,
                    role: VIEW_ROLE,
                    entity: view.project_id,
                }));
            }
            AccessRule::Attributed { role, entity } => {
                if entity.is_ambiguous() {
                    let keys: Vec<_> = entity.present.iter().map(|key| key.attribute()).collect();
                    warn!(
                        rule = %rule_path,
                        keys = %keys.join(", "),
                        winner = entity.key.map_or("", |key| key.attribute()),
                        "several entity attributes set, keeping the last one"
                    );
                }
                // Only direct grants need the parent dataset id.
                let dataset_id = required_text(block.body, "dataset_id", &address)?;
                debug!(rule = %rule_path, role, entity = entity.value, "direct access rule");
                grants.push(Grant {
                    dataset_id,
                    role,
                    entity: entity.value,
                });
            }
        }
    }

    Ok(())
}
