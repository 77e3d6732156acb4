/// Dataset-access records from `google_bigquery_dataset` blocks.
pub mod bigquery;
/// IAM records from `google_project_iam_member` blocks.
pub mod iam;
/// Output record types.
pub mod records;

use crate::extractor::error::ExtractError;
use crate::extractor::resource_kind::ResourceKind;
use crate::extractor::selector::select;
use crate::parser::document::Node;
use records::RecordSet;

/// Select the resources of `kind` and normalize them into numbered records.
pub fn extract_records(document: &Node, kind: ResourceKind) -> Result<RecordSet, ExtractError> {
    let blocks = select(document, kind)?;
    tracing::debug!(
        resource_type = kind.resource_type(),
        blocks = blocks.len(),
        "selected resource blocks"
    );

    match kind {
        ResourceKind::MembershipBinding => iam::normalize_iam(&blocks).map(RecordSet::Iam),
        ResourceKind::DatasetAccess => {
            bigquery::normalize_bq(&blocks).map(RecordSet::DatasetAccess)
        }
    }
}
