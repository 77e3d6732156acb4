use serde::Serialize;

use crate::extractor::resource_kind::ResourceKind;

/// One `google_project_iam_member` binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IamRecord {
    /// 1-based sequence number.
    pub no: usize,
    /// Granted role, e.g. `roles/viewer`.
    pub role: String,
    /// Member identifier, e.g. `user:alice@example.com`.
    pub member: String,
}

/// One grant on a BigQuery dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetAccessRecord {
    /// 1-based sequence number, assigned after all blocks are flattened.
    pub no: usize,
    /// Dataset the grant applies to (the view's dataset for view grants).
    pub dataset_id: String,
    /// Granted role, or `view` for authorized views.
    pub role: String,
    /// User email, domain, special group, group email, or view project; empty when unset.
    pub entity: String,
}

/// Records of one run; a run extracts exactly one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSet {
    /// Output of `--iam`.
    Iam(Vec<IamRecord>),
    /// Output of `--bq`.
    DatasetAccess(Vec<DatasetAccessRecord>),
}

impl RecordSet {
    /// Kind the records were extracted for.
    pub fn kind(&self) -> ResourceKind {
        match self {
            RecordSet::Iam(_) => ResourceKind::MembershipBinding,
            RecordSet::DatasetAccess(_) => ResourceKind::DatasetAccess,
        }
    }

    /// CSV header for this set.
    pub fn field_layout(&self) -> &'static [&'static str] {
        self.kind().field_layout()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        match self {
            RecordSet::Iam(records) => records.len(),
            RecordSet::DatasetAccess(records) => records.len(),
        }
    }

    /// Whether no records were extracted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
