use std::fmt;

/// Resource shape requested for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `google_project_iam_member`: one role granted to one member.
    MembershipBinding,
    /// `google_bigquery_dataset`: a dataset and its list of access rules.
    DatasetAccess,
}

impl ResourceKind {
    /// Terraform resource type selected for this kind.
    pub const fn resource_type(self) -> &'static str {
        match self {
            ResourceKind::MembershipBinding => "google_project_iam_member",
            ResourceKind::DatasetAccess => "google_bigquery_dataset",
        }
    }

    /// CSV header for records of this kind.
    pub const fn field_layout(self) -> &'static [&'static str] {
        match self {
            ResourceKind::MembershipBinding => &["no", "role", "member"],
            ResourceKind::DatasetAccess => &["no", "dataset_id", "role", "entity"],
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::MembershipBinding => write!(f, "iam"),
            ResourceKind::DatasetAccess => write!(f, "bq"),
        }
    }
}
