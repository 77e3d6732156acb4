mod support;

use tf_creds_parser::extractor::error::ExtractError;
use tf_creds_parser::extractor::resource_kind::ResourceKind;
use tf_creds_parser::generator::{self, records::RecordSet};
use tf_creds_parser::parser::hcl_loader::parse_document;

fn iam_block(i: usize) -> String {
    format!(
        r#"
resource "google_project_iam_member" "m{i}" {{
  role   = "roles/r{i}"
  member = "user:u{i}@example.com"
}}
"#
    )
}

fn view_block(i: usize) -> String {
    format!(
        r#"    view {{
      project_id = "p{i}"
      dataset_id = "v{i}"
      table_id   = "t"
    }}
"#
    )
}

#[test]
fn iam_rows_match_source_blocks_in_order() {
    let RecordSet::Iam(records) =
        support::extract_fixture("iam_members.tf", ResourceKind::MembershipBinding)
    else {
        panic!("iam extraction should yield iam records");
    };

    let rows: Vec<_> = records
        .iter()
        .map(|r| (r.no, r.role.as_str(), r.member.as_str()))
        .collect();
    assert_eq!(
        rows,
        [
            (1, "roles/viewer", "user:alice@example.com"),
            (
                2,
                "roles/bigquery.dataEditor",
                "serviceAccount:${google_service_account.etl.email}"
            ),
            (3, "roles/logging.viewer", "group:ops@example.com"),
        ]
    );
}

#[test]
fn iam_record_count_equals_block_count() {
    for count in [0usize, 1, 7] {
        let source: String = (0..count).map(iam_block).collect();
        let doc = parse_document(&source).expect("generated HCL should parse");
        let records = generator::extract_records(&doc, ResourceKind::MembershipBinding)
            .expect("generated blocks are complete");

        let RecordSet::Iam(records) = records else {
            panic!("expected iam records");
        };
        assert_eq!(records.len(), count);
        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.no, index + 1);
            assert_eq!(record.role, format!("roles/r{index}"));
            assert_eq!(record.member, format!("user:u{index}@example.com"));
        }
    }
}

#[test]
fn bigquery_rows_flatten_rules_and_views() {
    let RecordSet::DatasetAccess(records) =
        support::extract_fixture("bigquery_datasets.tf", ResourceKind::DatasetAccess)
    else {
        panic!("bq extraction should yield dataset records");
    };

    let rows: Vec<_> = records
        .iter()
        .map(|r| (r.no, &*r.dataset_id, &*r.role, &*r.entity))
        .collect();
    assert_eq!(
        rows,
        [
            (1, "analytics", "OWNER", "owner@example.com"),
            (2, "analytics", "READER", "example.com"),
            (3, "reporting", "view", "acme-prod"),
            (4, "raw_events", "WRITER", "projectWriters"),
            (5, "raw_events", "READER", "analysts@example.com"),
        ]
    );
}

#[test]
fn view_list_of_length_k_expands_to_k_view_records() {
    let views: String = (0..3).map(view_block).collect();
    let source = format!(
        r#"
resource "google_bigquery_dataset" "d" {{
  dataset_id = "d"
  access {{
{views}  }}
  access {{
    role = "READER"
  }}
}}
"#
    );
    let doc = parse_document(&source).expect("generated HCL should parse");

    let RecordSet::DatasetAccess(records) =
        generator::extract_records(&doc, ResourceKind::DatasetAccess).expect("valid dataset")
    else {
        panic!("expected dataset records");
    };

    assert_eq!(records.len(), 4);
    assert!(records[..3].iter().all(|r| r.role == "view"));
    let view_datasets: Vec<_> = records[..3].iter().map(|r| r.dataset_id.as_str()).collect();
    assert_eq!(view_datasets, ["v0", "v1", "v2"]);
    assert_eq!(records[3].dataset_id, "d");
    assert_eq!(records[3].entity, "");
}

#[test]
fn each_mode_ignores_the_other_resource_type() {
    let iam = support::extract_fixture("bigquery_datasets.tf", ResourceKind::MembershipBinding);
    assert_eq!(iam.len(), 1);
    assert_eq!(iam.field_layout(), ["no", "role", "member"]);

    let bq = support::extract_fixture("iam_members.tf", ResourceKind::DatasetAccess);
    assert!(bq.is_empty());
    assert_eq!(bq.field_layout(), ["no", "dataset_id", "role", "entity"]);
}

#[test]
fn document_without_resources_yields_no_records() {
    let records = support::extract_fixture("no_resources.tf", ResourceKind::MembershipBinding);
    assert!(records.is_empty());
}

#[test]
fn missing_member_is_a_structured_error() {
    let doc = support::load_fixture("missing_member.tf");
    let err = generator::extract_records(&doc, ResourceKind::MembershipBinding)
        .expect_err("incomplete binding should fail the run");

    assert_eq!(
        err,
        ExtractError::MissingField {
            path: "google_project_iam_member.incomplete".to_string(),
            field: "member",
        }
    );
}
