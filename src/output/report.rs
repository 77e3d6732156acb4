use std::path::Path;

use crate::generator::records::RecordSet;

/// One JSON object per record, one per line, in sequence order.
pub fn records_as_json_lines(records: &RecordSet) -> Result<String, serde_json::Error> {
    let lines = match records {
        RecordSet::Iam(rows) => rows
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?,
        RecordSet::DatasetAccess(rows) => rows
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?,
    };
    Ok(lines.join("\n"))
}

/// Final line printed after a successful run.
pub fn finished_message(csv_path: &Path) -> String {
    format!("Finished. Check {}", csv_path.display())
}
