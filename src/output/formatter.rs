use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::generator::records::RecordSet;

/// The CSV file could not be written.
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    /// File the writer tried to create.
    pub path: PathBuf,
    /// Underlying CSV or I/O error.
    #[source]
    pub source: csv::Error,
}

/// Output path for an input file: the same path with a `.csv` extension.
pub fn csv_path_for(input: &Path) -> PathBuf {
    input.with_extension("csv")
}

/// Write a header row and one row per record to `path`, replacing any existing file.
pub fn write_output(path: &Path, records: &RecordSet) -> Result<(), WriteError> {
    let wrap = |source: csv::Error| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|e| wrap(e.into()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    writer.write_record(records.field_layout()).map_err(wrap)?;
    match records {
        RecordSet::Iam(rows) => serialize_rows(&mut writer, rows).map_err(wrap)?,
        RecordSet::DatasetAccess(rows) => serialize_rows(&mut writer, rows).map_err(wrap)?,
    }
    writer.flush().map_err(|e| wrap(e.into()))?;

    Ok(())
}

fn serialize_rows<W: std::io::Write, T: Serialize>(
    writer: &mut csv::Writer<W>,
    rows: &[T],
) -> Result<(), csv::Error> {
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::records::{DatasetAccessRecord, IamRecord};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_path(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!("{prefix}_{nanos}"))
    }

    #[test]
    fn csv_path_swaps_extension() {
        assert_eq!(
            csv_path_for(Path::new("infra/prod.tf")),
            PathBuf::from("infra/prod.csv")
        );
        assert_eq!(
            csv_path_for(Path::new("my.tf.d/iam.tf")),
            PathBuf::from("my.tf.d/iam.csv")
        );
        assert_eq!(
            csv_path_for(Path::new("infra/.tf")),
            PathBuf::from("infra/.tf.csv")
        );
    }

    #[test]
    fn empty_record_set_still_writes_header() {
        let path = unique_path("tf_creds_empty.csv");
        write_output(&path, &RecordSet::DatasetAccess(Vec::new())).expect("write should succeed");

        let written = std::fs::read_to_string(&path).expect("csv should exist");
        assert_eq!(written, "no,dataset_id,role,entity\r\n");
    }

    #[test]
    fn write_output_overwrites_existing_file() {
        let path = unique_path("tf_creds_overwrite.csv");
        std::fs::write(&path, "stale contents that are longer than the new file\n")
            .expect("should create stale file");

        let records = RecordSet::Iam(vec![IamRecord {
            no: 1,
            role: "roles/viewer".to_string(),
            member: "user:x@example.com".to_string(),
        }]);
        write_output(&path, &records).expect("write should succeed");

        let written = std::fs::read_to_string(&path).expect("csv should exist");
        assert_eq!(
            written,
            "no,role,member\r\n1,roles/viewer,user:x@example.com\r\n"
        );
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let path = unique_path("tf_creds_quoted.csv");
        let records = RecordSet::DatasetAccess(vec![DatasetAccessRecord {
            no: 1,
            dataset_id: "ds,1".to_string(),
            role: "READER".to_string(),
            entity: "say \"hi\"".to_string(),
        }]);
        write_output(&path, &records).expect("write should succeed");

        let written = std::fs::read_to_string(&path).expect("csv should exist");
        assert!(written.ends_with("1,\"ds,1\",READER,\"say \"\"hi\"\"\"\r\n"));
    }

    #[test]
    fn write_output_reports_the_attempted_path() {
        let dir = unique_path("tf_creds_missing_dir");
        let path = dir.join("out.csv");

        let err = write_output(&path, &RecordSet::Iam(Vec::new()))
            .expect_err("parent directory does not exist");
        assert_eq!(err.path, path);
        assert!(err.to_string().contains("out.csv"));
    }
}
