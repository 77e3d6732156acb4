/// Writes extracted records to a CSV file next to the input.
pub mod formatter;
/// Run summary and JSON-lines echo of extracted records.
pub mod report;
