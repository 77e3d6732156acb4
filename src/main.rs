//! CLI entry point for `tf-creds-parser`.

use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser};
use tf_creds_parser::extractor::resource_kind::ResourceKind;
use tf_creds_parser::generator;
use tf_creds_parser::output::{formatter, report};
use tf_creds_parser::parser::hcl_loader;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "tf-creds-parser",
    version,
    about = "Extract IAM members and BigQuery dataset access rules from a Terraform file into CSV"
)]
struct Cli {
    /// Path to the .tf file
    tf_path: PathBuf,

    /// Parse IAM resources (default)
    #[arg(short, long)]
    iam: bool,

    /// Parse BigQuery resources
    #[arg(short, long)]
    bq: bool,

    /// Print every extracted record and verbose diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.iam && cli.bq {
        eprintln!(
            "\nPlease choose either iam or bq option\n\n{}",
            Cli::command().render_help()
        );
        process::exit(1);
    }
    let kind = if cli.bq {
        ResourceKind::DatasetAccess
    } else {
        ResourceKind::MembershipBinding
    };

    if !is_terraform_file(&cli.tf_path) {
        eprintln!(
            "{} is bad terraform resource file, please check the path.",
            cli.tf_path.display()
        );
        process::exit(1);
    }

    // Stage 1: Load
    let document = match hcl_loader::load_document(&cli.tf_path) {
        Ok(document) => document,
        Err(e) => {
            tracing::debug!(error = %e, "failed to load terraform file");
            eprintln!("Error on loading .tf file. Please check the syntax");
            process::exit(1);
        }
    };

    // Stage 2-3: Select and normalize
    let records = match generator::extract_records(&document, kind) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error extracting {kind} resources: {e}");
            process::exit(1);
        }
    };

    if cli.verbose {
        match report::records_as_json_lines(&records) {
            Ok(lines) if !lines.is_empty() => println!("{lines}"),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "failed to render records as JSON"),
        }
    }

    // Stage 4: Write
    let csv_path = formatter::csv_path_for(&cli.tf_path);
    if let Err(e) = formatter::write_output(&csv_path, &records) {
        tracing::debug!(error = %e, "csv write failed");
        eprintln!(
            "Cannot write to the csv file. Tried: {}. Please check access rights.",
            e.path.display()
        );
        process::exit(1);
    }

    tracing::info!(
        records = records.len(),
        path = %csv_path.display(),
        "wrote {kind} records"
    );
    println!("{}", report::finished_message(&csv_path));
}

/// Suffix match: a file named just `.tf` has no [`Path::extension`].
fn is_terraform_file(path: &Path) -> bool {
    path.is_file() && path.to_string_lossy().ends_with(".tf")
}
