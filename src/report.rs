use crate::analyzer::LogSummary;
use colored::Colorize;
use std::io;
use std::path::Path;
use thiserror::Error;

const SEPARATOR: &str =
    "════════════════════════════════════════════════════════════════════";
const THIN_SEP: &str =
    "────────────────────────────────────────────────────────────────────";

/// Errors raised while writing the result files.
///
/// Surfaced to the operator and fatal for the run; a partial record file on
/// disk must never pass for a complete one.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write CSV record '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write JSON report '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Print a fully formatted analysis report to stdout
pub fn print_report(summary: &LogSummary, source_file: &Path) {
    println!("\n{}", SEPARATOR.cyan().bold());
    println!("{}", "  ACCESS LOG AUDIT".white().bold());
    println!("{}", SEPARATOR.cyan().bold());
    println!("  Source : {}", source_file.display().to_string().yellow());
    println!("  Lines  : {}", summary.total_lines);
    println!();

    // ── Requests per IP ───────────────────────────────────────────────────────
    section_header("REQUESTS PER IP ADDRESS");
    if summary.address_counts.is_empty() {
        println!("  (no data)");
    } else {
        println!("  {:<20} {}", "IP Address", "Request Count");
        println!("  {}", &THIN_SEP[..42]);
        for entry in &summary.address_counts {
            println!("  {:<20} {}", entry.address.cyan(), entry.requests);
        }
    }
    println!();

    // ── Most accessed endpoint ────────────────────────────────────────────────
    section_header("MOST FREQUENTLY ACCESSED ENDPOINT");
    println!(
        "  {} (accessed {} times)",
        summary.top_endpoint.endpoint.cyan().bold(),
        summary.top_endpoint.hits
    );
    println!();

    // ── Suspicious activity ───────────────────────────────────────────────────
    section_header(&format!(
        "SUSPICIOUS ACTIVITY — FAILED LOGINS > {}",
        summary.threshold
    ));
    if summary.flagged.is_empty() {
        println!("  {} No suspicious activity detected.", "✓".green());
    } else {
        println!("  {:<20} {}", "IP Address", "Failed Login Attempts");
        println!("  {}", &THIN_SEP[..45]);
        for entry in &summary.flagged {
            println!(
                "  {:<20} {}",
                entry.address.red().bold(),
                entry.failed_logins.to_string().red()
            );
        }
    }

    println!("\n{}\n", SEPARATOR.cyan());
}

/// Write the structured CSV record: three sections in fixed order, each with
/// its header row, separated by one empty row.
///
/// Empty sections keep their headers over an empty body; the endpoint
/// section always has exactly one data row (the sentinel when nothing
/// matched).
pub fn export_csv(summary: &LogSummary, path: &Path) -> Result<(), ReportError> {
    // Sections have different column counts, so the writer must be flexible.
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    writer
        .write_record(["IP Address", "Request Count"])
        .map_err(|e| csv_error(path, e))?;
    for entry in &summary.address_counts {
        let count = entry.requests.to_string();
        writer
            .write_record([entry.address.as_str(), count.as_str()])
            .map_err(|e| csv_error(path, e))?;
    }
    writer.write_record(None::<&[u8]>).map_err(|e| csv_error(path, e))?;

    writer
        .write_record(["Most Accessed Endpoint"])
        .map_err(|e| csv_error(path, e))?;
    writer
        .write_record(["Endpoint", "Access Count"])
        .map_err(|e| csv_error(path, e))?;
    let hits = summary.top_endpoint.hits.to_string();
    writer
        .write_record([summary.top_endpoint.endpoint.as_str(), hits.as_str()])
        .map_err(|e| csv_error(path, e))?;
    writer.write_record(None::<&[u8]>).map_err(|e| csv_error(path, e))?;

    writer
        .write_record(["Suspicious Activity"])
        .map_err(|e| csv_error(path, e))?;
    writer
        .write_record(["IP Address", "Failed Login Count"])
        .map_err(|e| csv_error(path, e))?;
    for entry in &summary.flagged {
        let count = entry.failed_logins.to_string();
        writer
            .write_record([entry.address.as_str(), count.as_str()])
            .map_err(|e| csv_error(path, e))?;
    }

    writer.flush().map_err(|e| csv_error(path, e.into()))
}

/// Export the summary as pretty-printed JSON to the given path
pub fn export_json(summary: &LogSummary, path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(summary).map_err(|e| ReportError::Json {
        path: path.display().to_string(),
        source: io::Error::new(io::ErrorKind::InvalidData, format!("serialization failed: {}", e)),
    })?;
    std::fs::write(path, json).map_err(|e| ReportError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn csv_error(path: &Path, source: csv::Error) -> ReportError {
    ReportError::Csv {
        path: path.display().to_string(),
        source,
    }
}

fn section_header(title: &str) {
    println!("  {} {}", "▶".cyan(), title.white().bold());
    println!("  {}", THIN_SEP);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AddressCount, FlaggedAddress, TopEndpoint};

    fn sample_summary() -> LogSummary {
        LogSummary {
            total_lines: 13,
            address_counts: vec![
                AddressCount { address: "10.0.0.1".into(), requests: 12 },
                AddressCount { address: "10.0.0.2".into(), requests: 1 },
            ],
            top_endpoint: TopEndpoint { endpoint: "/login".into(), hits: 11 },
            flagged: vec![FlaggedAddress { address: "10.0.0.1".into(), failed_logins: 11 }],
            threshold: 10,
        }
    }

    #[test]
    fn csv_has_three_sections_with_separating_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        export_csv(&sample_summary(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = written.lines().collect();
        assert_eq!(
            rows,
            vec![
                "IP Address,Request Count",
                "10.0.0.1,12",
                "10.0.0.2,1",
                "",
                "Most Accessed Endpoint",
                "Endpoint,Access Count",
                "/login,11",
                "",
                "Suspicious Activity",
                "IP Address,Failed Login Count",
                "10.0.0.1,11",
            ]
        );
    }

    #[test]
    fn csv_keeps_headers_when_sections_are_empty() {
        let summary = LogSummary {
            total_lines: 1,
            address_counts: vec![],
            top_endpoint: TopEndpoint { endpoint: "None".into(), hits: 0 },
            flagged: vec![],
            threshold: 10,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        export_csv(&summary, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = written.lines().collect();
        assert_eq!(
            rows,
            vec![
                "IP Address,Request Count",
                "",
                "Most Accessed Endpoint",
                "Endpoint,Access Count",
                "None,0",
                "",
                "Suspicious Activity",
                "IP Address,Failed Login Count",
            ]
        );
    }

    #[test]
    fn csv_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does/not/exist.csv");
        let err = export_csv(&sample_summary(), &path).unwrap_err();
        assert!(matches!(err, ReportError::Csv { .. }));
    }

    #[test]
    fn json_export_round_trips_core_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        export_json(&sample_summary(), &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["total_lines"], 13);
        assert_eq!(json["top_endpoint"]["endpoint"], "/login");
        assert_eq!(json["flagged"][0]["address"], "10.0.0.1");
        assert_eq!(json["threshold"], 10);
    }
}
