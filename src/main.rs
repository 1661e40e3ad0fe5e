mod analyzer;
mod extract;
mod report;
mod source;

use clap::Parser;
use std::path::PathBuf;

/// A CLI tool that summarizes web server access logs and flags brute-force
/// login sources
#[derive(Parser, Debug)]
#[command(
    name = "logsift",
    author,
    version,
    about = "Summarizes web server access logs and flags brute-force login sources"
)]
struct Args {
    /// Path to the access log to analyze
    #[arg(value_name = "LOG_FILE", default_value = "sample.log")]
    file: PathBuf,

    /// Failed-login threshold — IPs exceeding this will be flagged
    #[arg(
        short = 't',
        long = "threshold",
        default_value_t = analyzer::DEFAULT_THRESHOLD,
        value_name = "COUNT"
    )]
    threshold: usize,

    /// Path of the CSV record file
    #[arg(
        short = 'o',
        long = "output",
        default_value = "log_analysis_results.csv",
        value_name = "CSV_FILE"
    )]
    output: PathBuf,

    /// Export the summary as JSON to the specified file path
    #[arg(short = 'j', long = "json-output", value_name = "OUTPUT_FILE")]
    json_output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // Missing, unreadable, and empty inputs all abort before aggregation,
    // without producing an output file.
    let lines = match source::read_lines(&args.file) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let summary = analyzer::analyze(&lines, args.threshold);

    report::print_report(&summary, &args.file);

    // The CSV record is always written, even when every aggregate is empty.
    if let Err(e) = report::export_csv(&summary, &args.output) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    println!("Results saved to '{}'", args.output.display());

    if let Some(json_path) = &args.json_output {
        match report::export_json(&summary, json_path) {
            Ok(()) => println!("✓ JSON report saved to '{}'", json_path.display()),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
