//! Document Templates CLI
//!
//! Usage:
//!   document-templates <DOCUMENT_TOKEN> <RECORD_TOKEN>
//!
//! Options:
//!   -j, --json    Emit the resolved descriptor as JSON
//!   --report      Print the exhaustive combination report
//!   -h, --help    Print help
//!
//! This binary is a thin caller over the resolution engine, in the role the
//! surrounding service layer normally plays: it passes the two tokens
//! through unchanged and maps success and failure to stdout/stderr and the
//! exit code.

use clap::Parser;

use document_templates::{combination_report, resolve_template};

#[derive(Parser)]
#[command(name = "document-templates")]
#[command(about = "Resolve document and record category tokens to a template descriptor")]
struct Cli {
    /// Document category token (e.g. GLPP)
    document_token: Option<String>,

    /// Record category token (e.g. INDIVIDUAL_PROSPECT)
    record_token: Option<String>,

    /// Emit the resolved descriptor as JSON
    #[arg(short, long)]
    json: bool,

    /// Print the exhaustive combination report and exit
    #[arg(long)]
    report: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.report {
        print!("{}", combination_report());
        return;
    }

    let (document_token, record_token) = match (&cli.document_token, &cli.record_token) {
        (Some(document), Some(record)) => (document, record),
        _ => {
            eprintln!("Usage: document-templates <DOCUMENT_TOKEN> <RECORD_TOKEN>");
            std::process::exit(2);
        }
    };

    match resolve_template(document_token, record_token) {
        Ok(descriptor) => {
            if cli.json {
                match serde_json::to_string_pretty(descriptor) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", descriptor);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
