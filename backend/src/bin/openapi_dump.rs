//! Write the OpenAPI document as pretty-printed JSON.
//!
//! ```text
//! openapi-dump                       # to stdout
//! openapi-dump --output openapi.json # to a file
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use annapurna::ApiDoc;
use clap::Parser;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the AnnapurnaAI OpenAPI document")]
struct Args {
    /// Destination file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), String> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|err| format!("failed to serialise OpenAPI document: {err}"))?;
    match args.output {
        Some(path) => std::fs::write(&path, format!("{json}\n"))
            .map_err(|err| format!("failed to write {}: {err}", path.display())),
        None => writeln!(std::io::stdout().lock(), "{json}")
            .map_err(|err| format!("failed to write to stdout: {err}")),
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
