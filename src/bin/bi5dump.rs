//! bi5 archive dump
//!
//! Usage: `bi5dump <root> <SYMBOL/YYYY/MM/DD/HHh_ticks.bi5>`
//!
//! Prints every tick as a CSV row, then a record-count summary. Set
//! `RUST_LOG=debug` for loader diagnostics on stderr.

use bi5::{read_archive_at, ArchivePath, CSV_HEADER, ROW_SIZE};
use std::path::Path;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (root, relative) = match args.as_slice() {
        [_, root, relative] => (root, relative),
        _ => {
            eprintln!("Usage: bi5dump <root> <SYMBOL/YYYY/MM/DD/HHh_ticks.bi5>");
            return ExitCode::from(2);
        }
    };

    let archive = match ArchivePath::parse(Path::new(relative)) {
        Ok(archive) => archive,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    let data = match read_archive_at(root, &archive) {
        Ok(data) => data,
        Err(e) => {
            error!(archive = %archive, "failed to load archive: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if !data.is_consistent() {
        error!(
            "loaded {} ticks but raw size indicates {}",
            data.ticks.len(),
            data.raw_size / ROW_SIZE
        );
        return ExitCode::FAILURE;
    }

    println!("{}", CSV_HEADER);
    for tick in &data.ticks {
        println!("{}", tick);
    }

    eprintln!(
        "Read {} records from {} ({} raw bytes / {} = {})",
        data.ticks.len(),
        archive,
        data.raw_size,
        ROW_SIZE,
        data.raw_size / ROW_SIZE
    );
    ExitCode::SUCCESS
}
