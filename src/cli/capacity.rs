//! Capacity command implementation.

use std::path::PathBuf;

use anyhow::{Result, bail};
use rayon::prelude::*;
use serde::Serialize;

use super::args::CapacityArgs;
use super::common::{load_svg, plural_count};
use crate::log;
use crate::stego::{CapacityReport, capacity_report};

/// Capacity of a single file
#[derive(Debug, Serialize)]
pub struct FileCapacity {
    pub path: String,
    #[serde(flatten)]
    pub report: CapacityReport,
}

/// Execute capacity command
pub fn run_capacity(args: &CapacityArgs) -> Result<()> {
    let (reports, failed) = analyze_files(&args.inputs);

    if args.json {
        let formatted = if args.pretty {
            serde_json::to_string_pretty(&reports)?
        } else {
            serde_json::to_string(&reports)?
        };
        println!("{formatted}");
    } else {
        for entry in &reports {
            println!("{}", format_report(entry));
        }
    }

    if args.inputs.len() > 1 {
        let slots: usize = reports.iter().map(|entry| entry.report.slots).sum();
        log!("capacity"; "{} across {}", plural_count(slots, "slot"), plural_count(reports.len(), "file"));
    }
    if failed > 0 {
        bail!("failed to analyze {}", plural_count(failed, "file"));
    }
    Ok(())
}

/// Analyze inputs in parallel. Failures are logged and counted.
fn analyze_files(inputs: &[PathBuf]) -> (Vec<FileCapacity>, usize) {
    let results: Vec<_> = inputs
        .par_iter()
        .map(|path| {
            load_svg(path).map(|doc| FileCapacity {
                path: path.display().to_string(),
                report: capacity_report(&doc),
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    let mut failed = 0;
    for result in results {
        match result {
            Ok(entry) => reports.push(entry),
            Err(e) => {
                failed += 1;
                log!("error"; "{:#}", e);
            }
        }
    }
    (reports, failed)
}

fn format_report(entry: &FileCapacity) -> String {
    let report = &entry.report;
    format!(
        "{}: {} in {} ({}), up to {}",
        entry.path,
        plural_count(report.slots, "slot"),
        plural_count(report.elements, "element"),
        plural_count(report.attributes, "attribute"),
        plural_count(report.max_message_len, "character"),
    )
}
