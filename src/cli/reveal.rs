//! Reveal command implementation.
//!
//! Inputs are decoded in parallel; results are printed in input order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use super::args::RevealArgs;
use super::common::{load_svg, plural_count};
use crate::config::StegoConfig;
use crate::logger::ProgressLine;
use crate::stego::{DigitPolicy, reveal_with_policy};
use crate::{debug, log};

/// Execute reveal command
pub fn run_reveal(args: &RevealArgs, config: &StegoConfig) -> Result<()> {
    let policy = config.codec.digits;
    debug!("reveal"; "digit policy: {:?}", policy);

    let results = reveal_files(&args.inputs, policy);
    let labelled = args.inputs.len() > 1;
    let mut failed = 0;

    for (path, result) in args.inputs.iter().zip(results) {
        match result {
            Ok(message) if labelled => println!("{}: {}", path.display(), message),
            Ok(message) => println!("{message}"),
            Err(e) => {
                failed += 1;
                log!("error"; "{:#}", e);
            }
        }
    }

    if labelled {
        log!("reveal"; "read {} of {}", args.inputs.len() - failed, plural_count(args.inputs.len(), "file"));
    }
    if failed > 0 {
        bail!("failed to reveal {}", plural_count(failed, "file"));
    }
    Ok(())
}

/// Decode every input in parallel, keeping input order.
fn reveal_files(inputs: &[PathBuf], policy: DigitPolicy) -> Vec<Result<String>> {
    if inputs.len() == 1 {
        return vec![reveal_file(&inputs[0], policy)];
    }

    let progress = ProgressLine::new(&[("svg", inputs.len())]);
    let results = inputs
        .par_iter()
        .map(|path| {
            let result = reveal_file(path, policy);
            progress.inc("svg");
            result
        })
        .collect();
    progress.finish();
    results
}

fn reveal_file(path: &Path, policy: DigitPolicy) -> Result<String> {
    let doc = load_svg(path)?;
    reveal_with_policy(&doc, policy).with_context(|| format!("cannot reveal {}", path.display()))
}
