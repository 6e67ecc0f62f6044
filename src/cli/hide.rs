//! Hide command implementation.

use anyhow::{Context, Result};

use super::args::HideArgs;
use super::common::{derive_output_path, load_svg, plural_count, read_message, write_output};
use crate::config::StegoConfig;
use crate::stego::{capacity_report, hide_in_universal};
use crate::{debug, debug_do, log};

/// Execute hide command
pub fn run_hide(args: &HideArgs, config: &StegoConfig) -> Result<()> {
    let mut doc = load_svg(&args.input)?;
    let message = read_message(args.message.as_deref(), args.message_file.as_deref())?;

    debug_do! {
        let report = capacity_report(&doc);
        let len = message.chars().count();
        debug!("hide"; "{}: {} slots, room for {}, message of {} {}",
            args.input.display(), report.slots, plural_count(report.max_message_len, "character"),
            plural_count(len, "character"), if report.fits(len) { "fits" } else { "does not fit" });
    }

    let stego = hide_in_universal(&mut doc, &message)
        .with_context(|| format!("cannot hide message in {}", args.input.display()))?;

    if args.to_stdout() {
        print!("{stego}");
        return Ok(());
    }

    let path = match &args.output {
        Some(path) => path.clone(),
        None => derive_output_path(&args.input, &config.output),
    };
    write_output(&path, &stego, config.output.overwrite)?;

    log!("hide"; "hid {} in {}", plural_count(message.chars().count(), "character"), path.display());
    Ok(())
}
