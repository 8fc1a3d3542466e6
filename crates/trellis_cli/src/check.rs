//! `trellis check` — parse a configuration and report what it contains.

use trellis_db::ChipConfig;

use crate::pipeline::{describe_failure, load_chip, load_tool_config};
use crate::{CheckArgs, GlobalArgs};

/// Runs the `trellis check` command.
///
/// Returns exit code 0 if the input parses cleanly and satisfies the
/// `[check]` requirements, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_tool_config(global)?;

    let chip = match load_chip(&args.input) {
        Ok(chip) => chip,
        Err(e) => {
            eprintln!("error: {}", describe_failure(&args.input, &e));
            return Ok(1);
        }
    };

    if config.check.require_device && chip.device.is_none() {
        eprintln!("error: {}: no .device entry", args.input);
        return Ok(1);
    }

    if !global.quiet {
        println!("{}", summary(&args.input, &chip));
    }
    Ok(0)
}

/// Formats the one-line summary printed on success.
fn summary(input: &str, chip: &ChipConfig) -> String {
    let stats = chip.stats();
    format!(
        "{input}: device {}, {} tile(s), {} arc(s), {} word(s), {} enum(s), {} unknown bit(s), {} bram(s) / {} row(s)",
        chip.device.as_deref().unwrap_or("<none>"),
        stats.tiles,
        stats.arcs,
        stats.words,
        stats.enums,
        stats.unknowns,
        stats.brams,
        stats.bram_rows,
    )
}
