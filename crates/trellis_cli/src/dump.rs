//! `trellis dump` — re-render a configuration in normalized form.

use trellis_config::OutputFormat;
use trellis_db::{ChipConfig, WriteOptions};

use crate::pipeline::{describe_failure, load_chip, load_tool_config, write_output};
use crate::{DumpArgs, DumpFormat, GlobalArgs};

/// Runs the `trellis dump` command.
///
/// The `--format` flag overrides `output.format` from `trellis.toml`.
pub fn run(args: &DumpArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_tool_config(global)?;

    let chip = match load_chip(&args.input) {
        Ok(chip) => chip,
        Err(e) => {
            eprintln!("error: {}", describe_failure(&args.input, &e));
            return Ok(1);
        }
    };

    let format = args.format.unwrap_or(match config.output.format {
        OutputFormat::Text => DumpFormat::Text,
        OutputFormat::Json => DumpFormat::Json,
    });
    let options = WriteOptions {
        values_per_line: config.output.bram_values_per_line,
    };
    let text = render(&chip, format, &options)?;
    write_output(args.output.as_deref(), &text)?;

    if !global.quiet {
        if let Some(path) = &args.output {
            eprintln!("   Wrote {path}");
        }
    }
    Ok(0)
}

fn render(
    chip: &ChipConfig,
    format: DumpFormat,
    options: &WriteOptions,
) -> Result<String, serde_json::Error> {
    match format {
        DumpFormat::Text => Ok(chip.to_text(options)),
        DumpFormat::Json => {
            let mut json = serde_json::to_string_pretty(chip)?;
            json.push('\n');
            Ok(json)
        }
    }
}
