//! Shared helpers for CLI commands: input opening, tool configuration
//! lookup, and output writing.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::debug;
use trellis_config::ToolConfig;
use trellis_db::{ChipConfig, DbError};

use crate::GlobalArgs;

/// Opens `input` for buffered reading; `-` selects standard input.
pub fn open_input(input: &str) -> io::Result<Box<dyn BufRead>> {
    if input == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(input)?)))
    }
}

/// Opens and parses `input` into a [`ChipConfig`].
pub fn load_chip(input: &str) -> Result<ChipConfig, DbError> {
    debug!("loading {input}");
    let reader = open_input(input)?;
    ChipConfig::from_reader(reader)
}

/// Loads the tool configuration named by `--config`, or `./trellis.toml`
/// if present, or the defaults.
pub fn load_tool_config(global: &GlobalArgs) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let config = match &global.config {
        Some(path) => trellis_config::load_config(Path::new(path))?,
        None => trellis_config::load_config_or_default(&std::env::current_dir()?)?,
    };
    debug!("tool configuration: {config:?}");
    Ok(config)
}

/// Writes `text` to the file at `output`, or to standard output.
pub fn write_output(output: Option<&str>, text: &str) -> io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, text),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()
        }
    }
}

/// Formats a load failure as `<input>: <message>`.
pub fn describe_failure(input: &str, err: &DbError) -> String {
    format!("{input}: {err}")
}
