//! `trellis events` — stream the parser's callbacks to standard output.

use std::io::{self, Write};

use trellis_conf::{read_conf, ActionError, ActionResult, ConfEvent, EventHandler};

use crate::pipeline::open_input;
use crate::{EventsArgs, GlobalArgs};

/// Writes each event as soon as the parser delivers it.
struct EventPrinter<W> {
    out: W,
    json: bool,
    count: usize,
}

impl<W: Write> EventHandler for EventPrinter<W> {
    fn handle(&mut self, event: ConfEvent) -> ActionResult {
        let line = if self.json {
            serde_json::to_string(&event).map_err(|e| ActionError::new(e.to_string()))?
        } else {
            event.to_string()
        };
        writeln!(self.out, "{line}")
            .map_err(|e| ActionError::new(format!("failed to write event: {e}")))?;
        self.count += 1;
        Ok(())
    }
}

/// Runs the `trellis events` command.
///
/// Events already printed stay printed when a later record fails; the
/// failure is reported on stderr and the exit code is 1.
pub fn run(args: &EventsArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let input = match open_input(&args.input) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {}", describe_open_failure(&args.input, &e));
            return Ok(1);
        }
    };
    let mut printer = EventPrinter {
        out: io::stdout().lock(),
        json: args.json,
        count: 0,
    };
    let result = read_conf(&mut printer, input);
    printer.out.flush()?;

    match result {
        Ok(()) => {
            if !global.quiet {
                eprintln!("   {} event(s)", printer.count);
            }
            Ok(0)
        }
        Err(e) => {
            eprintln!("error: {}: {e}", args.input);
            Ok(1)
        }
    }
}

/// Formats an input that could not be opened as `<input>: <message>`.
fn describe_open_failure(input: &str, err: &io::Error) -> String {
    format!("{input}: {err}")
}
