//! Read-eval loop

use crate::commands::{parse_input, CommandRegistry, Input};
use crate::error::Result;
use crate::session::{Flow, Session};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

const PROMPT: &str = "Pokedex > ";

/// Read commands from `input` until `exit` or end of input
///
/// Command failures are reported to the user and the loop keeps going;
/// only I/O errors on `input`/`out` end it early.
pub async fn run<R, W>(
    registry: &CommandRegistry,
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match parse_input(registry, &line) {
            Input::Empty => writeln!(out, "No command entered. Type 'help' for options.")?,
            Input::Unknown => writeln!(out, "Unknown command. Type 'help' for options")?,
            Input::TooManyArguments => {
                writeln!(out, "Enter a valid name. Type 'help' for options.")?
            }
            Input::Run { command, arg } => {
                match session.execute(registry, command, arg.as_deref(), out).await {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => break,
                    Err(e) => {
                        warn!(command = command.name, error = %e, "Command failed");
                        writeln!(out, "Error: {}", e)?;
                    }
                }
            }
        }
    }

    Ok(())
}
