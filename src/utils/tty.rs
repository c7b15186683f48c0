//! Terminal prompting
//!
//! Prompts go to stderr so stdout stays clean for data.

use crate::error::{Result, ToolError};
use std::io::{self, BufRead, IsTerminal, Write};

pub fn is_stderr_tty() -> bool {
    io::stderr().is_terminal()
}

/// Print `message` and read one line from `input`
///
/// Returns `None` at end of input; otherwise the line without surrounding
/// whitespace.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}").map_err(ToolError::Output)?;
    output.flush().map_err(ToolError::Output)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| ToolError::file_system("read", "<stdin>", e))?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
