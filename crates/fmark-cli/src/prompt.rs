//! Interactive prompts

use anyhow::Result;
use std::io::{self, Write};

/// Ask for confirmation (y/n)
///
/// A non-TTY stdin declines, so scripted runs never hang on a prompt.
pub fn confirm(prompt: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
