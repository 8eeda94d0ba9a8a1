use crate::modules::post::post_dtos::PostId;
use clap::{Parser, Subcommand};

/// One line typed by the user.
///
/// The first word names the command; `help` and `help <command>` are generated.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Set the post title (no text clears it)
    Title {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Set the post description (no text clears it)
    #[command(alias = "desc")]
    Description {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Create the post
    Submit,
    /// Delete a post
    Delete { id: PostId },
    /// Reload the list
    Refresh,
    /// Leave once the requests still running have settled
    #[command(alias = "exit")]
    Quit,
}

/// Parses a terminal line.
///
/// Words are split on whitespace, so field text is stored with single spaces.
///
/// # Example
///
/// ```rust
/// use post_wall::modules::terminal::terminal_commands::{parse_command, Command};
///
/// assert_eq!(parse_command("delete 3").unwrap(), Command::Delete { id: 3 });
/// ```
pub fn parse_command(line: &str) -> Result<Command, clap::Error> {
    let line = CommandLine::try_parse_from(line.split_whitespace())?;
    Ok(line.command)
}

/// Text of a `title`/`description` command.
pub fn field_text(words: &[String]) -> String {
    words.join(" ")
}
