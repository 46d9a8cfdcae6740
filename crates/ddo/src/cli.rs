//! CLI definition and the lookup handler

use anyhow::{Context, Result};
use clap::Parser;

use ddo::render::{render_json, render_lookup};
use ddo::{Client, Config, HttpTransport};

/// ddo - Den Danske Ordbog in the terminal
#[derive(Parser, Debug)]
#[command(name = "ddo")]
#[command(version)]
#[command(about = "Look up a word in Den Danske Ordbog")]
#[command(after_help = "\
EXAMPLES:
    ddo pære                   Show the entry for \"pære\"
    ddo fly --all              Show every matching entry in full
    ddo eksorbitant --json     Print the entry as JSON

SHELL COMPLETION:
    Completion suggests words from the dictionary as you type.
    Generate the script once and source it from your shell config:

    _DDO_COMPLETE=bash_source ddo > ~/.ddo-complete.bash
    _DDO_COMPLETE=zsh_source ddo > ~/.ddo-complete.zsh
    _DDO_COMPLETE=fish_source ddo > ~/.config/fish/completions/ddo.fish

EXIT CODES:
    0 found, 1 not found, 2 usage error, 3 network error,
    4 unreadable response, 5 any other failure")]
pub struct Cli {
    /// Word to look up
    pub word: String,

    /// Show every matching entry in full
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    pub timeout: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log requests and parsing to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Look the word up and print it
pub fn run(cli: &Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::default().with_timeout(cli.timeout);
    let transport = HttpTransport::new(&config)?;
    let client = Client::new(transport, config);

    let lookup = ddo::lookup(&client, &cli.word)?;

    if cli.json {
        let json = render_json(&lookup).context("Failed to serialize entry")?;
        println!("{}", json);
    } else {
        print!("{}", render_lookup(&lookup, cli.all));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_word_and_flags() {
        let cli = Cli::try_parse_from(["ddo", "pære", "--all", "--timeout", "3"]).unwrap();
        assert_eq!(cli.word, "pære");
        assert!(cli.all);
        assert!(!cli.json);
        assert_eq!(cli.timeout, 3);
    }

    #[test]
    fn test_word_is_required() {
        assert!(Cli::try_parse_from(["ddo"]).is_err());
    }

    #[test]
    fn test_single_word_only() {
        assert!(Cli::try_parse_from(["ddo", "to", "ord"]).is_err());
    }
}
