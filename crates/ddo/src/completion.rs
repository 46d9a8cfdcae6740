//! Shell completion entry point
//!
//! Completion is a separate way of invoking the binary, selected by the
//! `_DDO_COMPLETE` variable before any argument parsing happens:
//!
//! ```bash
//! _DDO_COMPLETE=bash_source ddo > ~/.ddo-complete.bash   # once
//! _DDO_COMPLETE=complete COMP_WORDS="ddo eks" COMP_CWORD=1 ddo
//! ```
//!
//! The generated scripts call back with `complete`, and the binary answers
//! with the live-search suggestions for the word under the cursor, one per
//! line and unstyled.

use std::env;
use std::str::FromStr;

use tracing::debug;

use crate::entry::SuggestionList;
use crate::fetch::Client;
use crate::render::render_suggestions;
use crate::transport::Transport;

/// Variable that switches the binary into completion mode
pub const COMPLETE_VAR: &str = "_DDO_COMPLETE";

/// Shells with a generated completion script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    pub fn script(&self) -> &'static str {
        match self {
            Shell::Bash => BASH_SCRIPT,
            Shell::Zsh => ZSH_SCRIPT,
            Shell::Fish => FISH_SCRIPT,
        }
    }
}

impl FromStr for Shell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            other => Err(format!("unsupported shell: {}", other)),
        }
    }
}

/// What the shell asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionRequest {
    /// Print the completion script for a shell
    Source(Shell),
    /// Print suggestions for the partial word under the cursor
    Complete { incomplete: String },
}

impl CompletionRequest {
    /// Read the request from the process environment, if there is one
    pub fn from_env() -> Option<Self> {
        let mode = env::var(COMPLETE_VAR).ok()?;
        let words = env::var("COMP_WORDS").unwrap_or_default();
        let cword = env::var("COMP_CWORD").ok();
        Self::from_parts(&mode, &words, cword.as_deref())
    }

    /// `mode` is the value of `_DDO_COMPLETE`, `words` the command line and
    /// `cword` the index of the word being completed.
    pub fn from_parts(mode: &str, words: &str, cword: Option<&str>) -> Option<Self> {
        if mode == "complete" {
            return Some(CompletionRequest::Complete {
                incomplete: current_word(words, cword),
            });
        }

        match mode.strip_suffix("_source").map(Shell::from_str) {
            Some(Ok(shell)) => Some(CompletionRequest::Source(shell)),
            _ => {
                debug!(mode, "unrecognized completion mode");
                None
            }
        }
    }
}

/// The word under the cursor; empty when the cursor sits after a space
fn current_word(words: &str, cword: Option<&str>) -> String {
    let words: Vec<&str> = words.split_whitespace().collect();
    let index = cword
        .and_then(|c| c.trim().parse::<usize>().ok())
        .unwrap_or_else(|| words.len().saturating_sub(1));
    words.get(index).map(|w| w.to_string()).unwrap_or_default()
}

/// Suggestions for `incomplete`. Completion never fails loudly: any error
/// becomes an empty list.
pub fn suggestions<T: Transport>(client: &Client<T>, incomplete: &str) -> SuggestionList {
    if incomplete.starts_with('-') {
        return SuggestionList::default();
    }

    match crate::suggest(client, incomplete) {
        Ok(list) => list,
        Err(err) => {
            debug!(incomplete, error = %err, "completion lookup failed");
            SuggestionList::default()
        }
    }
}

/// Produce the stdout payload for a completion request
pub fn respond<T: Transport>(request: &CompletionRequest, client: &Client<T>) -> String {
    match request {
        CompletionRequest::Source(shell) => shell.script().to_string(),
        CompletionRequest::Complete { incomplete } => {
            render_suggestions(&suggestions(client, incomplete))
        }
    }
}

const BASH_SCRIPT: &str = r#"_ddo_completion() {
    local IFS=$'\n'
    COMPREPLY=($(env COMP_WORDS="${COMP_WORDS[*]}" COMP_CWORD="$COMP_CWORD" _DDO_COMPLETE=complete "$1"))
    return 0
}

complete -o nosort -F _ddo_completion ddo
"#;

const ZSH_SCRIPT: &str = r#"#compdef ddo

_ddo_completion() {
    local -a suggestions
    suggestions=(${(f)"$(env COMP_WORDS="${words[*]}" COMP_CWORD=$((CURRENT - 1)) _DDO_COMPLETE=complete ddo)"})
    compadd -U -V unsorted -a suggestions
}

compdef _ddo_completion ddo
"#;

const FISH_SCRIPT: &str = r#"function _ddo_completion
    set -l tokens (commandline -opc)
    set -l current (commandline -ct)
    env COMP_WORDS="$tokens $current" COMP_CWORD=(count $tokens) _DDO_COMPLETE=complete ddo
end

complete -c ddo -f -a "(_ddo_completion)"
"#;
