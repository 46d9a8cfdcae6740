//! ddo - Den Danske Ordbog in the terminal
//!
//! Looks words up in the Danish dictionary service at ws.dsl.dk and renders
//! the entry: definitions with examples and register tags, etymology,
//! pronunciation, inflections and related words. The live-search endpoint
//! drives shell tab-completion.
//!
//! Every invocation is one linear pass: fetch, parse, render.

pub mod completion;
pub mod config;
pub mod entry;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod render;
pub mod transport;

pub use config::Config;
pub use entry::{DictionaryEntry, Lookup, Sense, SuggestionList};
pub use error::LookupError;
pub use fetch::Client;
pub use transport::{HttpTransport, Response, Transport};

/// Fetch and parse the entry for `word`
pub fn lookup<T: Transport>(client: &Client<T>, word: &str) -> Result<Lookup, LookupError> {
    let page = client.page(word)?;
    let entries = parse::parse_entries(&page, word)?;
    Lookup::new(word, entries)
}

/// Fetch live-search candidates for `partial`. An empty partial word asks
/// for nothing.
pub fn suggest<T: Transport>(
    client: &Client<T>,
    partial: &str,
) -> Result<SuggestionList, LookupError> {
    if partial.trim().is_empty() {
        return Ok(SuggestionList::default());
    }

    let body = client.livesearch(partial)?;
    let candidates = parse::parse_suggestions(&body)?;
    Ok(SuggestionList::from_candidates(
        partial,
        candidates,
        client.config().suggestion_limit,
    ))
}
