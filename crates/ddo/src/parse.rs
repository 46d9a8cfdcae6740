//! Parser/Mapper: provider responses into display records
//!
//! The entry page is an HTML fragment where every field is a `<span>` with a
//! well-known class. Each field is extracted independently; a missing field
//! is simply absent in the record. The class names are owned by the provider
//! and are the part of this crate most likely to need maintenance.

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::entry::{DictionaryEntry, Sense};
use crate::error::LookupError;

const ENTRY: &str = "ar";
const HEAD: &str = "head";
const HEADWORD: &str = "k";
const PART_OF_SPEECH: &str = "pos";
const PHONETIC: &str = "phon";
const INFLECTION: &str = "m";
const DEFINITION: &str = "def";
const ETYMOLOGY: &str = "etym";
const LEVEL: &str = "l";
const DEFINITION_TEXT: &str = "dtrn";
const STYLE: &str = "style";
const EXAMPLE: &str = "ex";
const ONYMS: &str = "onyms";

/// Classes whose presence marks a `span.ar` as a real entry
const ENTRY_FIELDS: [&str; 5] = [HEAD, PART_OF_SPEECH, DEFINITION, PHONETIC, INFLECTION];

/// Parse an entry page into its entries, in page order.
///
/// A page without entry elements yields an empty list (the provider's answer
/// for unknown words). Entry elements that carry none of the known fields are
/// skipped; if that leaves nothing, the markup is not what we expect.
pub fn parse_entries(html: &str, requested: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
    let document = Html::parse_document(html);

    let candidates: Vec<ElementRef> = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_span(*el, ENTRY))
        .collect();

    if candidates.is_empty() {
        debug!(requested, "no entry elements in page");
        return Ok(Vec::new());
    }

    let total = candidates.len();
    let entries: Vec<DictionaryEntry> = candidates
        .into_iter()
        .filter(|ar| {
            let recognized = ENTRY_FIELDS.iter().any(|class| find(*ar, class).is_some());
            if !recognized {
                warn!(requested, "skipping entry element with no recognizable fields");
            }
            recognized
        })
        .map(|ar| parse_entry(ar, requested))
        .collect();

    if entries.is_empty() {
        return Err(LookupError::Parse(format!(
            "{} entry element(s) found but none had a headword, part of speech or definition",
            total
        )));
    }

    debug!(requested, count = entries.len(), "parsed entries");
    Ok(entries)
}

/// Parse the live-search body: a JSON array of words
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, LookupError> {
    serde_json::from_str(body)
        .map_err(|e| LookupError::Parse(format!("live-search response is not a word list: {}", e)))
}

fn parse_entry(ar: ElementRef, requested: &str) -> DictionaryEntry {
    let headword = find(ar, HEAD)
        .and_then(|head| find(head, HEADWORD))
        .map(text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| requested.to_string());

    let mut entry = DictionaryEntry::new(headword);
    entry.part_of_speech = find(ar, PART_OF_SPEECH).map(text).filter(|s| !s.is_empty());
    entry.phonetic = find(ar, PHONETIC).map(spaced_text).filter(|s| !s.is_empty());
    entry.inflections = find(ar, INFLECTION)
        .map(|m| split_inflections(&text(m)))
        .unwrap_or_default();

    if let Some(container) = find(ar, DEFINITION) {
        entry.etymology = find(container, ETYMOLOGY).map(text).filter(|s| !s.is_empty());

        let mut synonyms = Vec::new();
        parse_senses(container, 0, &mut entry.senses, &mut synonyms);

        let headword = entry.headword.to_lowercase();
        for synonym in synonyms {
            if synonym.to_lowercase() != headword && !entry.synonyms.contains(&synonym) {
                entry.synonyms.push(synonym);
            }
        }
    }

    entry
}

/// Walk the `span.def` children of `container`, depth-first, flattening
/// nested senses into `senses` and collecting related words into `synonyms`.
fn parse_senses(
    container: ElementRef,
    depth: usize,
    senses: &mut Vec<Sense>,
    synonyms: &mut Vec<String>,
) {
    let children = container
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_span(*el, DEFINITION));

    for def in children {
        let level = find_own(def, LEVEL).map(text).filter(|s| !s.is_empty());
        let (definition, style) = find_own(def, DEFINITION_TEXT)
            .map(definition_and_style)
            .unwrap_or_default();
        let example = find_own(def, EXAMPLE).map(text).filter(|s| !s.is_empty());

        let mut onyms = Vec::new();
        collect_own(def, &|el| has_class_containing(el, ONYMS), &mut onyms);
        for group in onyms {
            let words = group
                .descendants()
                .filter_map(ElementRef::wrap)
                .filter(|el| is_span(*el, HEADWORD))
                .map(text)
                .filter(|s| !s.is_empty());
            synonyms.extend(words);
        }

        if level.is_some() || !definition.is_empty() || example.is_some() {
            senses.push(Sense {
                level,
                definition,
                example,
                style,
                depth,
            });
        }

        parse_senses(def, depth + 1, senses, synonyms);
    }
}

/// Split the definition text from its leading register tag
fn definition_and_style(dtrn: ElementRef) -> (String, Option<String>) {
    let full = text(dtrn);
    let style = find(dtrn, STYLE).map(text).filter(|s| !s.is_empty());

    let definition = match &style {
        Some(tag) => match full.strip_prefix(tag.as_str()) {
            Some(rest) => rest.trim().to_string(),
            None => normalize(&full.replacen(tag.as_str(), "", 1)),
        },
        None => full,
    };

    (definition, style)
}

fn split_inflections(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_span(el: ElementRef, class: &str) -> bool {
    el.value().name() == "span" && el.value().classes().any(|c| c == class)
}

fn has_class_containing(el: ElementRef, fragment: &str) -> bool {
    el.value().name() == "span" && el.value().classes().any(|c| c.contains(fragment))
}

/// First `span.<class>` strictly below `root`
fn find<'a>(root: ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| is_span(*el, class))
}

/// First `span.<class>` below a sense, not descending into nested senses
fn find_own<'a>(root: ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    for child in root.children().filter_map(ElementRef::wrap) {
        if is_span(child, DEFINITION) {
            continue;
        }
        if is_span(child, class) {
            return Some(child);
        }
        if let Some(found) = find_own(child, class) {
            return Some(found);
        }
    }
    None
}

/// Every element below a sense matching `pred`, not descending into nested senses
fn collect_own<'a>(
    root: ElementRef<'a>,
    pred: &dyn Fn(ElementRef<'a>) -> bool,
    out: &mut Vec<ElementRef<'a>>,
) {
    for child in root.children().filter_map(ElementRef::wrap) {
        if is_span(child, DEFINITION) {
            continue;
        }
        if pred(child) {
            out.push(child);
        } else {
            collect_own(child, pred, out);
        }
    }
}

/// Text content with whitespace runs collapsed
fn text(el: ElementRef) -> String {
    normalize(&el.text().collect::<String>())
}

/// Text content with each text node trimmed and the nodes joined by a space
fn spaced_text(el: ElementRef) -> String {
    el.text()
        .map(normalize)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
