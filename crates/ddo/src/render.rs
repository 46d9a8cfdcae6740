//! Renderer: entries as styled terminal text, suggestions as plain lines

use colored::*;

use crate::entry::{DictionaryEntry, Lookup, Sense, SuggestionList};

pub const LABEL_SENSES: &str = "Betydninger";
pub const LABEL_ETYMOLOGY: &str = "Etymologi";
pub const LABEL_PHONETIC: &str = "Udtale";
pub const LABEL_INFLECTIONS: &str = "Bøjning";
pub const LABEL_SYNONYMS: &str = "Synonymer og relaterede ord";
pub const LABEL_OTHERS: &str = "Andre opslag";
pub const LABEL_EXAMPLE: &str = "Eksempel";

/// Render a lookup. Only the primary entry is shown in full unless `all` is
/// set; the remaining headwords are then listed on one line.
pub fn render_lookup(lookup: &Lookup, all: bool) -> String {
    if all {
        return lookup
            .entries()
            .iter()
            .map(render_entry)
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut out = render_entry(lookup.primary());
    if !lookup.others().is_empty() {
        let others: Vec<&str> = lookup
            .others()
            .iter()
            .map(|entry| entry.headword.as_str())
            .collect();
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            label(LABEL_OTHERS),
            others.join(", ")
        ));
    }
    out
}

/// Render a single entry. Sections without data are left out entirely.
pub fn render_entry(entry: &DictionaryEntry) -> String {
    let mut lines = vec![entry.headword.bold().cyan().to_string()];

    if let Some(ref pos) = entry.part_of_speech {
        lines.push(pos.italic().dimmed().to_string());
    }

    if !entry.senses.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}:", LABEL_SENSES).bold().underline().to_string());
        let mut top_level = 0;
        for sense in &entry.senses {
            if sense.depth == 0 {
                top_level += 1;
            }
            lines.extend(render_sense(sense, top_level));
        }
    }

    let mut sections = Vec::new();
    if let Some(ref etymology) = entry.etymology {
        sections.push(format!("{} {}", label(LABEL_ETYMOLOGY), etymology));
    }
    if let Some(ref phonetic) = entry.phonetic {
        sections.push(format!("{} {}", label(LABEL_PHONETIC), phonetic));
    }
    if !entry.inflections.is_empty() {
        sections.push(format!(
            "{} {}",
            label(LABEL_INFLECTIONS),
            entry.inflections.join(", ")
        ));
    }
    if !entry.synonyms.is_empty() {
        sections.push(format!(
            "{} {}",
            label(LABEL_SYNONYMS),
            entry.synonyms.join(", ")
        ));
    }
    if !sections.is_empty() {
        lines.push(String::new());
        lines.extend(sections);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// One line per suggestion, no styling, for the shell to consume
pub fn render_suggestions(suggestions: &SuggestionList) -> String {
    suggestions.iter().map(|s| format!("{}\n", s)).collect()
}

/// Pretty JSON of every matched entry
pub fn render_json(lookup: &Lookup) -> serde_json::Result<String> {
    serde_json::to_string_pretty(lookup)
}

fn render_sense(sense: &Sense, ordinal: usize) -> Vec<String> {
    let indent = "  ".repeat(sense.depth);

    let number = match (&sense.level, sense.depth) {
        (Some(level), _) => level.clone(),
        (None, 0) => ordinal.to_string(),
        (None, _) => "-".to_string(),
    };

    let mut line = format!("{}{}", indent, number.green());
    if !sense.definition.is_empty() {
        line.push(' ');
        line.push_str(&sense.definition);
    }
    if let Some(ref style) = sense.style {
        line.push_str(&format!(" {}", format!("[{}]", style).italic()));
    }

    let mut lines = vec![line];
    if let Some(ref example) = sense.example {
        lines.push(format!(
            "{}  {}",
            indent,
            format!("{}: {}", LABEL_EXAMPLE, example).dimmed().italic()
        ));
    }
    lines
}

fn label(name: &str) -> ColoredString {
    format!("{}:", name).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn bare_entry() -> DictionaryEntry {
        let mut entry = DictionaryEntry::new("eksorbitant");
        entry.senses.push(Sense {
            definition: "meget stor".to_string(),
            ..Default::default()
        });
        entry
    }

    fn full_entry() -> DictionaryEntry {
        DictionaryEntry {
            headword: "eksorbitant".to_string(),
            part_of_speech: Some("adjektiv".to_string()),
            senses: vec![
                Sense {
                    level: Some("1".to_string()),
                    definition: "meget stor".to_string(),
                    example: Some("eksorbitante priser".to_string()),
                    style: Some("formelt".to_string()),
                    depth: 0,
                },
                Sense {
                    level: Some("1.a".to_string()),
                    definition: "urimelig høj".to_string(),
                    depth: 1,
                    ..Default::default()
                },
            ],
            etymology: Some("fra latin exorbitans".to_string()),
            phonetic: Some("[ɛgsɒbiˈtanˀd]".to_string()),
            inflections: vec!["-e".to_string(), "-ere".to_string()],
            synonyms: vec!["enorm".to_string(), "voldsom".to_string()],
        }
    }

    #[test]
    fn test_title_then_numbered_definitions() {
        plain();
        let out = render_entry(&bare_entry());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "eksorbitant");
        assert_eq!(lines[2], "Betydninger:");
        assert_eq!(lines[3], "1 meget stor");
    }

    #[test]
    fn test_absent_fields_leave_no_headers() {
        plain();
        let out = render_entry(&bare_entry());
        for section in [
            LABEL_ETYMOLOGY,
            LABEL_PHONETIC,
            LABEL_INFLECTIONS,
            LABEL_SYNONYMS,
            LABEL_EXAMPLE,
        ] {
            assert!(!out.contains(section), "unexpected {} in:\n{}", section, out);
        }
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn test_headword_only_entry() {
        plain();
        let out = render_entry(&DictionaryEntry::new("hus"));
        assert_eq!(out, "hus\n");
    }

    #[test]
    fn test_every_section_exactly_once() {
        plain();
        let out = render_entry(&full_entry());
        for section in [
            LABEL_SENSES,
            LABEL_ETYMOLOGY,
            LABEL_PHONETIC,
            LABEL_INFLECTIONS,
            LABEL_SYNONYMS,
        ] {
            let header = format!("{}:", section);
            assert_eq!(out.matches(&header).count(), 1, "{} in:\n{}", header, out);
        }
    }

    #[test]
    fn test_sense_layout() {
        plain();
        let out = render_entry(&full_entry());
        assert!(out.contains("1 meget stor [formelt]\n"));
        assert!(out.contains("  Eksempel: eksorbitante priser\n"));
        assert!(out.contains("  1.a urimelig høj\n"));
        assert!(out.contains("Bøjning: -e, -ere\n"));
        assert!(out.contains("Synonymer og relaterede ord: enorm, voldsom\n"));
    }

    #[test]
    fn test_unlabelled_senses_are_numbered() {
        plain();
        let mut entry = DictionaryEntry::new("hus");
        for (definition, depth) in [("bygning", 0), ("del", 1), ("familie", 0)] {
            entry.senses.push(Sense {
                definition: definition.to_string(),
                depth,
                ..Default::default()
            });
        }
        let out = render_entry(&entry);
        assert!(out.contains("\n1 bygning\n"));
        assert!(out.contains("\n  - del\n"));
        assert!(out.contains("\n2 familie\n"));
    }

    #[test]
    fn test_provider_and_fallback_numbering_match() {
        plain();
        let mut entry = DictionaryEntry::new("hus");
        entry.senses.push(Sense {
            level: Some("1".to_string()),
            definition: "bygning".to_string(),
            ..Default::default()
        });
        let labelled = render_entry(&entry);

        entry.senses[0].level = None;
        let unlabelled = render_entry(&entry);

        assert_eq!(labelled, unlabelled);
        assert!(labelled.contains("\n1 bygning\n"));
    }

    #[test]
    fn test_lookup_lists_other_matches() {
        plain();
        let lookup = Lookup::new(
            "fly",
            vec![
                DictionaryEntry::new("fly"),
                DictionaryEntry::new("flyve"),
                DictionaryEntry::new("flyer"),
            ],
        )
        .unwrap();

        let out = render_lookup(&lookup, false);
        assert!(out.starts_with("fly\n"));
        assert!(out.ends_with("Andre opslag: flyve, flyer\n"));

        let all = render_lookup(&lookup, true);
        assert!(!all.contains(LABEL_OTHERS));
        assert_eq!(all, "fly\n\nflyve\n\nflyer\n");
    }

    #[test]
    fn test_suggestions_are_plain_lines() {
        let list = SuggestionList::from_candidates(
            "eks",
            vec!["eksorbitant".to_string(), "eksotisk".to_string()],
            30,
        );
        assert_eq!(render_suggestions(&list), "eksorbitant\neksotisk\n");
        assert_eq!(render_suggestions(&SuggestionList::default()), "");
    }

    #[test]
    fn test_json_output() {
        let lookup = Lookup::new("hus", vec![DictionaryEntry::new("hus")]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&lookup).unwrap()).unwrap();
        assert_eq!(json["word"], "hus");
        assert_eq!(json["entries"][0]["headword"], "hus");
        assert!(json["entries"][0]["etymology"].is_null());
    }
}
