//! Outline output for the non-interactive modes.

use anchornav::Document;
use anchornav::adapter::Anchor;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutlineJson<'a> {
    activation_offset: f64,
    entries: Vec<EntryJson<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryJson<'a> {
    id: &'a str,
    level: &'a str,
    text: &'a str,
    href: String,
    font_size: &'a str,
    font_weight: &'a str,
    offset: f64,
}

pub fn outline_json(anchor: &Anchor) -> serde_json::Value {
    let outline = OutlineJson {
        activation_offset: anchor.core().activation_offset(),
        entries: anchor
            .entries()
            .iter()
            .map(|entry| EntryJson {
                id: &entry.id,
                level: entry.level.as_str(),
                text: &entry.text,
                href: anchor.href(&entry.id),
                font_size: &entry.font_size,
                font_weight: &entry.font_weight,
                offset: entry.offset,
            })
            .collect(),
    };

    serde_json::json!({ "outline": outline })
}

pub fn outline_plain(anchor: &Anchor) -> String {
    let mut out = String::new();
    for entry in anchor.entries() {
        let depth = entry.level.level().unwrap_or(1).saturating_sub(1);
        out.push_str(&format!(
            "{}{}  {}  [{} {} {}] {}px\n",
            "  ".repeat(depth),
            entry.text,
            anchor.href(&entry.id),
            entry.level,
            entry.font_size,
            entry.font_weight,
            entry.offset
        ));
    }
    out
}

/// `h1: 2`-style lines followed by the total.
pub fn heading_counts(document: &Document) -> String {
    let counts = document.heading_count_by_level();
    let mut out = String::new();
    for (level, count) in &counts {
        out.push_str(&format!("h{}: {}\n", level, count));
    }
    out.push_str(&format!("total: {}\n", counts.values().sum::<usize>()));
    out
}
