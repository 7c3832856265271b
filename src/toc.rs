use serde::{Deserialize, Serialize};

use crate::formats::{BookEntry, EntryKind, TocEntry};

/// Which entry list the table of contents reads page numbers from. The two
/// differ once blank pages have been inserted for print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TocSource {
    #[default]
    Planned,
    Print,
}

impl std::str::FromStr for TocSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "print" => Ok(Self::Print),
            _ => Err(format!("unknown toc source: {s} (expected planned or print)")),
        }
    }
}

pub fn build_table_of_contents(entries: &[BookEntry]) -> Vec<TocEntry> {
    let mut toc = entries
        .iter()
        .filter(|entry| entry.entry_type().listed_in_toc())
        .map(toc_entry)
        .collect::<Vec<_>>();

    toc.sort_by_key(|entry| (entry.category, entry.page_number));
    toc
}

fn toc_entry(entry: &BookEntry) -> TocEntry {
    let entry_type = entry.entry_type();
    let title = if entry.title.trim().is_empty() {
        entry_type.default_title().to_owned()
    } else {
        entry.title.clone()
    };

    let mut toc = TocEntry {
        title,
        page_number: entry.page_number,
        entry_type,
        category: entry.category,
        subtitle: None,
        activity_count: None,
        highlight: false,
    };

    match &entry.kind {
        EntryKind::MonthlyDivider {
            year,
            activity_count,
            ..
        } => {
            toc.subtitle = Some(year.to_string());
            toc.activity_count = Some(*activity_count);
        }
        EntryKind::RacePage {
            race_distance,
            is_a_race,
            ..
        } => {
            toc.subtitle = Some(race_distance.label().to_owned());
            toc.highlight = *is_a_race;
        }
        _ => {}
    }

    toc
}
