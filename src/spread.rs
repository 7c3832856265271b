use crate::formats::{BookEntry, EntryKind};

/// Renumbers from page 1 so recto kinds land on odd pages. Idempotent.
pub fn insert_blank_pages_for_print(entries: &[BookEntry]) -> Vec<BookEntry> {
    let mut page = 1_u32;
    let mut adjusted = Vec::with_capacity(entries.len());
    let mut blanks = 0_usize;

    for entry in entries {
        if entry.entry_type().requires_recto() && page % 2 == 0 {
            adjusted.push(BookEntry::new(page, EntryKind::BlankPage));
            page += 1;
            blanks += 1;
        }

        let mut entry = entry.clone();
        entry.page_number = page;
        page += entry.page_span();
        adjusted.push(entry);
    }

    tracing::debug!(
        entries = entries.len(),
        blanks,
        pages = page - 1,
        "adjusted entries for print"
    );

    adjusted
}
