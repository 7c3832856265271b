use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::BookConfig;
use crate::formats::{
    ActivityId, ActivityRecord, BookEntry, EntryKind, MonthKey, PhotoRef, RaceDistance,
};
use crate::select::{
    activity_photos, comments, hero_photo, select_featured, top_comments, top_photos,
};
use crate::stats::{compute_year_summary, group_by_month};

/// Where race pages go.
///
/// `Grouped` puts every race in one block ahead of the training log.
/// `Interleaved` files each race right after its month's divider, which
/// yields a different page plan for the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceLayout {
    #[default]
    Grouped,
    Interleaved,
}

impl std::str::FromStr for RaceLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grouped" => Ok(Self::Grouped),
            "interleaved" => Ok(Self::Interleaved),
            _ => Err(format!("unknown race layout: {s} (expected grouped or interleaved)")),
        }
    }
}

struct PageCursor {
    next_page: u32,
    entries: Vec<BookEntry>,
}

impl PageCursor {
    fn new() -> Self {
        Self {
            next_page: 1,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, entry: BookEntry) {
        let mut entry = entry;
        entry.page_number = self.next_page;
        self.next_page += entry.page_span();
        self.entries.push(entry);
    }

    fn push_kind(&mut self, kind: EntryKind) {
        self.push(BookEntry::new(0, kind));
    }
}

pub fn generate_book_entries(activities: &[ActivityRecord], config: &BookConfig) -> Vec<BookEntry> {
    let summary = compute_year_summary(activities, config.year);
    let a_race = summary
        .a_race
        .and_then(|id| activities.iter().find(|a| a.id == id));

    let mut cursor = PageCursor::new();

    cursor.push(
        BookEntry::new(
            0,
            EntryKind::Cover {
                hero_image: cover_image(activities, a_race),
            },
        )
        .with_title(config.title.clone()),
    );
    if let Some(text) = config.foreword() {
        cursor.push_kind(EntryKind::Foreword {
            text: text.to_owned(),
        });
    }
    cursor.push_kind(EntryKind::TableOfContents);

    if activities.is_empty() {
        cursor.push_kind(EntryKind::BackCover);
        tracing::debug!(entries = cursor.entries.len(), "planned empty book");
        return cursor.entries;
    }

    let mut year_stats = BookEntry::new(0, EntryKind::YearStats);
    if let Some(period) = config.period_name() {
        year_stats = year_stats.with_title(period);
    }
    cursor.push(year_stats);
    cursor.push_kind(EntryKind::YearAtAGlance);

    let planner = SectionPlanner {
        config,
        a_race: a_race.map(|a| a.id),
    };
    match config.race_layout {
        RaceLayout::Grouped => planner.grouped(&mut cursor, activities),
        RaceLayout::Interleaved => planner.interleaved(&mut cursor, activities),
    }

    if config.include_highlights {
        cursor.push_kind(EntryKind::Highlights {
            featured_activity: select_featured(activities, a_race).map(|a| a.id),
            photos: top_photos(activities, config.highlight_photo_limit),
            comments: top_comments(activities, config.highlight_comment_limit),
        });
    }

    cursor.push_kind(EntryKind::BackCover);

    tracing::debug!(
        entries = cursor.entries.len(),
        pages = cursor.next_page - 1,
        layout = ?config.race_layout,
        "planned book entries"
    );

    cursor.entries
}

fn cover_image(
    activities: &[ActivityRecord],
    a_race: Option<&ActivityRecord>,
) -> Option<PhotoRef> {
    a_race
        .and_then(hero_photo)
        .or_else(|| activities.iter().find_map(hero_photo))
}

struct SectionPlanner<'a> {
    config: &'a BookConfig,
    a_race: Option<ActivityId>,
}

impl SectionPlanner<'_> {
    fn grouped(&self, cursor: &mut PageCursor, activities: &[ActivityRecord]) {
        for race in activities.iter().filter(|a| a.is_race()) {
            self.race_page(cursor, race);
        }

        let months = group_by_month(activities.iter().filter(|a| !a.is_race()));
        for (key, bucket) in months {
            self.divider(cursor, key, &bucket);
            self.activity_log(cursor, key, bucket);
        }
    }

    fn interleaved(&self, cursor: &mut PageCursor, activities: &[ActivityRecord]) {
        for (key, bucket) in group_by_month(activities) {
            let (races, training): (Vec<_>, Vec<_>) =
                bucket.into_iter().partition(|a| a.is_race());

            self.divider(cursor, key, &training);
            for race in races {
                self.race_page(cursor, race);
            }
            self.activity_log(cursor, key, training);
        }
    }

    fn race_page(&self, cursor: &mut PageCursor, race: &ActivityRecord) {
        let mut entry = BookEntry::new(
            0,
            EntryKind::RacePage {
                activity_id: race.id,
                race_distance: RaceDistance::classify(race.distance),
                is_a_race: self.a_race == Some(race.id),
                photos: activity_photos(race, self.config.race_photo_limit),
                comments: comments(race, self.config.race_comment_limit),
            },
        );
        if !race.name.trim().is_empty() {
            entry = entry.with_title(race.name.clone());
        }
        cursor.push(entry);
    }

    fn divider(&self, cursor: &mut PageCursor, key: MonthKey, bucket: &[&ActivityRecord]) {
        cursor.push_kind(EntryKind::MonthlyDivider {
            month: key.month,
            year: key.year,
            activity_count: bucket.len(),
            featured_activity: select_featured(bucket.iter().copied(), None).map(|a| a.id),
        });
    }

    fn activity_log(&self, cursor: &mut PageCursor, key: MonthKey, bucket: Vec<&ActivityRecord>) {
        let per_page = self.config.activities_per_log_page.max(1);
        let mut bucket = bucket;
        bucket.sort_by_key(|a| a.local_start());

        for (page_index, chunk) in bucket.chunks(per_page).enumerate() {
            cursor.push_kind(EntryKind::ActivityLog {
                month: key.month,
                year: key.year,
                first_activity_index: page_index * per_page,
                activity_ids: chunk.iter().map(|a| a.id).collect(),
            });
        }
    }
}

pub fn dangling_references(entries: &[BookEntry], activities: &[ActivityRecord]) -> Vec<ActivityId> {
    let known = activities.iter().map(|a| a.id).collect::<HashSet<_>>();
    let mut missing = Vec::new();
    for entry in entries {
        for id in entry.kind.referenced_activities() {
            if !known.contains(&id) && !missing.contains(&id) {
                missing.push(id);
            }
        }
    }
    missing
}
