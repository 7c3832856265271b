use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike as _, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ActivityId = u64;

pub const RACE_WORKOUT_TYPE: u32 = 1;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[must_use]
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or("Unknown")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: ActivityId,
    #[serde(default)]
    pub name: String,
    pub start_date: DateTime<Utc>,
    /// Wall-clock start time. Strava encodes it with a `Z` suffix even though
    /// it is not UTC, so it is only ever read back as a naive value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_local: Option<DateTime<Utc>>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: u64,
    #[serde(default)]
    pub total_elevation_gain: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<u32>,
    #[serde(rename = "type", default)]
    pub sport_type: String,
    #[serde(default)]
    pub photos: PhotoSummary,
    #[serde(rename = "comprehensiveData", default)]
    pub comprehensive: ComprehensiveData,
    #[serde(default)]
    pub kudos_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffer_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub best_efforts: Vec<BestEffort>,
}

impl ActivityRecord {
    pub fn local_start(&self) -> NaiveDateTime {
        self.start_date_local
            .unwrap_or(self.start_date)
            .naive_utc()
    }

    pub fn local_date(&self) -> NaiveDate {
        self.local_start().date()
    }

    pub fn month_key(&self) -> MonthKey {
        let start = self.local_start();
        MonthKey {
            year: start.year(),
            month: start.month0(),
        }
    }

    pub fn is_race(&self) -> bool {
        self.workout_type == Some(RACE_WORKOUT_TYPE)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comprehensive.comments
    }

    pub fn photo_candidates(&self) -> impl Iterator<Item = &Photo> {
        self.comprehensive
            .photos
            .iter()
            .chain(self.photos.primary.iter())
            .filter(|photo| !photo.urls.is_empty())
    }

    pub fn has_photos(&self) -> bool {
        self.photo_candidates().next().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<Photo>,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComprehensiveData {
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub urls: BTreeMap<u32, String>,
}

impl Photo {
    pub fn largest(&self) -> Option<(u32, &str)> {
        self.urls
            .iter()
            .next_back()
            .map(|(resolution, url)| (*resolution, url.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub athlete: CommentAuthor,
    #[serde(default)]
    pub reaction_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestEffort {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub elapsed_time: u64,
    #[serde(default)]
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr_rank: Option<u8>,
}

impl BestEffort {
    pub fn is_personal_record(&self) -> bool {
        matches!(self.pr_rank, Some(1..=3))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub activity_id: ActivityId,
    pub url: String,
    pub resolution: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedComment {
    pub activity_id: ActivityId,
    pub comment: Comment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    pub total_distance: f64,
    pub total_moving_time: u64,
    pub total_elevation_gain: f64,
    pub activity_count: usize,
    pub longest_activity: Option<ActivityId>,
    pub fastest_run: Option<ActivityId>,
    pub fastest_run_qualified: bool,
    pub active_days: BTreeSet<NaiveDate>,
    pub monthly_stats: Vec<MonthlyStats>,
    pub races: Vec<ActivityId>,
    pub a_race: Option<ActivityId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub month: u32,
    pub year: i32,
    pub activity_count: usize,
    pub total_distance: f64,
    pub total_moving_time: u64,
    pub total_elevation_gain: f64,
    pub active_days: usize,
    pub activity_ids: Vec<ActivityId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceDistance {
    Ultra,
    Marathon,
    HalfMarathon,
    TenK,
    FiveK,
    Other,
}

impl RaceDistance {
    pub fn classify(distance_m: f64) -> Self {
        let km = distance_m / 1000.0;
        if km >= 50.0 {
            Self::Ultra
        } else if km >= 40.0 {
            Self::Marathon
        } else if km >= 20.0 {
            Self::HalfMarathon
        } else if (9.0..=11.0).contains(&km) {
            Self::TenK
        } else if (4.0..=6.0).contains(&km) {
            Self::FiveK
        } else {
            Self::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ultra => "Ultramarathon",
            Self::Marathon => "Marathon",
            Self::HalfMarathon => "Half Marathon",
            Self::TenK => "10K",
            Self::FiveK => "5K",
            Self::Other => "Race",
        }
    }
}

/// Table-of-contents grouping. Declaration order is the print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TocCategory {
    #[serde(rename = "Front Matter")]
    FrontMatter,
    #[serde(rename = "Overview")]
    Overview,
    #[serde(rename = "Races")]
    Races,
    #[serde(rename = "Training Log")]
    TrainingLog,
    #[serde(rename = "Highlights")]
    Highlights,
    #[serde(rename = "Back Matter")]
    BackMatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Cover,
    Foreword,
    TableOfContents,
    YearStats,
    YearAtAGlance,
    MonthlyDivider,
    RacePage,
    ActivityLog,
    Highlights,
    BlankPage,
    BackCover,
}

impl EntryType {
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Cover => "Cover",
            Self::Foreword => "Foreword",
            Self::TableOfContents => "Contents",
            Self::YearStats => "Year in Review",
            Self::YearAtAGlance => "Year at a Glance",
            Self::MonthlyDivider => "Month",
            Self::RacePage => "Race",
            Self::ActivityLog => "Training Log",
            Self::Highlights => "Highlights",
            Self::BlankPage => "",
            Self::BackCover => "Back Cover",
        }
    }

    pub fn default_category(self) -> TocCategory {
        match self {
            Self::Cover | Self::Foreword | Self::TableOfContents => TocCategory::FrontMatter,
            Self::YearStats | Self::YearAtAGlance => TocCategory::Overview,
            Self::RacePage => TocCategory::Races,
            Self::MonthlyDivider | Self::ActivityLog => TocCategory::TrainingLog,
            Self::Highlights => TocCategory::Highlights,
            Self::BlankPage | Self::BackCover => TocCategory::BackMatter,
        }
    }

    pub fn page_span(self) -> u32 {
        match self {
            Self::RacePage => 2,
            _ => 1,
        }
    }

    /// Kinds that must start on a right-hand (odd) page in print.
    pub fn requires_recto(self) -> bool {
        matches!(
            self,
            Self::Cover
                | Self::MonthlyDivider
                | Self::RacePage
                | Self::YearStats
                | Self::YearAtAGlance
        )
    }

    pub fn listed_in_toc(self) -> bool {
        !matches!(
            self,
            Self::Cover
                | Self::TableOfContents
                | Self::ActivityLog
                | Self::BlankPage
                | Self::BackCover
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    Cover {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hero_image: Option<PhotoRef>,
    },
    Foreword {
        text: String,
    },
    TableOfContents,
    YearStats,
    YearAtAGlance,
    MonthlyDivider {
        month: u32,
        year: i32,
        activity_count: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        featured_activity: Option<ActivityId>,
    },
    RacePage {
        activity_id: ActivityId,
        race_distance: RaceDistance,
        is_a_race: bool,
        #[serde(default)]
        photos: Vec<PhotoRef>,
        #[serde(default)]
        comments: Vec<Comment>,
    },
    ActivityLog {
        month: u32,
        year: i32,
        first_activity_index: usize,
        activity_ids: Vec<ActivityId>,
    },
    Highlights {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        featured_activity: Option<ActivityId>,
        #[serde(default)]
        photos: Vec<PhotoRef>,
        #[serde(default)]
        comments: Vec<FeaturedComment>,
    },
    BlankPage,
    BackCover,
}

impl EntryKind {
    pub fn entry_type(&self) -> EntryType {
        match self {
            Self::Cover { .. } => EntryType::Cover,
            Self::Foreword { .. } => EntryType::Foreword,
            Self::TableOfContents => EntryType::TableOfContents,
            Self::YearStats => EntryType::YearStats,
            Self::YearAtAGlance => EntryType::YearAtAGlance,
            Self::MonthlyDivider { .. } => EntryType::MonthlyDivider,
            Self::RacePage { .. } => EntryType::RacePage,
            Self::ActivityLog { .. } => EntryType::ActivityLog,
            Self::Highlights { .. } => EntryType::Highlights,
            Self::BlankPage => EntryType::BlankPage,
            Self::BackCover => EntryType::BackCover,
        }
    }

    pub fn referenced_activities(&self) -> Vec<ActivityId> {
        match self {
            Self::Cover { hero_image } => hero_image.iter().map(|p| p.activity_id).collect(),
            Self::MonthlyDivider {
                featured_activity, ..
            } => featured_activity.iter().copied().collect(),
            Self::RacePage {
                activity_id,
                photos,
                ..
            } => std::iter::once(*activity_id)
                .chain(photos.iter().map(|p| p.activity_id))
                .collect(),
            Self::ActivityLog { activity_ids, .. } => activity_ids.clone(),
            Self::Highlights {
                featured_activity,
                photos,
                comments,
            } => featured_activity
                .iter()
                .copied()
                .chain(photos.iter().map(|p| p.activity_id))
                .chain(comments.iter().map(|c| c.activity_id))
                .collect(),
            Self::Foreword { .. }
            | Self::TableOfContents
            | Self::YearStats
            | Self::YearAtAGlance
            | Self::BlankPage
            | Self::BackCover => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub page_number: u32,
    pub title: String,
    pub category: TocCategory,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl BookEntry {
    pub fn new(page_number: u32, kind: EntryKind) -> Self {
        let entry_type = kind.entry_type();
        let title = match &kind {
            EntryKind::MonthlyDivider { month, .. } => month_name(*month).to_owned(),
            _ => entry_type.default_title().to_owned(),
        };
        Self {
            page_number,
            title,
            category: entry_type.default_category(),
            kind,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn entry_type(&self) -> EntryType {
        self.kind.entry_type()
    }

    pub fn page_span(&self) -> u32 {
        self.entry_type().page_span()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub title: String,
    pub page_number: u32,
    pub entry_type: EntryType,
    pub category: TocCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_count: Option<usize>,
    pub highlight: bool,
}
