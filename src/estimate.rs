use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::BookConfig;
use crate::formats::{ActivityRecord, MonthKey};
use crate::plan::RaceLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateFormat {
    pub activities_per_log_page: usize,
    #[serde(default)]
    pub include_foreword: bool,
    #[serde(default)]
    pub include_highlights: bool,
    #[serde(default)]
    pub race_layout: RaceLayout,
}

impl From<&BookConfig> for EstimateFormat {
    fn from(config: &BookConfig) -> Self {
        Self {
            activities_per_log_page: config.activities_per_log_page,
            include_foreword: config.foreword().is_some(),
            include_highlights: config.include_highlights,
            race_layout: config.race_layout,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBreakdown {
    pub cover: u32,
    pub foreword: u32,
    pub table_of_contents: u32,
    pub year_stats: u32,
    pub year_calendar: u32,
    pub monthly_dividers: u32,
    pub race_pages: u32,
    pub activity_log: u32,
    pub highlights: u32,
    pub back_cover: u32,
}

impl PageBreakdown {
    pub fn total(&self) -> u32 {
        self.cover
            + self.foreword
            + self.table_of_contents
            + self.year_stats
            + self.year_calendar
            + self.monthly_dividers
            + self.race_pages
            + self.activity_log
            + self.highlights
            + self.back_cover
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEstimate {
    pub total: u32,
    pub breakdown: PageBreakdown,
}

pub fn estimate_page_count(activities: &[ActivityRecord], format: &EstimateFormat) -> PageEstimate {
    let mut breakdown = PageBreakdown {
        cover: 1,
        foreword: u32::from(format.include_foreword),
        table_of_contents: 1,
        back_cover: 1,
        ..PageBreakdown::default()
    };

    if !activities.is_empty() {
        let per_page = format.activities_per_log_page.max(1);

        // (all activities, non-race activities) per month
        let mut months: BTreeMap<MonthKey, (usize, usize)> = BTreeMap::new();
        let mut races = 0_u32;
        for activity in activities {
            let counts = months.entry(activity.month_key()).or_default();
            counts.0 += 1;
            if activity.is_race() {
                races += 1;
            } else {
                counts.1 += 1;
            }
        }

        breakdown.year_stats = 1;
        breakdown.year_calendar = 1;
        breakdown.race_pages = 2 * races;
        breakdown.monthly_dividers = months
            .values()
            .filter(|(all, training)| match format.race_layout {
                RaceLayout::Grouped => *training > 0,
                RaceLayout::Interleaved => *all > 0,
            })
            .count() as u32;
        breakdown.activity_log = months
            .values()
            .map(|(_, training)| training.div_ceil(per_page) as u32)
            .sum();
        breakdown.highlights = u32::from(format.include_highlights);
    }

    PageEstimate {
        total: breakdown.total(),
        breakdown,
    }
}
