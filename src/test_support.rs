use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::formats::{
    ActivityRecord, BestEffort, Comment, CommentAuthor, ComprehensiveData, Photo, PhotoSummary,
    RACE_WORKOUT_TYPE,
};

fn at(date: &str) -> DateTime<Utc> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid fixture date");
    date.and_hms_opt(7, 0, 0)
        .expect("valid fixture time")
        .and_utc()
}

pub(crate) fn run(id: u64, date: &str, distance: f64) -> ActivityRecord {
    ActivityRecord {
        id,
        name: format!("Run {id}"),
        start_date: at(date),
        start_date_local: Some(at(date)),
        distance,
        moving_time: (distance * 0.3) as u64,
        total_elevation_gain: 0.0,
        workout_type: None,
        sport_type: "Run".to_owned(),
        photos: PhotoSummary::default(),
        comprehensive: ComprehensiveData::default(),
        kudos_count: 0,
        suffer_score: None,
        description: None,
        best_efforts: Vec::new(),
    }
}

pub(crate) fn race(id: u64, date: &str, distance: f64) -> ActivityRecord {
    ActivityRecord {
        workout_type: Some(RACE_WORKOUT_TYPE),
        name: format!("Race {id}"),
        ..run(id, date, distance)
    }
}

pub(crate) fn photo(prefix: &str, resolutions: &[u32]) -> Photo {
    Photo {
        unique_id: Some(prefix.to_owned()),
        urls: resolutions
            .iter()
            .map(|r| (*r, format!("{prefix}-{r}")))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub(crate) fn comment(text: &str, reactions: u32) -> Comment {
    Comment {
        text: text.to_owned(),
        athlete: CommentAuthor {
            firstname: "Sam".to_owned(),
            lastname: "Runner".to_owned(),
        },
        reaction_count: reactions,
    }
}

pub(crate) fn pr(rank: u8) -> BestEffort {
    BestEffort {
        name: "5k".to_owned(),
        elapsed_time: 1200,
        distance: 5000.0,
        pr_rank: Some(rank),
    }
}
