use std::collections::{BTreeMap, BTreeSet};

use crate::formats::{ActivityRecord, MonthKey, MonthlyStats, YearSummary};

pub const FASTEST_RUN_MIN_DISTANCE_M: f64 = 5000.0;

pub fn group_by_month<'a, I>(activities: I) -> BTreeMap<MonthKey, Vec<&'a ActivityRecord>>
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let mut months: BTreeMap<MonthKey, Vec<&ActivityRecord>> = BTreeMap::new();
    for activity in activities {
        months.entry(activity.month_key()).or_default().push(activity);
    }
    months
}

/// Seconds per kilometre, or `None` without both distance and moving time.
pub fn pace_seconds_per_km(activity: &ActivityRecord) -> Option<f64> {
    if activity.distance <= 0.0 || activity.moving_time == 0 {
        return None;
    }
    Some(activity.moving_time as f64 / (activity.distance / 1000.0))
}

pub fn compute_year_summary(activities: &[ActivityRecord], year: i32) -> YearSummary {
    let races = activities.iter().filter(|a| a.is_race()).collect::<Vec<_>>();
    let (fastest_run, fastest_run_qualified) = match fastest_run(activities) {
        Some(run) => (Some(run.id), true),
        None => (activities.first().map(|a| a.id), false),
    };

    let summary = YearSummary {
        year,
        total_distance: activities.iter().map(|a| a.distance).sum(),
        total_moving_time: activities.iter().map(|a| a.moving_time).sum(),
        total_elevation_gain: activities.iter().map(|a| a.total_elevation_gain).sum(),
        activity_count: activities.len(),
        longest_activity: longest_activity(activities).map(|a| a.id),
        fastest_run,
        fastest_run_qualified,
        active_days: activities.iter().map(ActivityRecord::local_date).collect(),
        monthly_stats: group_by_month(activities)
            .into_iter()
            .map(|(key, bucket)| monthly_stats(key, &bucket))
            .collect(),
        races: races.iter().map(|a| a.id).collect(),
        a_race: a_race(races.iter().copied()).map(|a| a.id),
    };

    tracing::debug!(
        year,
        activities = summary.activity_count,
        months = summary.monthly_stats.len(),
        races = summary.races.len(),
        "computed year summary"
    );

    summary
}

fn monthly_stats(key: MonthKey, bucket: &[&ActivityRecord]) -> MonthlyStats {
    MonthlyStats {
        month: key.month,
        year: key.year,
        activity_count: bucket.len(),
        total_distance: bucket.iter().map(|a| a.distance).sum(),
        total_moving_time: bucket.iter().map(|a| a.moving_time).sum(),
        total_elevation_gain: bucket.iter().map(|a| a.total_elevation_gain).sum(),
        active_days: bucket
            .iter()
            .map(|a| a.local_date())
            .collect::<BTreeSet<_>>()
            .len(),
        activity_ids: bucket.iter().map(|a| a.id).collect(),
    }
}

pub fn longest_activity(activities: &[ActivityRecord]) -> Option<&ActivityRecord> {
    activities.iter().reduce(|best, activity| {
        if activity.distance > best.distance {
            activity
        } else {
            best
        }
    })
}

pub fn fastest_run(activities: &[ActivityRecord]) -> Option<&ActivityRecord> {
    activities
        .iter()
        .filter(|a| a.sport_type == "Run" && a.distance >= FASTEST_RUN_MIN_DISTANCE_M)
        .filter_map(|a| pace_seconds_per_km(a).map(|pace| (a, pace)))
        .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
        .map(|(activity, _)| activity)
}

pub fn a_race<'a, I>(races: I) -> Option<&'a ActivityRecord>
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let mut ranked = races.into_iter().collect::<Vec<_>>();
    ranked.sort_by(|a, b| {
        b.distance
            .total_cmp(&a.distance)
            .then_with(|| b.start_date.cmp(&a.start_date))
    });
    ranked.first().copied()
}
