use crate::formats::ActivityRecord;

// (exclusive lower bound, points); the first matching tier wins.
const KUDOS_TIERS: [(f64, i32); 4] = [(50.0, 5), (20.0, 3), (10.0, 2), (5.0, 1)];
const COMMENT_TIERS: [(f64, i32); 3] = [(10.0, 4), (5.0, 2), (0.0, 1)];
const EFFORT_TIERS: [(f64, i32); 3] = [(200.0, 3), (100.0, 2), (50.0, 1)];
const DISTANCE_KM_TIERS: [(f64, i32); 3] = [(50.0, 3), (20.0, 2), (10.0, 1)];
const ELEVATION_M_TIERS: [(f64, i32); 3] = [(1000.0, 3), (500.0, 2), (200.0, 1)];

const PERSONAL_RECORD_POINTS: i32 = 2;
const PHOTO_POINTS: i32 = 2;
const DESCRIPTION_POINTS: i32 = 1;
const DESCRIPTION_MIN_CHARS: usize = 50;
const RACE_POINTS: i32 = 3;

pub fn score(activity: &ActivityRecord) -> i32 {
    let personal_records = activity
        .best_efforts
        .iter()
        .filter(|effort| effort.is_personal_record())
        .count() as i32;

    let mut points = personal_records * PERSONAL_RECORD_POINTS;
    points += tier(f64::from(activity.kudos_count), &KUDOS_TIERS);
    points += tier(activity.comments().len() as f64, &COMMENT_TIERS);
    points += tier(activity.suffer_score.unwrap_or(0.0), &EFFORT_TIERS);
    points += tier(activity.distance / 1000.0, &DISTANCE_KM_TIERS);
    points += tier(activity.total_elevation_gain, &ELEVATION_M_TIERS);

    if activity.has_photos() {
        points += PHOTO_POINTS;
    }
    let description_chars = activity
        .description
        .as_deref()
        .map_or(0, |text| text.chars().count());
    if description_chars > DESCRIPTION_MIN_CHARS {
        points += DESCRIPTION_POINTS;
    }
    if activity.is_race() {
        points += RACE_POINTS;
    }

    points
}

fn tier(value: f64, tiers: &[(f64, i32)]) -> i32 {
    tiers
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map_or(0, |(_, points)| *points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{comment, photo, pr, race, run};

    #[test]
    fn bare_short_run_scores_zero() {
        assert_eq!(score(&run(1, "2024-01-01", 5000.0)), 0);
    }

    #[test]
    fn tiers_are_mutually_exclusive() {
        let mut activity = run(1, "2024-01-01", 5000.0);

        activity.kudos_count = 51;
        assert_eq!(score(&activity), 5);
        activity.kudos_count = 21;
        assert_eq!(score(&activity), 3);
        activity.kudos_count = 11;
        assert_eq!(score(&activity), 2);
        activity.kudos_count = 6;
        assert_eq!(score(&activity), 1);
        activity.kudos_count = 5;
        assert_eq!(score(&activity), 0);
    }

    #[test]
    fn comment_tiers() {
        let mut activity = run(1, "2024-01-01", 5000.0);

        activity.comprehensive.comments = vec![comment("nice", 0)];
        assert_eq!(score(&activity), 1);
        activity.comprehensive.comments = vec![comment("nice", 0); 6];
        assert_eq!(score(&activity), 2);
        activity.comprehensive.comments = vec![comment("nice", 0); 11];
        assert_eq!(score(&activity), 4);
    }

    #[test]
    fn marathon_race_with_everything() {
        let mut activity = race(1, "2024-04-21", 42_195.0);
        activity.best_efforts = vec![pr(1), pr(3), pr(4)];
        activity.kudos_count = 64;
        activity.comprehensive.comments = vec![comment("wow", 3); 7];
        activity.suffer_score = Some(250.0);
        activity.total_elevation_gain = 512.0;
        activity.comprehensive.photos = vec![photo("finish", &[600])];
        activity.description = Some("x".repeat(51));

        // PRs 4, kudos 5, comments 2, effort 3, distance 2, elevation 2,
        // photo 2, description 1, race 3.
        assert_eq!(score(&activity), 24);
    }

    #[test]
    fn description_length_counts_characters() {
        let mut activity = run(1, "2024-01-01", 5000.0);
        activity.description = Some("é".repeat(50));
        assert_eq!(score(&activity), 0);
        activity.description = Some("é".repeat(51));
        assert_eq!(score(&activity), 1);
    }

    #[test]
    fn score_is_deterministic() {
        let mut activity = race(1, "2024-04-21", 30_000.0);
        activity.kudos_count = 12;
        activity.best_efforts = vec![pr(2)];

        let first = score(&activity);
        for _ in 0..10 {
            assert_eq!(score(&activity), first);
        }
    }
}
