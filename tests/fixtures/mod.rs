use std::path::{Path, PathBuf};

/// A small export: an April marathon with photos and comments, one April
/// training run, and five May runs.
pub const ACTIVITIES_JSON: &str = r#"[
  {
    "id": 101,
    "name": "Spring City Marathon",
    "type": "Run",
    "workout_type": 1,
    "start_date": "2024-04-21T05:30:00Z",
    "start_date_local": "2024-04-21T07:30:00Z",
    "distance": 42195.0,
    "moving_time": 12600,
    "total_elevation_gain": 120.0,
    "kudos_count": 48,
    "photos": {"count": 2},
    "comprehensiveData": {
      "photos": [
        {"unique_id": "a", "urls": {"600": "https://img.example/a-600", "2048": "https://img.example/a-2048"}},
        {"unique_id": "b", "urls": {"600": "https://img.example/b-600"}}
      ],
      "comments": [
        {"text": "Huge run!", "athlete": {"firstname": "Alex", "lastname": "Doe"}, "reaction_count": 3},
        {"text": "Congrats", "athlete": {"firstname": "Kim", "lastname": "Lee"}, "reaction_count": 0}
      ]
    }
  },
  {"id": 102, "name": "Easy Run", "type": "Run", "start_date": "2024-04-10T06:00:00Z", "distance": 8000.0, "moving_time": 2700},
  {"id": 201, "name": "May Run 1", "type": "Run", "start_date": "2024-05-01T06:00:00Z", "distance": 6000.0, "moving_time": 1900},
  {"id": 202, "name": "May Run 2", "type": "Run", "start_date": "2024-05-02T06:00:00Z", "distance": 6000.0, "moving_time": 1900},
  {"id": 203, "name": "May Run 3", "type": "Run", "start_date": "2024-05-03T06:00:00Z", "distance": 6000.0, "moving_time": 1900},
  {"id": 204, "name": "May Run 4", "type": "Run", "start_date": "2024-05-04T06:00:00Z", "distance": 6000.0, "moving_time": 1900},
  {"id": 205, "name": "May Ride", "type": "Ride", "start_date": "2024-05-05T06:00:00Z", "distance": 30000.0, "moving_time": 3600}
]
"#;

pub fn write_activities(dir: &Path) -> PathBuf {
    let path = dir.join("activities.json");
    std::fs::write(&path, ACTIVITIES_JSON).expect("write activities fixture");
    path
}
