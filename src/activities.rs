use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::formats::ActivityRecord;

#[derive(Debug, Deserialize)]
struct ActivityExport {
    activities: Vec<ActivityRecord>,
}

/// Reads an activity export: a JSON array, an `{"activities": [...]}`
/// object, or one activity per line (JSONL).
pub fn read_activities(path: &Path) -> anyhow::Result<Vec<ActivityRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read activities: {}", path.display()))?;
    let activities = parse_activities(&contents)
        .with_context(|| format!("parse activities: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        activities = activities.len(),
        "loaded activities"
    );
    Ok(activities)
}

pub fn parse_activities(contents: &str) -> anyhow::Result<Vec<ActivityRecord>> {
    let trimmed = contents.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("parse activity array");
    }

    match serde_json::from_str::<ActivityExport>(trimmed) {
        Ok(export) => return Ok(export.activities),
        Err(err) => {
            tracing::debug!(?err, "not an activity export object; reading as jsonl");
        }
    }

    let mut activities = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let activity: ActivityRecord = serde_json::from_str(line)
            .with_context(|| format!("parse activity jsonl line {}", idx + 1))?;
        activities.push(activity);
    }
    Ok(activities)
}
