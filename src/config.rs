use std::path::Path;

use anyhow::Context as _;
use chrono::Datelike as _;
use serde::{Deserialize, Serialize};

use crate::plan::RaceLayout;
use crate::toc::TocSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub athlete_name: String,
    #[serde(default = "BookConfig::default_year")]
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreword_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_name: Option<String>,
    #[serde(default = "BookConfig::default_activities_per_log_page")]
    pub activities_per_log_page: usize,

    #[serde(default)]
    pub race_layout: RaceLayout,
    #[serde(default)]
    pub include_highlights: bool,
    #[serde(default = "BookConfig::default_race_photo_limit")]
    pub race_photo_limit: usize,
    #[serde(default = "BookConfig::default_race_comment_limit")]
    pub race_comment_limit: usize,
    #[serde(default = "BookConfig::default_highlight_photo_limit")]
    pub highlight_photo_limit: usize,
    #[serde(default = "BookConfig::default_highlight_comment_limit")]
    pub highlight_comment_limit: usize,

    #[serde(default)]
    pub print_spreads: bool,
    #[serde(default)]
    pub toc_source: TocSource,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            athlete_name: String::new(),
            year: Self::default_year(),
            foreword_text: None,
            period_name: None,
            activities_per_log_page: Self::default_activities_per_log_page(),
            race_layout: RaceLayout::default(),
            include_highlights: false,
            race_photo_limit: Self::default_race_photo_limit(),
            race_comment_limit: Self::default_race_comment_limit(),
            highlight_photo_limit: Self::default_highlight_photo_limit(),
            highlight_comment_limit: Self::default_highlight_comment_limit(),
            print_spreads: false,
            toc_source: TocSource::default(),
        }
    }
}

impl BookConfig {
    pub fn default_year() -> i32 {
        chrono::Utc::now().year()
    }
    pub fn default_activities_per_log_page() -> usize {
        6
    }
    pub fn default_race_photo_limit() -> usize {
        4
    }
    pub fn default_race_comment_limit() -> usize {
        3
    }
    pub fn default_highlight_photo_limit() -> usize {
        6
    }
    pub fn default_highlight_comment_limit() -> usize {
        5
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("read book config: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&yaml)
            .with_context(|| format!("parse book config: {}", path.display()))?;
        Ok(config)
    }

    pub fn foreword(&self) -> Option<&str> {
        self.foreword_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    pub fn period_name(&self) -> Option<&str> {
        self.period_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("book title is empty");
        }
        if self.activities_per_log_page == 0 {
            anyhow::bail!("activities_per_log_page must be at least 1");
        }
        if self.toc_source == TocSource::Print && !self.print_spreads {
            anyhow::bail!("toc_source `print` requires print_spreads to be enabled");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_fills_defaults() -> anyhow::Result<()> {
        let config: BookConfig = serde_yaml::from_str(
            "title: My Year\n\
             athlete_name: Sam Runner\n\
             year: 2024\n\
             race_layout: interleaved\n",
        )?;

        assert_eq!(config.title, "My Year");
        assert_eq!(config.year, 2024);
        assert_eq!(config.activities_per_log_page, 6);
        assert_eq!(config.race_layout, RaceLayout::Interleaved);
        assert_eq!(config.toc_source, TocSource::Planned);
        assert!(!config.print_spreads);
        assert_eq!(config.period_name(), None);
        config.validate()?;
        Ok(())
    }

    #[test]
    fn validate_rejects_print_toc_without_spreads() {
        let config = BookConfig {
            title: "Book".to_owned(),
            toc_source: TocSource::Print,
            ..BookConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("print_spreads"));
    }

    #[test]
    fn validate_rejects_zero_page_capacity() {
        let config = BookConfig {
            title: "Book".to_owned(),
            activities_per_log_page: 0,
            ..BookConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_foreword_counts_as_missing() {
        let config = BookConfig {
            foreword_text: Some("   ".to_owned()),
            ..BookConfig::default()
        };
        assert_eq!(config.foreword(), None);
    }

    #[test]
    fn blank_period_name_counts_as_missing() {
        let config = BookConfig {
            period_name: Some(" ".to_owned()),
            ..BookConfig::default()
        };
        assert_eq!(config.period_name(), None);

        let config = BookConfig {
            period_name: Some("Marathon Season".to_owned()),
            ..BookConfig::default()
        };
        assert_eq!(config.period_name(), Some("Marathon Season"));
    }
}
