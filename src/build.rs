use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::cli::{EstimateArgs, PlanArgs, SummaryArgs};
use crate::config::BookConfig;
use crate::estimate::{EstimateFormat, PageEstimate, estimate_page_count};
use crate::formats::{ActivityRecord, BookEntry, TocEntry, YearSummary};
use crate::plan::{dangling_references, generate_book_entries};
use crate::spread::insert_blank_pages_for_print;
use crate::stats::compute_year_summary;
use crate::toc::{TocSource, build_table_of_contents};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPlan {
    pub config: BookConfig,
    pub summary: YearSummary,
    /// Final entry list. Includes blank pages when `print_adjusted` is set.
    pub entries: Vec<BookEntry>,
    pub print_adjusted: bool,
    pub table_of_contents: Vec<TocEntry>,
    pub estimate: PageEstimate,
}

pub fn assemble(activities: &[ActivityRecord], config: &BookConfig) -> anyhow::Result<BookPlan> {
    config.validate().context("validate book config")?;

    let summary = compute_year_summary(activities, config.year);
    let planned = generate_book_entries(activities, config);

    let dangling = dangling_references(&planned, activities);
    if !dangling.is_empty() {
        anyhow::bail!("book plan references unknown activities: {dangling:?}");
    }

    let printed = config
        .print_spreads
        .then(|| insert_blank_pages_for_print(&planned));
    let toc_entries = match (config.toc_source, &printed) {
        (TocSource::Print, Some(printed)) => printed.as_slice(),
        _ => planned.as_slice(),
    };
    let table_of_contents = build_table_of_contents(toc_entries);
    let estimate = estimate_page_count(activities, &EstimateFormat::from(config));

    Ok(BookPlan {
        config: config.clone(),
        summary,
        print_adjusted: printed.is_some(),
        entries: printed.unwrap_or(planned),
        table_of_contents,
        estimate,
    })
}

pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let out_path = PathBuf::from(&args.out);
    if out_path.exists() && !args.force {
        anyhow::bail!("book plan already exists: {}", out_path.display());
    }

    let config = resolve_config(&args).context("resolve book config")?;

    tracing::info!(activities = %args.activities, "plan: load");
    let activities = crate::activities::read_activities(Path::new(&args.activities))?;

    tracing::info!(
        year = config.year,
        race_layout = ?config.race_layout,
        print_spreads = config.print_spreads,
        "plan: assemble"
    );
    let plan = assemble(&activities, &config)?;

    tracing::info!(
        out = %out_path.display(),
        entries = plan.entries.len(),
        pages = plan.estimate.total,
        "plan: write"
    );
    write_plan(&out_path, &plan, args.force)
}

pub fn run_estimate(args: EstimateArgs) -> anyhow::Result<()> {
    if args.per_log_page == 0 {
        anyhow::bail!("--per-log-page must be at least 1");
    }
    let activities = crate::activities::read_activities(Path::new(&args.activities))?;

    let format = EstimateFormat {
        activities_per_log_page: args.per_log_page,
        include_foreword: args.foreword,
        include_highlights: args.highlights,
        race_layout: args.race_layout,
    };
    let estimate = estimate_page_count(&activities, &format);
    print_json(&estimate).context("print estimate")
}

pub fn run_summary(args: SummaryArgs) -> anyhow::Result<()> {
    let activities = crate::activities::read_activities(Path::new(&args.activities))?;
    let summary = compute_year_summary(&activities, args.year);
    print_json(&summary).context("print summary")
}

fn resolve_config(args: &PlanArgs) -> anyhow::Result<BookConfig> {
    let mut config = match &args.config {
        Some(path) => BookConfig::load(Path::new(path))?,
        None => BookConfig::default(),
    };

    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    if let Some(athlete) = &args.athlete {
        config.athlete_name = athlete.clone();
    }
    if let Some(year) = args.year {
        config.year = year;
    }
    if let Some(foreword) = &args.foreword {
        config.foreword_text = Some(foreword.clone());
    }
    if let Some(period_name) = &args.period_name {
        config.period_name = Some(period_name.clone());
    }
    if let Some(per_log_page) = args.per_log_page {
        config.activities_per_log_page = per_log_page;
    }
    if let Some(race_layout) = args.race_layout {
        config.race_layout = race_layout;
    }
    if let Some(toc_source) = args.toc_source {
        config.toc_source = toc_source;
    }
    config.include_highlights |= args.highlights;
    config.print_spreads |= args.print_spreads;

    if config.title.trim().is_empty() && !config.athlete_name.trim().is_empty() {
        config.title = format!("{} {}", config.athlete_name.trim(), config.year);
    }

    Ok(config)
}

fn write_plan(path: &Path, plan: &BookPlan, force: bool) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut out = options
        .open(path)
        .with_context(|| format!("create book plan: {}", path.display()))?;

    serde_json::to_writer_pretty(&mut out, plan).context("serialize book plan")?;
    out.write_all(b"\n").context("write book plan newline")?;
    out.flush().context("flush book plan")?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("serialize json")?;
    stdout.write_all(b"\n").context("write newline")?;
    Ok(())
}
