use clap::{Args, Parser, Subcommand};

use crate::plan::RaceLayout;
use crate::toc::TocSource;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plan the full book and write it as JSON.
    Plan(PlanArgs),
    /// Estimate the page count without planning entries.
    Estimate(EstimateArgs),
    /// Print period statistics as JSON.
    Summary(SummaryArgs),
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Activity export (JSON array, `{"activities": [...]}` or JSONL).
    #[arg(long)]
    pub activities: String,

    /// Output file path for the book plan JSON.
    #[arg(long)]
    pub out: String,

    /// Book config (`book.yaml`). Flags below override its values.
    #[arg(long)]
    pub config: Option<String>,

    /// Book title (printed on the cover).
    #[arg(long)]
    pub title: Option<String>,

    /// Athlete name.
    #[arg(long)]
    pub athlete: Option<String>,

    /// Year the book covers.
    #[arg(long)]
    pub year: Option<i32>,

    /// Foreword text; adds a foreword page.
    #[arg(long)]
    pub foreword: Option<String>,

    /// Display name for the covered period (default: the year).
    #[arg(long)]
    pub period_name: Option<String>,

    /// Activities listed per training log page.
    #[arg(long)]
    pub per_log_page: Option<usize>,

    /// Where race pages go.
    #[arg(long)]
    pub race_layout: Option<RaceLayout>,

    /// Add a highlights page before the back cover.
    #[arg(long)]
    pub highlights: bool,

    /// Insert blank pages so section openers land on right-hand pages.
    #[arg(long)]
    pub print_spreads: bool,

    /// Entry list the table of contents takes page numbers from.
    #[arg(long)]
    pub toc_source: Option<TocSource>,

    /// Overwrite the output file if it exists.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Activity export (JSON array, `{"activities": [...]}` or JSONL).
    #[arg(long)]
    pub activities: String,

    /// Activities listed per training log page.
    #[arg(long, default_value_t = 6)]
    pub per_log_page: usize,

    /// Count a foreword page.
    #[arg(long)]
    pub foreword: bool,

    /// Count a highlights page.
    #[arg(long)]
    pub highlights: bool,

    /// Race page placement to estimate for.
    #[arg(long, default_value = "grouped")]
    pub race_layout: RaceLayout,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Activity export (JSON array, `{"activities": [...]}` or JSONL).
    #[arg(long)]
    pub activities: String,

    /// Year the summary is labelled with.
    #[arg(long)]
    pub year: i32,
}
