#![forbid(unsafe_code)]

pub mod activities;
pub mod build;
pub mod cli;
pub mod config;
pub mod estimate;
pub mod formats;
pub mod logging;
pub mod plan;
pub mod score;
pub mod select;
pub mod spread;
pub mod stats;
pub mod toc;

#[cfg(test)]
mod test_support;

pub use estimate::estimate_page_count;
pub use plan::generate_book_entries;
pub use spread::insert_blank_pages_for_print;
pub use stats::compute_year_summary;
pub use toc::build_table_of_contents;
