//! Result types shared between the pipeline and the summary printer.

use std::path::PathBuf;

use retail_analytics::AnalyticsBundle;

/// Row counts for one entity table before and after cleaning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableCounts {
    pub raw: usize,
    pub cleaned: usize,
}

/// Everything a pipeline run produced, for the console summary.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub data_root: PathBuf,
    pub cleaned_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub customers: TableCounts,
    pub products: TableCounts,
    pub transactions: TableCounts,
    pub analytics: AnalyticsBundle,
    pub cleaned_paths: Vec<PathBuf>,
    pub report_paths: Vec<PathBuf>,
}
