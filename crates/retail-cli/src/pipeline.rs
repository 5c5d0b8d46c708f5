//! Batch pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Bootstrap the data layout and read the three source CSVs
//! 2. **Clean**: Run the per-entity cleaners (customers and products are
//!    independent; transactions require the cleaned customer id set)
//! 3. **Analyze**: Build the fact view and derive reports and KPIs
//! 4. **Output**: Write cleaned tables and report tables (skipped on dry-run)
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use retail_analytics::{AnalyticsBundle, compute_analytics};
use retail_ingest::{
    bind_customers, bind_products, bind_transactions, ensure_inputs_exist, read_csv_table,
};
use retail_model::{Customer, Product, RawCustomer, RawProduct, RawTransaction, Transaction};
use retail_report::{write_cleaned_tables, write_report_tables};
use retail_transform::{clean_customers, clean_products, clean_transactions};

use crate::types::{PipelineResult, TableCounts};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage: the three raw tables.
#[derive(Debug)]
pub struct LoadResult {
    pub customers: Vec<RawCustomer>,
    pub products: Vec<RawProduct>,
    pub transactions: Vec<RawTransaction>,
}

/// Bootstrap the data layout and load the three raw tables.
///
/// # Errors
///
/// Fails when a required input file is missing after bootstrapping, or when
/// a file cannot be read as CSV. This is the pipeline's only fatal path.
pub fn load(data_root: &Path) -> Result<LoadResult> {
    let start = Instant::now();
    let paths = ensure_inputs_exist(data_root).context("locate input files")?;
    let customers = bind_customers(&read_csv_table(&paths.customers).context("load customers")?);
    let products = bind_products(&read_csv_table(&paths.products).context("load products")?);
    let transactions =
        bind_transactions(&read_csv_table(&paths.transactions).context("load transactions")?);
    info!(
        customers = customers.len(),
        products = products.len(),
        transactions = transactions.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(LoadResult {
        customers,
        products,
        transactions,
    })
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

/// Result of the cleaning stage: the three cleaned tables.
#[derive(Debug)]
pub struct CleanResult {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
}

/// Run the three entity cleaners in dependency order.
pub fn clean(raw: &LoadResult) -> CleanResult {
    let start = Instant::now();
    let customers = clean_customers(&raw.customers);
    let products = clean_products(&raw.products);
    // Transaction cleaning strictly requires the cleaned customer id set.
    let valid_customers: BTreeSet<String> = customers
        .iter()
        .map(|customer| customer.customer_id.clone())
        .collect();
    let transactions = clean_transactions(&raw.transactions, &valid_customers);
    info!(
        customers = customers.len(),
        products = products.len(),
        transactions = transactions.len(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );
    CleanResult {
        customers,
        products,
        transactions,
    }
}

// ============================================================================
// Stage 3: Analyze
// ============================================================================

/// Derive the analytics bundle from the cleaned tables.
pub fn analyze(cleaned: &CleanResult) -> AnalyticsBundle {
    let start = Instant::now();
    let bundle = compute_analytics(&cleaned.transactions, &cleaned.products, &cleaned.customers);
    info!(
        total_revenue = bundle.kpis.total_revenue,
        duration_ms = start.elapsed().as_millis(),
        "analytics complete"
    );
    bundle
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Where the output stage writes, and whether it writes at all.
#[derive(Debug)]
pub struct OutputConfig<'a> {
    pub cleaned_dir: &'a Path,
    pub output_dir: &'a Path,
    pub dry_run: bool,
}

/// Write the cleaned tables and report tables.
///
/// Returns the written paths (empty on dry-run).
pub fn output(
    config: &OutputConfig<'_>,
    cleaned: &CleanResult,
    bundle: &AnalyticsBundle,
) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    if config.dry_run {
        info!("dry run, skipping output");
        return Ok((Vec::new(), Vec::new()));
    }
    let start = Instant::now();
    let cleaned_paths = write_cleaned_tables(
        config.cleaned_dir,
        &cleaned.customers,
        &cleaned.products,
        &cleaned.transactions,
    )
    .context("write cleaned tables")?;
    let report_paths =
        write_report_tables(config.output_dir, bundle).context("write report tables")?;
    info!(
        files = cleaned_paths.len() + report_paths.len(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok((cleaned_paths, report_paths))
}

/// Run the whole pipeline against a data root.
pub fn execute(data_root: &Path, output_dir: Option<&Path>, dry_run: bool) -> Result<PipelineResult> {
    let span = info_span!("pipeline", data_root = %data_root.display());
    let _guard = span.enter();

    let cleaned_dir = data_root.join("data").join("cleaned");
    let output_dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| data_root.join("outputs"));

    let raw = load(data_root)?;
    let cleaned = clean(&raw);
    let analytics = analyze(&cleaned);
    let (cleaned_paths, report_paths) = output(
        &OutputConfig {
            cleaned_dir: &cleaned_dir,
            output_dir: &output_dir,
            dry_run,
        },
        &cleaned,
        &analytics,
    )?;

    Ok(PipelineResult {
        data_root: data_root.to_path_buf(),
        cleaned_dir,
        output_dir,
        dry_run,
        customers: TableCounts {
            raw: raw.customers.len(),
            cleaned: cleaned.customers.len(),
        },
        products: TableCounts {
            raw: raw.products.len(),
            cleaned: cleaned.products.len(),
        },
        transactions: TableCounts {
            raw: raw.transactions.len(),
            cleaned: cleaned.transactions.len(),
        },
        analytics,
        cleaned_paths,
        report_paths,
    })
}
