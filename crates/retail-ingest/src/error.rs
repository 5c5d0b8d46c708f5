//! Ingest error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to create a data directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a root-level input file into the data directory.
    #[error("failed to copy {from} to {to}: {source}")]
    FileCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more required input files are absent after bootstrapping.
    ///
    /// This is the only fatal condition the pipeline can raise; the caller is
    /// expected to report it and exit non-zero.
    #[error(
        "missing input files in {}: {}. \
         Place customers.csv, products.csv and transactions.csv in the data \
         folder (or at the project root, from where they are copied in) and \
         re-run.",
        .dir.display(),
        .missing.join(", ")
    )]
    MissingInputs { dir: PathBuf, missing: Vec<String> },

    /// Failed to read or parse a CSV file.
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
