//! Input discovery and bootstrapping.
//!
//! The pipeline expects `customers.csv`, `products.csv` and
//! `transactions.csv` under `<root>/data/original`. Files dropped at the
//! project root are copied into place on first run. Anything still missing
//! after that is fatal at the program boundary; the core pipeline never
//! raises this condition.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Names of the three required input files.
pub const INPUT_FILES: [&str; 3] = ["customers.csv", "products.csv", "transactions.csv"];

/// Resolved locations of the three input files.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub customers: PathBuf,
    pub products: PathBuf,
    pub transactions: PathBuf,
}

/// Ensures the data layout exists and all three inputs are present.
///
/// Creates `data/original` and `data/cleaned` under `root`, copies any of the
/// three files found directly at `root` into `data/original` when not
/// already there, and returns the resolved paths.
///
/// # Errors
///
/// [`IngestError::MissingInputs`] when any input file is absent after the
/// copy step, with every missing name listed.
pub fn ensure_inputs_exist(root: &Path) -> Result<InputPaths> {
    let original_dir = root.join("data").join("original");
    let cleaned_dir = root.join("data").join("cleaned");
    for dir in [&original_dir, &cleaned_dir] {
        std::fs::create_dir_all(dir).map_err(|source| IngestError::DirectoryCreate {
            path: dir.clone(),
            source,
        })?;
    }

    for name in INPUT_FILES {
        let target = original_dir.join(name);
        let root_copy = root.join(name);
        if !target.exists() && root_copy.exists() {
            std::fs::copy(&root_copy, &target).map_err(|source| IngestError::FileCopy {
                from: root_copy.clone(),
                to: target.clone(),
                source,
            })?;
            info!(file = name, "copied input from project root");
        }
    }

    let missing: Vec<String> = INPUT_FILES
        .iter()
        .filter(|name| !original_dir.join(name).exists())
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingInputs {
            dir: original_dir,
            missing,
        });
    }

    debug!(dir = %original_dir.display(), "all input files present");
    Ok(InputPaths {
        customers: original_dir.join(INPUT_FILES[0]),
        products: original_dir.join(INPUT_FILES[1]),
        transactions: original_dir.join(INPUT_FILES[2]),
    })
}
