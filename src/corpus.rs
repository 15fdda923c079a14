//! Loading benchmark datasets from a directory of integer text files

use std::path::Path;

use anyhow::Context as _;

/// Datasets whose name contains one of these markers get a single timed run;
/// they are the structured and adversarial families whose worst cases are too
/// expensive to repeat
const SINGLE_RUN_MARKERS: [&str; 3] = ["WL", "WP1R", "WK1R"];

/// How often a (dataset, variant) pair is timed
///
/// Decided from the dataset name before any timing begins and fixed for the
/// whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatClass {
    /// One timed run
    Single,
    /// Ten timed runs
    Ten,
}

impl RepeatClass {
    /// The class for a dataset file name
    pub fn for_name(name: &str) -> RepeatClass {
        if SINGLE_RUN_MARKERS.iter().any(|marker| name.contains(marker)) {
            RepeatClass::Single
        } else {
            RepeatClass::Ten
        }
    }

    /// The number of timed runs, always at least 1
    pub fn runs(self) -> usize {
        match self {
            RepeatClass::Single => 1,
            RepeatClass::Ten => 10,
        }
    }
}

/// An ordered sequence of integers loaded from one input file
///
/// Immutable once loaded; every timed run works on a private clone.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The source file name
    pub name: String,
    pub values: Vec<i64>,
    pub repeats: RepeatClass,
}

/// Load every `.txt` file under `dir` in name-sorted order
///
/// A file that cannot be read or whose content fails to parse as
/// whitespace-separated integers is reported to stderr and skipped; the rest
/// of the corpus still loads. Failing to list the directory itself is fatal.
pub fn load_corpus(dir: &Path) -> anyhow::Result<Vec<Dataset>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("reading corpus directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|extension| extension == "txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut datasets = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match read_values(&path) {
            Ok(values) => datasets.push(Dataset {
                repeats: RepeatClass::for_name(&name),
                name,
                values,
            }),
            Err(error) => eprintln!("Skipping {name}: {error:#}"),
        }
    }

    Ok(datasets)
}

/// Parse one file of whitespace/newline-separated base-10 integers
fn read_values(path: &Path) -> anyhow::Result<Vec<i64>> {
    let content = std::fs::read_to_string(path)?;
    content
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid integer {token:?}"))
        })
        .collect()
}
