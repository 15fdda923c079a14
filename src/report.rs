//! Accumulating, rendering and exporting timing results

use std::path::Path;

use anyhow::Context as _;

use crate::corpus::RepeatClass;
use crate::structures::StructureTiming;

/// One timing result for a (dataset, variant) pair
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub dataset: String,
    pub variant: String,
    /// Mean elapsed seconds
    pub mean: f64,
    /// Population standard deviation in seconds
    pub std_dev: f64,
}

/// Collects result rows per repeat class and pivots them for export
///
/// Classes with different sample counts never share a table, so numbers of
/// incompatible precision are not averaged together.
#[derive(Debug, Default)]
pub struct Reporter {
    rows: Vec<(RepeatClass, ResultRow)>,
}

/// The wide table for one repeat class: rows are datasets, columns are
/// variants, cells are mean elapsed seconds
#[derive(Debug)]
pub struct Pivot {
    /// Column headers in first-seen order
    pub variants: Vec<String>,
    /// `(dataset, cells)` rows in first-seen order; a missing combination
    /// stays `None`
    pub rows: Vec<(String, Vec<Option<f64>>)>,
}

impl Reporter {
    pub fn new() -> Reporter {
        Reporter::default()
    }

    /// Record one result under its repeat class
    pub fn add(&mut self, class: RepeatClass, row: ResultRow) {
        self.rows.push((class, row));
    }

    /// The rows recorded for `class`, in insertion order
    pub fn rows(&self, class: RepeatClass) -> impl Iterator<Item = &ResultRow> {
        self.rows
            .iter()
            .filter(move |(row_class, _)| *row_class == class)
            .map(|(_, row)| row)
    }

    /// Return whether no rows were recorded for `class`
    pub fn is_empty(&self, class: RepeatClass) -> bool {
        self.rows(class).next().is_none()
    }

    /// Pivot the rows of `class` into the wide dataset-by-variant table
    pub fn pivot(&self, class: RepeatClass) -> Pivot {
        let mut variants: Vec<String> = Vec::new();
        let mut rows: Vec<(String, Vec<Option<f64>>)> = Vec::new();

        for row in self.rows(class) {
            let column = match variants.iter().position(|variant| *variant == row.variant) {
                Some(column) => column,
                None => {
                    variants.push(row.variant.clone());
                    variants.len() - 1
                }
            };

            let index = match rows.iter().position(|(dataset, _)| *dataset == row.dataset) {
                Some(index) => index,
                None => {
                    rows.push((row.dataset.clone(), Vec::new()));
                    rows.len() - 1
                }
            };

            let cells = &mut rows[index].1;
            if cells.len() <= column {
                cells.resize(column + 1, None);
            }
            cells[column] = Some(row.mean);
        }

        for (_, cells) in &mut rows {
            cells.resize(variants.len(), None);
        }

        Pivot { variants, rows }
    }

    /// Write the wide pivot for `class` as CSV
    pub fn write_pivot_csv(&self, class: RepeatClass, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.pivot_csv(class))
            .with_context(|| format!("writing {}", path.display()))
    }

    fn pivot_csv(&self, class: RepeatClass) -> String {
        let pivot = self.pivot(class);

        let mut out = String::from("Filename");
        for variant in &pivot.variants {
            out.push(',');
            out.push_str(&csv_field(variant));
        }
        out.push('\n');

        for (dataset, cells) in &pivot.rows {
            out.push_str(&csv_field(dataset));
            for cell in cells {
                out.push(',');
                if let Some(mean) = cell {
                    out.push_str(&mean.to_string());
                }
            }
            out.push('\n');
        }

        out
    }
}

/// Quote a field when it contains a separator or quote
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Print the per-dataset timing table
pub fn print_dataset_table(dataset: &str, runs: usize, rows: &[ResultRow]) {
    let width = rows
        .iter()
        .map(|row| row.variant.len())
        .max()
        .unwrap_or(0)
        .max("Algorithm".len());

    println!("Sorting times for {dataset} ({runs} runs)");
    println!("{:<width$}  {:>14}  {:>14}", "Algorithm", "Avg Time (s)", "Std Dev (s)");
    for row in rows {
        println!(
            "{:<width$}  {:>14.6}  {:>14.6}",
            row.variant, row.mean, row.std_dev
        );
    }
}

/// Print the per-size structures table, timings first, operation counts after
pub fn print_structures_table(size: usize, results: &[StructureTiming]) {
    let width = results
        .iter()
        .map(|result| result.structure.len())
        .max()
        .unwrap_or(0)
        .max("Structure".len());

    println!("\nOperation times for {size} elements");
    println!(
        "{:<width$}  {:>12}  {:>12}  {:>12}",
        "Structure", "Insert (s)", "Search (s)", "Delete (s)"
    );
    for result in results {
        println!(
            "{:<width$}  {:>12.6}  {:>12.6}  {:>12.6}",
            result.structure,
            result.insert.as_secs_f64(),
            result.search.as_secs_f64(),
            result.delete.as_secs_f64()
        );
    }

    println!("Operations performed (insert/search/delete)");
    for result in results {
        let (inserted, searched, deleted) = result.counts;
        println!("{:<width$}  {inserted} / {searched} / {deleted}", result.structure);
    }
}

/// Write the structures suite results as CSV, one row per size and structure
pub fn write_structures_csv(
    path: &Path,
    results: &[(usize, Vec<StructureTiming>)],
) -> anyhow::Result<()> {
    let mut out =
        String::from("Size,Structure,Insert (s),Search (s),Delete (s),Inserted,Searched,Deleted\n");

    for (size, timings) in results {
        for timing in timings {
            let (inserted, searched, deleted) = timing.counts;
            out.push_str(&format!(
                "{size},{structure},{insert},{search},{delete},{inserted},{searched},{deleted}\n",
                structure = csv_field(timing.structure),
                insert = timing.insert.as_secs_f64(),
                search = timing.search.as_secs_f64(),
                delete = timing.delete.as_secs_f64(),
            ));
        }
    }

    std::fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}
