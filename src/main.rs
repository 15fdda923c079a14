use std::path::Path;

use clap::Parser as _;
use rand::SeedableRng as _;

mod algorithms;
mod cli;
mod corpus;
mod data;
mod harness;
mod report;
mod structures;

#[cfg(test)]
mod test;

/// Program entry point
fn main() -> anyhow::Result<()> {
    let cli::Args { command } = cli::Args::parse();

    match command {
        cli::Command::Generate { dir, seed } => {
            let mut rng = make_rng(seed);
            data::write_corpus(&dir, &mut rng)
        }
        cli::Command::Run {
            suite,
            dir,
            out,
            seed,
        } => match suite.sort_variants() {
            Some(variants) => run_sort_suite(suite, &variants, &dir, &out),
            None => run_structures(&out, &mut make_rng(seed)),
        },
    }
}

/// Create the rng, seeding from the system when no seed was given
fn make_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => {
            println!("No seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    }
}

/// Time every suite variant over every dataset in `dir` and export the results
fn run_sort_suite(
    suite: cli::Suite,
    variants: &[(String, algorithms::SortVariant)],
    dir: &Path,
    out: &Path,
) -> anyhow::Result<()> {
    let datasets = corpus::load_corpus(dir)?;
    anyhow::ensure!(!datasets.is_empty(), "no datasets found in {}", dir.display());

    println!(
        "Running suite {suite}: {variant_count} variants over {dataset_count} datasets",
        variant_count = variants.len(),
        dataset_count = datasets.len(),
    );
    for (label, variant) in variants {
        println!("  {label} (stable: {stable})", stable = variant.is_stable());
    }

    let mut reporter = report::Reporter::new();

    for dataset in &datasets {
        let runs = dataset.repeats.runs();
        println!(
            "\nProcessing {name} ({len} values, {runs} runs per variant)",
            name = dataset.name,
            len = dataset.values.len(),
        );

        let bar = indicatif::ProgressBar::new((runs * variants.len()) as u64);
        let mut rows = Vec::with_capacity(variants.len());

        for (label, variant) in variants {
            let timing = harness::sample(
                &dataset.values,
                runs,
                |slice| variant.run(slice),
                |_| bar.inc(1),
            );
            bar.println(format!("{label}: {stats:?}", stats = timing.stats));

            rows.push(report::ResultRow {
                dataset: dataset.name.clone(),
                variant: label.clone(),
                mean: timing.mean(),
                std_dev: timing.std_dev(),
            });
        }

        bar.finish_and_clear();
        report::print_dataset_table(&dataset.name, runs, &rows);

        for row in rows {
            reporter.add(dataset.repeats, row);
        }
    }

    export_sort_results(suite, &reporter, out)
}

/// Write one wide CSV per populated repeat class
fn export_sort_results(
    suite: cli::Suite,
    reporter: &report::Reporter,
    out: &Path,
) -> anyhow::Result<()> {
    use anyhow::Context as _;

    std::fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;

    for (class, suffix) in [
        (corpus::RepeatClass::Ten, "10_repeats"),
        (corpus::RepeatClass::Single, "1_repeat"),
    ] {
        if reporter.is_empty(class) {
            continue;
        }

        let path = out.join(format!("{suite}_results_{suffix}.csv"));
        reporter.write_pivot_csv(class, &path)?;
        println!("Results saved to {}", path.display());
    }

    Ok(())
}

/// Time the basic structures over generated random data and export the results
fn run_structures(out: &Path, rng: &mut rand::rngs::StdRng) -> anyhow::Result<()> {
    use anyhow::Context as _;

    let mut all = Vec::with_capacity(structures::SIZES.len());
    for size in structures::SIZES {
        let keys = structures::generate_keys(size, rng);
        let results = structures::benchmark_structures(&keys);

        report::print_structures_table(size, &results);
        all.push((size, results));
    }

    std::fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;
    let path = out.join("structure_results.csv");
    report::write_structures_csv(&path, &all)?;
    println!("\nResults saved to {}", path.display());

    Ok(())
}
