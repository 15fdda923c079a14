//! Generating the benchmark input corpus

use std::path::Path;

use anyhow::Context as _;
use rand::Rng;
use rand_distr::{Distribution as _, Zipf};

/// Values in the uniform random files are drawn from this range
const VALUE_RANGE: std::ops::RangeInclusive<i64> = 0..=1_000_000;

/// Sizes in thousands of elements for the bulk uniform files
const BULK_SIZES_K: [usize; 10] = [2, 4, 6, 8, 10, 20, 40, 60, 80, 100];

/// Sizes in thousands for the structured and adversarial families
const STRUCTURED_SIZES_K: [usize; 2] = [2, 10];

/// The input orderings and adversarial families the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Uniform random values
    Random,
    /// `1..=len` in ascending order
    Ascending,
    /// `1..=len` in descending order
    Descending,
    /// Uniform random values over `1..=len/2`, forcing duplicates
    FewUniques,
    /// Rank-skewed values from a Zipf distribution
    Zipfian,
    /// An ascending run with one random element moved to the front
    FrontOutlier,
    /// An ascending run with one random element moved to the back
    BackOutlier,
    /// Odd values ascending, then even values ascending
    OddEven,
}

impl Pattern {
    /// Generate `len` values with this pattern
    pub fn generate<R: Rng>(self, len: usize, rng: &mut R) -> Vec<i64> {
        match self {
            Pattern::Random => (0..len).map(|_| rng.random_range(VALUE_RANGE)).collect(),
            Pattern::Ascending => (1..=len as i64).collect(),
            Pattern::Descending => (1..=len as i64).rev().collect(),
            Pattern::FewUniques => {
                let max = (len as i64 / 2).max(1);
                (0..len).map(|_| rng.random_range(1..=max)).collect()
            }
            Pattern::Zipfian => {
                let zipf = Zipf::new(len.max(1) as f64, 1.0).unwrap();
                (0..len).map(|_| zipf.sample(rng) as i64).collect()
            }
            Pattern::FrontOutlier => {
                let mut values: Vec<i64> = (1..=len as i64).collect();
                if values.len() > 1 {
                    let index = rng.random_range(1..values.len());
                    let value = values.remove(index);
                    values.insert(0, value);
                }
                values
            }
            Pattern::BackOutlier => {
                let mut values: Vec<i64> = (1..=len as i64).collect();
                if values.len() > 1 {
                    let index = rng.random_range(0..values.len() - 1);
                    let value = values.remove(index);
                    values.push(value);
                }
                values
            }
            Pattern::OddEven => {
                let odd = (1..=len as i64).filter(|value| value % 2 != 0);
                let even = (1..=len as i64).filter(|value| value % 2 == 0);
                odd.chain(even).collect()
            }
        }
    }
}

/// Generate the benchmark corpus under `dir`, one integer per line per file
///
/// The structured and adversarial families carry the `WL`/`WP1R`/`WK1R` name
/// markers, so the loader assigns them a single timed run.
pub fn write_corpus<R: Rng>(dir: &Path, rng: &mut R) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating corpus directory {}", dir.display()))?;

    let write = |name: String, values: Vec<i64>| -> anyhow::Result<()> {
        let mut content = String::new();
        for value in &values {
            content.push_str(&value.to_string());
            content.push('\n');
        }

        let path = dir.join(&name);
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
        Ok(())
    };

    for s in BULK_SIZES_K {
        let len = s * 1_000;
        write(format!("{s}k_random.txt"), Pattern::Random.generate(len, rng))?;

        // Structured orders only at sizes the quadratic sorts can take
        if s <= 10 {
            write(
                format!("{s}k_ascending.txt"),
                Pattern::Ascending.generate(len, rng),
            )?;
            write(
                format!("{s}k_descending.txt"),
                Pattern::Descending.generate(len, rng),
            )?;
        }
    }

    for s in STRUCTURED_SIZES_K {
        let len = s * 1_000;
        write(
            format!("WL{s}k_fewuniques.txt"),
            Pattern::FewUniques.generate(len, rng),
        )?;
        write(format!("WL{s}k_zipf.txt"), Pattern::Zipfian.generate(len, rng))?;
        write(format!("WP1R{s}k.txt"), Pattern::FrontOutlier.generate(len, rng))?;
        write(format!("WK1R{s}k.txt"), Pattern::BackOutlier.generate(len, rng))?;
    }

    write("WNRPR2k.txt".to_string(), Pattern::OddEven.generate(2_000, rng))?;

    Ok(())
}
