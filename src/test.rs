//! Shared checks driving the per-module sort tests

use rand::{SeedableRng as _, seq::SliceRandom as _};

/// The seed shared by all tests
pub const TEST_SEED: u64 = 0xa3c1_9e77_204b_5d12;

/// The rng used by each test
pub type Rng = rand::rngs::SmallRng;

/// Generate the `Rng` for a test
pub fn test_rng() -> Rng {
    Rng::seed_from_u64(TEST_SEED)
}

/// Check that `sorted` is a reordering of `original`, no elements lost or created
pub fn is_permutation(original: &[i64], sorted: &[i64]) -> bool {
    let mut expected = original.to_vec();
    expected.sort_unstable();
    let mut actual = sorted.to_vec();
    actual.sort_unstable();
    expected == actual
}

/// Run `sort` over shuffled permutations and duplicate-heavy slices, checking
/// every result is a non-decreasing permutation of its input and that sorting
/// an already-sorted slice leaves it unchanged
pub fn check_sorts_random<const RUNS: usize, const TEST_SIZE: usize, F: FnMut(&mut [i64])>(
    mut sort: F,
) {
    let mut rng = test_rng();

    let mut values: Vec<i64> = (0..TEST_SIZE as i64).collect();
    for run in 0..RUNS {
        values.shuffle(&mut rng);
        let original = values.clone();

        sort(&mut values);
        assert!(values.is_sorted(), "Run {run} was not sorted");
        assert!(
            is_permutation(&original, &values),
            "Run {run} lost or created elements"
        );

        let once = values.clone();
        sort(&mut values);
        assert_eq!(values, once, "Run {run} was not idempotent");
    }

    let mut values: Vec<i64> = std::iter::repeat_n(0..(TEST_SIZE / 4) as i64, 4)
        .flatten()
        .collect();
    for run in 0..RUNS {
        values.shuffle(&mut rng);
        let original = values.clone();

        sort(&mut values);
        assert!(values.is_sorted(), "Run {run} was not sorted");
        assert!(
            is_permutation(&original, &values),
            "Run {run} lost or created elements"
        );
    }
}

/// Like [`check_sorts_random`] but additionally checks that equal elements
/// keep their input order
pub fn check_sorts_stable<
    const RUNS: usize,
    const TEST_SIZE: usize,
    F: FnMut(&mut [IndexedOrdered<i64>]),
>(
    mut sort: F,
) {
    let mut rng = test_rng();
    let mut values: Vec<i64> = std::iter::repeat_n(0..(TEST_SIZE / 4) as i64, 4)
        .flatten()
        .collect();

    for run in 0..RUNS {
        values.shuffle(&mut rng);
        let mut ordered: Vec<IndexedOrdered<i64>> =
            IndexedOrdered::map_iter(values.iter().copied()).collect();

        sort(&mut ordered);
        assert!(
            IndexedOrdered::is_stable_sorted(&ordered),
            "Run {run} was not stable sorted"
        );
    }
}

/// Check `sort` treats empty and single-element slices as a no-op success
pub fn check_empty_and_single<F: FnMut(&mut [i64])>(mut sort: F) {
    let mut empty: [i64; 0] = [];
    sort(&mut empty);

    let mut single = [7];
    sort(&mut single);
    assert_eq!(single, [7]);
}

/// A wrapper tracking an element's original index, used to check sort results
/// for stability
#[derive(Debug, Clone)]
pub struct IndexedOrdered<T: Ord>(usize, T);

impl<T: Ord> IndexedOrdered<T> {
    /// Create a new iterator of `IndexedOrdered`, tracking the position of
    /// each element in `iter`
    pub fn map_iter(iter: impl Iterator<Item = T>) -> impl Iterator<Item = Self> {
        iter.enumerate()
            .map(|(index, element)| Self(index, element))
    }

    /// Check `slice` is sorted and that equal elements kept their initial order
    pub fn is_stable_sorted(slice: &[Self]) -> bool {
        if slice.len() < 2 {
            return true;
        }

        let mut previous = &slice[0];
        for current in slice[1..].iter() {
            match current.cmp(previous) {
                // Slice is not sorted
                std::cmp::Ordering::Less => return false,
                // Elements are not stable
                std::cmp::Ordering::Equal if current.0 < previous.0 => return false,
                _ => {}
            }

            previous = current;
        }

        true
    }
}

impl<T: Ord> PartialEq for IndexedOrdered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<T: Ord> Eq for IndexedOrdered<T> {}

impl<T: Ord> PartialOrd for IndexedOrdered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for IndexedOrdered<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.1.cmp(&other.1)
    }
}
