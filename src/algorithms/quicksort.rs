//! Quicksort with a pluggable pivot selection rule

use rand::Rng;

/// Selects which element of `slice[low..=high]` anchors a partition step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotRule {
    /// The first element of the range
    First,
    /// The last element of the range
    Last,
    /// The middle index of the range
    Middle,
    /// A uniformly random index in the range
    Random,
    /// The index holding the median of the first, middle and last values
    MedianOfThree,
}

impl PivotRule {
    /// Every rule, in reporting order
    pub const ALL: [PivotRule; 5] = [
        PivotRule::First,
        PivotRule::Last,
        PivotRule::Middle,
        PivotRule::Random,
        PivotRule::MedianOfThree,
    ];

    /// Pick the pivot index within `low..=high`
    fn pick<T: Ord, R: Rng>(self, slice: &[T], low: usize, high: usize, rng: &mut R) -> usize {
        match self {
            PivotRule::First => low,
            PivotRule::Last => high,
            PivotRule::Middle => low + (high - low) / 2,
            PivotRule::Random => rng.random_range(low..=high),
            PivotRule::MedianOfThree => {
                let middle = low + (high - low) / 2;
                let indices = &mut [low, middle, high];
                indices.sort_by_key(|index| &slice[*index]);
                indices[1]
            }
        }
    }
}

impl std::fmt::Display for PivotRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PivotRule::First => "First Pivot",
            PivotRule::Last => "Last Pivot",
            PivotRule::Middle => "Middle Pivot",
            PivotRule::Random => "Random Pivot",
            PivotRule::MedianOfThree => "Median of Three Pivot",
        })
    }
}

/// Partition `slice[low..=high]` around the element chosen by `rule`
///
/// The pivot is swapped to `low`, then a single left-to-right scan keeps `i`
/// as the boundary of elements known to be less than the pivot. The pivot is
/// finally swapped to its resting position `i - 1`, which is returned. Equal
/// elements count as "not less" and stay on the high side.
fn partition<T: Ord, R: Rng>(
    slice: &mut [T],
    low: usize,
    high: usize,
    rule: PivotRule,
    rng: &mut R,
) -> usize {
    let pivot_index = rule.pick(slice, low, high, rng);
    slice.swap(low, pivot_index);

    let mut i = low + 1;
    for j in low + 1..=high {
        if slice[j] < slice[low] {
            slice.swap(i, j);
            i += 1;
        }
    }

    slice.swap(low, i - 1);
    i - 1
}

/// Quicksort `slice` with the given pivot rule, drawing random pivots from `rng`
///
/// Runs iteratively over an explicit stack of inclusive ranges, so an
/// adversarial rule/input combination degrades to quadratic time but cannot
/// exhaust the native call stack. Empty and single-element slices push no
/// ranges at all.
pub fn quicksort_with_rng<T: Ord, R: Rng>(slice: &mut [T], rule: PivotRule, rng: &mut R) {
    if slice.len() < 2 {
        return;
    }

    let mut ranges = vec![(0, slice.len() - 1)];
    while let Some((low, high)) = ranges.pop() {
        let pivot = partition(slice, low, high, rule, rng);

        // Only ranges of two or more elements need further partitioning
        if pivot > low + 1 {
            ranges.push((low, pivot - 1));
        }
        if pivot + 1 < high {
            ranges.push((pivot + 1, high));
        }
    }
}

/// Quicksort `slice` using the default [`rand::rng()`]
pub fn quicksort<T: Ord>(slice: &mut [T], rule: PivotRule) {
    let mut rng = rand::rng();
    quicksort_with_rng(slice, rule, &mut rng);
}
