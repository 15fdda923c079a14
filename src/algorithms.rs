//! The sorting algorithms and their strategy parameters

pub mod countingsort;
pub mod heapsort;
pub mod insertionsort;
pub mod mergesort;
pub mod quicksort;
pub mod selectionsort;
pub mod shellsort;

use quicksort::PivotRule;
use shellsort::GapSequence;

/// A runnable algorithm variant, named for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortVariant {
    /// Quicksort under the given pivot rule
    Quicksort(PivotRule),
    /// Shellsort under the given gap sequence
    Shellsort(GapSequence),
    /// Top-down mergesort
    Mergesort,
    /// Insertion sort
    Insertion,
    /// Selection sort
    Selection,
    /// Heapsort
    Heap,
    /// Counting sort
    Counting,
}

impl SortVariant {
    /// The variants timed by the pivot comparison suite, labelled by rule
    pub fn pivot_suite() -> Vec<(String, SortVariant)> {
        PivotRule::ALL
            .iter()
            .map(|&rule| (rule.to_string(), SortVariant::Quicksort(rule)))
            .collect()
    }

    /// The variants timed by the gap sequence comparison suite, labelled by sequence
    pub fn gap_suite() -> Vec<(String, SortVariant)> {
        GapSequence::ALL
            .iter()
            .map(|&sequence| (sequence.to_string(), SortVariant::Shellsort(sequence)))
            .collect()
    }

    /// The variants timed by the full algorithm comparison suite
    pub fn sort_suite() -> Vec<(String, SortVariant)> {
        [
            SortVariant::Quicksort(PivotRule::Middle),
            SortVariant::Shellsort(GapSequence::Knuth),
            SortVariant::Mergesort,
            SortVariant::Insertion,
            SortVariant::Selection,
            SortVariant::Heap,
            SortVariant::Counting,
        ]
        .into_iter()
        .map(|variant| (variant.to_string(), variant))
        .collect()
    }

    /// Sort `slice` in place with this variant
    pub fn run(self, slice: &mut [i64]) {
        match self {
            SortVariant::Quicksort(rule) => quicksort::quicksort(slice, rule),
            SortVariant::Shellsort(sequence) => shellsort::shellsort(slice, sequence),
            SortVariant::Mergesort => mergesort::mergesort(slice),
            SortVariant::Insertion => insertionsort::insertion_sort(slice),
            SortVariant::Selection => selectionsort::selection_sort(slice),
            SortVariant::Heap => heapsort::heap_sort(slice),
            SortVariant::Counting => countingsort::counting_sort(slice),
        }
    }

    /// Return whether the sort keeps equal elements in their input order
    pub fn is_stable(self) -> bool {
        match self {
            SortVariant::Mergesort | SortVariant::Insertion | SortVariant::Counting => true,
            SortVariant::Quicksort(_)
            | SortVariant::Shellsort(_)
            | SortVariant::Selection
            | SortVariant::Heap => false,
        }
    }
}

impl std::fmt::Display for SortVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortVariant::Quicksort(rule) => write!(f, "QuickSort ({rule})"),
            SortVariant::Shellsort(sequence) => write!(f, "ShellSort ({})", sequence.name()),
            SortVariant::Mergesort => f.write_str("MergeSort"),
            SortVariant::Insertion => f.write_str("InsertionSort"),
            SortVariant::Selection => f.write_str("SelectionSort"),
            SortVariant::Heap => f.write_str("HeapSort"),
            SortVariant::Counting => f.write_str("CountingSort"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 10;
    const TEST_SIZE: usize = 500;

    fn all_variants() -> Vec<(String, SortVariant)> {
        let mut variants = SortVariant::pivot_suite();
        variants.extend(SortVariant::gap_suite());
        variants.extend(SortVariant::sort_suite());
        variants
    }

    #[test]
    fn every_variant_sorts() {
        for (_, variant) in all_variants() {
            crate::test::check_sorts_random::<RUNS, TEST_SIZE, _>(|slice| variant.run(slice));
        }
    }

    #[test]
    fn suite_labels() {
        let pivot_labels: Vec<String> = SortVariant::pivot_suite()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(
            pivot_labels,
            [
                "First Pivot",
                "Last Pivot",
                "Middle Pivot",
                "Random Pivot",
                "Median of Three Pivot",
            ]
        );

        let gap_labels: Vec<String> = SortVariant::gap_suite()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(
            gap_labels,
            [
                "Shell Sequence",
                "Knuth Sequence",
                "Hibbard Sequence",
                "Sedgewick Sequence",
            ]
        );

        let sort_labels: Vec<String> = SortVariant::sort_suite()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(
            sort_labels,
            [
                "QuickSort (Middle Pivot)",
                "ShellSort (Knuth)",
                "MergeSort",
                "InsertionSort",
                "SelectionSort",
                "HeapSort",
                "CountingSort",
            ]
        );
    }

    #[test]
    fn stability_flags() {
        for (_, variant) in all_variants() {
            let expected = matches!(
                variant,
                SortVariant::Mergesort | SortVariant::Insertion | SortVariant::Counting
            );
            assert_eq!(variant.is_stable(), expected);
        }
    }
}
