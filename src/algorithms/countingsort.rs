//! Counting sort over machine integers

/// Sort `slice` by counting value occurrences. Not comparison-based.
///
/// The auxiliary array spans `max - min + 1` counters, so callers must only
/// apply this to data whose value range fits in memory; the range is not
/// checked here. Equal values are emitted in generation order, which makes
/// the sort stable by construction (indistinguishable for plain integers).
pub fn counting_sort(slice: &mut [i64]) {
    // No min or max exists to span the counters on an empty slice
    let (Some(&min), Some(&max)) = (slice.iter().min(), slice.iter().max()) else {
        return;
    };

    let mut counts = vec![0usize; max.abs_diff(min) as usize + 1];
    for value in slice.iter() {
        counts[value.abs_diff(min) as usize] += 1;
    }

    let mut index = 0;
    for (offset, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            slice[index] = min + offset as i64;
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 100;
    const TEST_SIZE: usize = 10_000;

    #[test]
    fn empty_and_single() {
        crate::test::check_empty_and_single(counting_sort);
    }

    #[test]
    fn random() {
        crate::test::check_sorts_random::<RUNS, TEST_SIZE, _>(counting_sort);
    }

    #[test]
    fn example() {
        let mut values = [5, 3, 1, 4, 2];
        counting_sort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn negative_values() {
        let mut values = [3, -1, 0, -5, 3, 2, -1];
        counting_sort(&mut values);
        assert_eq!(values, [-5, -1, -1, 0, 2, 3, 3]);
    }
}
