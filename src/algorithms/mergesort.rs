//! Top-down mergesort

/// Sort `slice` using stable top-down mergesort
///
/// Splits at the midpoint, recurses on both halves and merges them with one
/// `O(n)` scratch copy per merge. Recursion depth is logarithmic in the
/// slice length.
pub fn mergesort<T: Ord + Clone>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    let middle = slice.len() / 2;
    let (left, right) = slice.split_at_mut(middle);
    mergesort(left);
    mergesort(right);

    // Halves already in order, nothing to merge
    if slice[middle] < slice[middle - 1] {
        merge(slice, middle);
    }
}

/// Merge the sorted halves `slice[..middle]` and `slice[middle..]`
///
/// Ties take from the left half first, which is what keeps the sort stable.
fn merge<T: Ord + Clone>(slice: &mut [T], middle: usize) {
    let left = slice[..middle].to_vec();
    let right = slice[middle..].to_vec();

    let mut i = 0;
    let mut j = 0;
    for slot in slice.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
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
        crate::test::check_empty_and_single(mergesort::<i64>);
    }

    #[test]
    fn random() {
        crate::test::check_sorts_random::<RUNS, TEST_SIZE, _>(mergesort::<i64>);
    }

    #[test]
    fn random_stable() {
        crate::test::check_sorts_stable::<RUNS, TEST_SIZE, _>(mergesort);
    }
}
