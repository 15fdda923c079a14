//! Insertion sort

/// Sort `slice` by swapping each element backwards into place. Stable.
pub fn insertion_sort<T: Ord>(slice: &mut [T]) {
    for i in 1..slice.len() {
        for j in (0..i).rev() {
            if slice[j + 1] < slice[j] {
                slice.swap(j + 1, j);
            } else {
                break;
            }
        }
    }
}
