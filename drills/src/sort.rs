//! In-place selection sort.

/// Sort `values` ascending by repeatedly swapping the minimum of the
/// unsorted suffix into place. O(n²) comparisons.
pub fn selection_sort(values: &mut [i64]) {
    for i in 0..values.len() {
        let mut min_index = i;
        for j in i + 1..values.len() {
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        values.swap(i, min_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn sorts_unordered_input() {
        let mut values = vec![3, 1, 2];
        selection_sort(&mut values);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn sorted_and_reversed_inputs_agree() {
        let mut ascending = vec![1, 2, 3, 4];
        let mut descending = vec![4, 3, 2, 1];
        selection_sort(&mut ascending);
        selection_sort(&mut descending);
        assert_eq!(ascending, descending);
    }

    #[test]
    fn resorting_is_idempotent() {
        let mut values = vec![5, -2, 9, 0, 5];
        selection_sort(&mut values);
        let once = values.clone();
        selection_sort(&mut values);
        assert_eq!(values, once);
    }

    #[test]
    fn handles_empty_and_single_element() {
        let mut empty: Vec<i64> = Vec::new();
        selection_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        selection_sort(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn agrees_with_std_sort_on_random_input() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let len = rng.gen_range(0..64);
            let mut values: Vec<i64> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
            let mut expected = values.clone();
            expected.sort_unstable();
            selection_sort(&mut values);
            assert_eq!(values, expected);
        }
    }
}
