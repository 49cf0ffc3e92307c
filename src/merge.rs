/// Sorts ascending in place, O(n log n) time, O(n) auxiliary space, stable.
pub fn merge_sort<T: Ord + Copy>(data: &mut [T]) {
    if data.len() > 1 {
        let last = data.len() - 1;
        sort_range(data, 0, last);
    }
}

// Inclusive range [left, right].
fn sort_range<T: Ord + Copy>(data: &mut [T], left: usize, right: usize) {
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(data, left, mid);
        sort_range(data, mid + 1, right);
        merge(data, left, mid, right);
    }
}

// The halves are copied into heap-allocated buffers; stack buffers would
// overflow once the ranges get large.
fn merge<T: Ord + Copy>(data: &mut [T], left: usize, mid: usize, right: usize) {
    let left_half = data[left..=mid].to_vec();
    let right_half = data[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    for k in left..=right {
        // <= lets the left half win ties, keeping equal keys in order
        if j >= right_half.len() || (i < left_half.len() && left_half[i] <= right_half[j]) {
            data[k] = left_half[i];
            i += 1;
        } else {
            data[k] = right_half[j];
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cmp::Ordering;

    #[test]
    fn sorts_small_array() {
        let mut data = vec![5, 3, 8, 1];
        merge_sort(&mut data);
        assert_eq!(data, vec![1, 3, 5, 8]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: Vec<u64> = vec![];
        merge_sort(&mut empty);
        assert_eq!(empty, vec![]);

        let mut single = vec![3u64];
        merge_sort(&mut single);
        assert_eq!(single, vec![3]);
    }

    #[test]
    fn already_sorted_is_unchanged() {
        let mut data = vec![1, 2, 2, 3, 5, 8];
        merge_sort(&mut data);
        assert_eq!(data, vec![1, 2, 2, 3, 5, 8]);
    }

    #[test]
    fn sorts_random_input() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut data: Vec<u64> = (0..1000).map(|_| rng.gen_range(0..=32767)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();
        merge_sort(&mut data);
        assert_eq!(data, expected);
    }

    // Ordered by key alone so a sort cannot hide instability behind the tag.
    #[derive(Debug, Clone, Copy, Eq)]
    struct Tagged {
        key: u64,
        idx: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut data: Vec<Tagged> = [2, 2, 1, 2]
            .into_iter()
            .enumerate()
            .map(|(idx, key)| Tagged { key, idx })
            .collect();
        merge_sort(&mut data);
        let order: Vec<(u64, usize)> = data.iter().map(|t| (t.key, t.idx)).collect();
        assert_eq!(order, vec![(1, 2), (2, 0), (2, 1), (2, 3)]);
    }
}
