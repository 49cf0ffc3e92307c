/// Sorts ascending in place, O(n²) time, O(1) extra space, stable.
///
/// Only practical for small inputs; the benchmark harness stops invoking it
/// past its configured cutoff.
pub fn insertion_sort<T: Ord + Copy>(data: &mut [T]) {
    for j in 1..data.len() {
        let key = data[j];
        let mut i = j;
        // strict > keeps equal keys in their original order
        while i > 0 && data[i - 1] > key {
            data[i] = data[i - 1];
            i -= 1;
        }
        data[i] = key;
    }
}
