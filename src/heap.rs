/// Binary max-heap over a borrowed slice. `heap_size` can be shorter than
/// the slice, so sorted elements can accumulate past the heap's end.
pub struct MaxHeap<'a, T: Ord> {
    data: &'a mut [T],
    heap_size: usize,
}

impl<'a, T: Ord> MaxHeap<'a, T> {
    pub fn build(data: &'a mut [T]) -> Self {
        let heap_size = data.len();
        let mut heap = Self { data, heap_size };
        for i in (0..heap_size / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    // Subtrees of i already satisfy the heap property; repair at i.
    fn sift_down(&mut self, mut i: usize) {
        loop {
            let mut largest = i;
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            if left < self.heap_size && self.data[left] > self.data[largest] {
                largest = left;
            }
            if right < self.heap_size && self.data[right] > self.data[largest] {
                largest = right;
            }
            if largest == i {
                return;
            }
            self.data.swap(i, largest);
            i = largest;
        }
    }
}

/// Sorts ascending in place, O(n log n) time, O(1) extra space.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let mut heap = MaxHeap::build(data);
    for last in (1..heap.data.len()).rev() {
        heap.data.swap(0, last);
        heap.heap_size -= 1;
        heap.sift_down(0);
    }
}
