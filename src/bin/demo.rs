//! Sorts one small sample array with each algorithm and prints the results.

use sortbench::{heap_sort, insertion_sort, merge_sort};

fn main() {
    let sample = [5u64, 3, 8, 1, 2, 2, 7, 0];
    println!("unsorted:       {sample:?}");

    let mut data = sample;
    heap_sort(&mut data);
    println!("heap sort:      {data:?}");

    let mut data = sample;
    insertion_sort(&mut data);
    println!("insertion sort: {data:?}");

    let mut data = sample;
    merge_sort(&mut data);
    println!("merge sort:     {data:?}");
}
