use std::fmt;
use std::str::FromStr;

/// Sorts a slice in place with bubble sort. Every pass walks the unsorted prefix from left to right
/// and swaps neighbours that are out of order, so after pass `i` the last `i + 1` elements are in
/// their final position. There is no early exit: an already sorted slice still costs the full
/// n² / 2 comparisons, which keeps the timings comparable between runs.
///
/// # Parameters
/// - `data` the slice to sort, overwritten with its elements in non-decreasing order
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Sorts a whole slice in place with quicksort. See [`quick_sort_range`].
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    if data.is_empty() {
        return;
    }
    let high = data.len() - 1;
    quick_sort_range(data, 0, high);
}

/// Sorts the inclusive range `[low, high]` of a slice in place, using the last element of every
/// range as the pivot.
///
/// Only the smaller side of each partition is handled by a recursive call, the larger side is
/// processed by the loop. The stack depth is therefore bounded by log2 of the range length, even
/// for sorted or adversarial input where the partitions degenerate.
///
/// # Parameters
/// - `data` the slice containing the range
/// - `low` first index of the range
/// - `high` last index of the range, must be smaller than `data.len()` unless the range is empty
pub fn quick_sort_range<T: Ord>(data: &mut [T], mut low: usize, mut high: usize) {
    while low < high {
        let pivot = partition(data, low, high);

        if pivot - low < high - pivot {
            if pivot > low {
                quick_sort_range(data, low, pivot - 1);
            }
            low = pivot + 1;
        } else {
            // the left side is at least as long as the right one and not empty, so pivot > low
            quick_sort_range(data, pivot + 1, high);
            high = pivot - 1;
        }
    }
}

/// Lomuto partition of the inclusive range `[low, high]` around `data[high]`.
///
/// # Returns
/// The final index of the pivot. All elements left of it are less than or equal to the pivot, all
/// elements right of it are greater.
pub fn partition<T: Ord>(data: &mut [T], low: usize, high: usize) -> usize {
    let mut store = low;
    for j in low..high {
        if data[j] <= data[high] {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}

/// The sorting algorithms offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::Bubble, SortAlgorithm::Quick];

    /// Human readable name, as printed after a sort.
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Quick => "Quick Sort",
        }
    }

    /// Sorts `data` in place with this algorithm.
    pub fn sort<T: Ord>(&self, data: &mut [T]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(data),
            SortAlgorithm::Quick => quick_sort(data),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "quick" | "quicksort" => Ok(SortAlgorithm::Quick),
            other => Err(format!(
                "unknown sorting algorithm '{}', expected 'bubble' or 'quick'",
                other
            )),
        }
    }
}
