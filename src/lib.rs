//! Classic algorithms for teaching: bubble sort, quicksort, factorial and the Towers of Hanoi,
//! together with the interactive menu that demonstrates them.

pub mod config;
pub mod demo;
pub mod error;
pub mod factorial;
pub mod hanoi;
pub mod input;
pub mod menu;
pub mod sort;
pub mod util;

pub use config::{Config, Limits};
pub use error::{Error, InputError, Result};
pub use factorial::{big_factorial, checked_factorial, factorial};
pub use hanoi::Move;
pub use input::{parse_integer_list, parse_non_negative_int};
pub use menu::Session;
pub use sort::{bubble_sort, partition, quick_sort, quick_sort_range, SortAlgorithm};
