use std::time::Duration;

use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

/// Generates a vector of uniformly random integers over the whole `i32` range.
pub fn generate_random_data(amount: usize) -> Vec<i32> {
    let mut rng = thread_rng();
    let uniform = Uniform::new_inclusive(i32::MIN, i32::MAX);

    let mut data = Vec::with_capacity(amount);
    for _ in 0..amount {
        data.push(rng.sample(&uniform));
    }

    data
}

/// Formats a duration as seconds with nanosecond precision, e.g. `0.000012345`.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.9}", elapsed.as_secs_f64())
}
