//! The four demonstrations, writing their report to any output.
//!
//! Both the interactive menu and the one-shot subcommands go through these functions, so the
//! console output is the same either way.

use std::io::Write;
use std::time::Instant;

use log::{info, warn};
use num::BigUint;

use crate::error::Result;
use crate::factorial::{big_factorial, checked_factorial, factorial};
use crate::hanoi::{self, Move};
use crate::sort::SortAlgorithm;
use crate::util::{format_seconds, generate_random_data};

/// Pegs used by the Hanoi demonstration: source, destination, auxiliary.
pub const HANOI_PEGS: (char, char, char) = ('A', 'C', 'B');

/// Sorts `data` with `algorithm` and prints the original list, the sorted list and the time the
/// sort took.
///
/// # Returns
/// The sorted data
pub fn sort<W: Write>(
    out: &mut W,
    algorithm: SortAlgorithm,
    mut data: Vec<i32>,
) -> Result<Vec<i32>> {
    writeln!(out, "Original list: {:?}", data)?;

    let start = Instant::now();
    algorithm.sort(&mut data);
    let elapsed = start.elapsed();
    info!("{} sorted {} integers in {:?}", algorithm, data.len(), elapsed);

    writeln!(out, "Sorted list using {}: {:?}", algorithm, data)?;
    writeln!(out, "Execution time: {} seconds", format_seconds(elapsed))?;
    writeln!(out)?;
    Ok(data)
}

/// Prints the factorial of `n`. The exact value is printed even where 64-bit arithmetic would
/// overflow; the overflow is logged.
pub fn factorial_report<W: Write>(out: &mut W, n: u32) -> Result<BigUint> {
    if checked_factorial(n).is_none() {
        warn!(
            "{}! does not fit into 64 bits (would wrap to {}), printing the exact value",
            n,
            factorial(n)
        );
    }

    let result = big_factorial(n);
    writeln!(out, "The factorial of {} is: {}", n, result)?;
    writeln!(out)?;
    Ok(result)
}

/// Prints every move of the Hanoi solution for `disks` disks, numbered from 1.
///
/// # Returns
/// The number of moves printed
pub fn hanoi_report<W: Write>(out: &mut W, disks: u32) -> Result<u64> {
    writeln!(out, "Solving Towers of Hanoi with {} disks:", disks)?;

    let (from, to, via) = HANOI_PEGS;
    let mut step = 0u64;
    hanoi::try_solve(disks, from, to, via, |m: Move| {
        step += 1;
        writeln!(out, "Step {}: {}", step, m)
    })?;

    writeln!(out)?;
    info!("solved {} disks in {} moves", disks, step);
    Ok(step)
}

/// Times every sorting algorithm on the same random data of length `size`.
pub fn bench<W: Write>(out: &mut W, size: usize) -> Result<()> {
    let data = generate_random_data(size);

    for algorithm in SortAlgorithm::ALL {
        let mut copy = data.clone();
        let start = Instant::now();
        algorithm.sort(&mut copy);
        let elapsed = start.elapsed();

        debug_assert!(copy.windows(2).all(|w| w[0] <= w[1]));
        writeln!(
            out,
            "{} sorted {} integers in {} seconds",
            algorithm,
            size,
            format_seconds(elapsed)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{bench, factorial_report, hanoi_report, sort};
    use crate::error::Error;
    use crate::sort::SortAlgorithm;
    use num::BigUint;
    use std::io::{self, Write};

    /// Accepts `limit` lines, then fails every write like a closed pipe.
    struct ClosedAfter {
        lines: usize,
        limit: usize,
        attempts: usize,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            if self.lines >= self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"));
            }
            self.lines += buf.iter().filter(|&&b| b == b'\n').count();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sort_report() {
        let mut out = Vec::new();
        let sorted = sort(&mut out, SortAlgorithm::Quick, vec![8, 3, 5, 1, 9]).unwrap();
        assert_eq!(vec![1, 3, 5, 8, 9], sorted);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!("Original list: [8, 3, 5, 1, 9]", lines[0]);
        assert_eq!("Sorted list using Quick Sort: [1, 3, 5, 8, 9]", lines[1]);
        assert!(lines[2].starts_with("Execution time: 0."));
        assert!(lines[2].ends_with(" seconds"));

        // nine decimal places
        let seconds = lines[2]
            .trim_start_matches("Execution time: ")
            .trim_end_matches(" seconds");
        assert_eq!(9, seconds.split('.').nth(1).unwrap().len());
    }

    #[test]
    fn test_factorial_report() {
        let mut out = Vec::new();
        assert_eq!(BigUint::from(120u32), factorial_report(&mut out, 5).unwrap());
        assert_eq!("The factorial of 5 is: 120\n\n", String::from_utf8(out).unwrap());

        let mut out = Vec::new();
        factorial_report(&mut out, 21).unwrap();
        assert_eq!(
            "The factorial of 21 is: 51090942171709440000\n\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn test_hanoi_report() {
        let mut out = Vec::new();
        assert_eq!(3, hanoi_report(&mut out, 2).unwrap());
        let expected = "Solving Towers of Hanoi with 2 disks:\n\
                        Step 1: Move disk 1 from peg A to peg B\n\
                        Step 2: Move disk 2 from peg A to peg C\n\
                        Step 3: Move disk 1 from peg B to peg C\n\n";
        assert_eq!(expected, String::from_utf8(out).unwrap());
    }

    #[test]
    fn test_hanoi_report_stops_on_write_error() {
        // 40 disks would take 2^40 - 1 moves, the report has to give up at the first failed write
        let mut out = ClosedAfter {
            lines: 0,
            limit: 5,
            attempts: 0,
        };
        match hanoi_report(&mut out, 40) {
            Err(Error::Io(e)) => assert_eq!(io::ErrorKind::BrokenPipe, e.kind()),
            other => panic!("expected a write error, got {:?}", other),
        }
        assert_eq!(5, out.lines);
        assert!(out.attempts < 100, "{} writes after the pipe closed", out.attempts);
    }

    #[test]
    fn test_bench_report() {
        let mut out = Vec::new();
        bench(&mut out, 200).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(2, text.lines().count());
        assert!(text.contains("Bubble Sort sorted 200 integers in "));
        assert!(text.contains("Quick Sort sorted 200 integers in "));
    }
}
