use num::{BigUint, One};

/// Largest `n` whose factorial fits into an `i64`.
pub const MAX_EXACT_I64: u32 = 20;

/// Recursive factorial in 64-bit signed arithmetic. `factorial(0)` and `factorial(1)` are 1.
///
/// Results above `20!` do not fit into an `i64` and wrap around in two's complement instead of
/// panicking, so `factorial(21)` is negative. Use [`checked_factorial`] to detect this or
/// [`big_factorial`] for the exact value. Recursion depth is `n`.
pub fn factorial(n: u32) -> i64 {
    if n <= 1 {
        1
    } else {
        i64::from(n).wrapping_mul(factorial(n - 1))
    }
}

/// Factorial in 64-bit arithmetic, `None` if the result overflows.
pub fn checked_factorial(n: u32) -> Option<i64> {
    (2..=n).try_fold(1i64, |acc, k| acc.checked_mul(i64::from(k)))
}

/// Exact factorial of any size.
pub fn big_factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

#[cfg(test)]
mod tests {
    use super::{big_factorial, checked_factorial, factorial, MAX_EXACT_I64};
    use num::BigUint;

    #[test]
    fn test_small_values() {
        assert_eq!(1, factorial(0));
        assert_eq!(1, factorial(1));
        assert_eq!(2, factorial(2));
        assert_eq!(120, factorial(5));
        assert_eq!(3628800, factorial(10));
        assert_eq!(2432902008176640000, factorial(20));
    }

    #[test]
    fn test_overflow_wraps() {
        // 21! = 51090942171709440000 modulo 2^64, read as signed
        assert_eq!(-4249290049419214848, factorial(21));
        assert_eq!(factorial(21), 21i64.wrapping_mul(factorial(20)));
    }

    #[test]
    fn test_checked() {
        for n in 0..=MAX_EXACT_I64 {
            assert_eq!(Some(factorial(n)), checked_factorial(n));
        }
        assert_eq!(None, checked_factorial(MAX_EXACT_I64 + 1));
        assert_eq!(None, checked_factorial(100));
    }

    #[test]
    fn test_big() {
        assert_eq!(BigUint::from(1u32), big_factorial(0));
        assert_eq!(BigUint::from(120u32), big_factorial(5));
        assert_eq!(BigUint::from(2432902008176640000u64), big_factorial(20));
        assert_eq!(
            "15511210043330985984000000",
            big_factorial(25).to_string()
        );

        // the low 64 bits of the exact value are what the wrapping variant returns
        let exact = big_factorial(30);
        let low_bits = exact.iter_u64_digits().next().unwrap_or(0);
        assert_eq!(low_bits as i64, factorial(30));
    }
}
