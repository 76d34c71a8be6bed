//! Prime sizing for the slot table
//!
//! Table capacities must be prime for double hashing to cycle through
//! every slot, so capacity choices always go through `first_prime_at_least`.

/// Check whether `n` is prime by trial division.
///
/// Intentionally the simple O(n) scan; capacities are small enough that
/// this never matters.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    for divisor in 2..=n / 2 {
        if n % divisor == 0 {
            return false;
        }
    }
    true
}

/// Smallest prime `p >= n`.
///
/// Every prime above 3 has the form `6k - 1` or `6k + 1`, so candidates
/// are scanned in that form starting from `k = n / 6`. Both branches test
/// the candidate with `is_prime` before accepting it.
pub fn first_prime_at_least(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    if n == 3 {
        return 3;
    }
    let mut k = (n / 6).max(1);
    loop {
        let below = 6 * k - 1;
        if below >= n && is_prime(below) {
            return below;
        }
        let above = 6 * k + 1;
        if above >= n && is_prime(above) {
            return above;
        }
        k += 1;
    }
}
