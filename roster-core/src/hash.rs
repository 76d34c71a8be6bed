//! Double-hashing functions over string names
//!
//! Provides:
//! - Horner prehash reduced mod M at every step
//! - Derived hash functions `h1` and `h2`
//! - Combined probe function and full probe sequence
//!
//! All functions require a prime table length `m > 2`; `h2` divides by
//! `m - 2` and its nonzero step is what makes the probe sequence a
//! permutation of `0..m`.

/// Horner multiplier for the string prehash.
const MULTIPLIER: usize = 31;

/// Map a name to an integer in `[0, m)` with Horner's rule, folding the
/// bytes from the last to the first and reducing mod `m` after each step
/// so the accumulator never overflows. The empty string prehashes to 0.
pub fn prehash(name: &str, m: usize) -> usize {
    let mut value = 0usize;
    for &byte in name.as_bytes().iter().rev() {
        value = (MULTIPLIER * value + byte as usize) % m;
    }
    value
}

/// Primary hash: the starting slot of the probe sequence.
pub fn h1(name: &str, m: usize) -> usize {
    prehash(name, m) % m
}

/// Secondary hash: the probe step, in `[1, m - 2]`.
///
/// Never zero, so successive probes always advance.
pub fn h2(name: &str, m: usize) -> usize {
    debug_assert!(m > 2, "h2 requires a table length above 2");
    1 + (prehash(name, m) % (m - 2))
}

/// Slot probed after `collisions` failed attempts: `(h1 + c * h2) mod m`.
pub fn probe(name: &str, collisions: usize, m: usize) -> usize {
    (h1(name, m) + collisions * h2(name, m)) % m
}

/// The `m`-element sequence `probe(name, 0..m, m)`.
///
/// For prime `m > 2` this is a permutation of `0..m`.
pub fn probe_sequence(name: &str, m: usize) -> impl Iterator<Item = usize> + '_ {
    let start = h1(name, m);
    let step = h2(name, m);
    (0..m).map(move |c| (start + c * step) % m)
}
