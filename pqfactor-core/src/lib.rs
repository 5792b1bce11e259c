//! Randomized divisor search over 64-bit integers.
//!
//! Provides:
//! - Brent's variant of Pollard's rho with batched GCD evaluation
//! - Binary GCD
//! - Pluggable entropy ([`SystemEntropy`] for production, [`SeededEntropy`]
//!   for reproducible runs)
//! - [`factorize`], which splits a number into an ordered factor pair
//!
//! The search itself lives in [`search_with`]; callers that do not need to
//! inject entropy or tune limits can use [`search`] / [`factorize`].

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod entropy;
mod gcd;
mod search;

pub use entropy::{EntropySource, SeededEntropy, SystemEntropy};
pub use gcd::gcd;
pub use search::{SearchError, SearchParams, search, search_with};

/// Split `pq` into a factor pair `(p, q)` with `p <= q` and `p * q == pq`.
///
/// `pq` must be greater than 1. Multiples of 2 and 3 are peeled off
/// directly; everything else goes through the divisor search, so a prime
/// `pq` reports [`SearchError::BudgetExhausted`].
pub fn factorize(pq: u64) -> Result<(u64, u64), SearchError> {
    debug_assert!(pq > 1);
    if pq % 2 == 0 {
        return Ok((2, pq / 2));
    }
    if pq % 3 == 0 {
        return Ok((3, pq / 3));
    }
    let d = search(pq)?;
    let other = pq / d;
    Ok((d.min(other), d.max(other)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_even_and_triple() {
        assert_eq!(factorize(12), Ok((2, 6)));
        assert_eq!(factorize(21), Ok((3, 7)));
    }

    #[test]
    fn splits_semiprimes() {
        assert_eq!(factorize(35), Ok((5, 7)));
        assert_eq!(factorize(1470626929934143021), Ok((1206429347, 1218991343)));
        assert_eq!(factorize(2363612107535801713), Ok((1518968219, 1556064227)));
    }

    #[test]
    fn pair_is_ordered_and_multiplies_back() {
        for pq in [15u64, 91, 10403, 600851475143] {
            let (p, q) = factorize(pq).unwrap();
            assert!(p > 1 && p <= q, "bad pair ({p}, {q}) for {pq}");
            assert_eq!(p * q, pq);
        }
    }
}
