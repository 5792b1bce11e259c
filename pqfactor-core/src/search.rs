//! Brent-accelerated Pollard's rho divisor search with batched GCD.

use std::fmt;

use crate::entropy::{EntropySource, SystemEntropy};
use crate::gcd::gcd;

/// Tuning knobs for [`search_with`].
#[derive(Clone, Copy, Debug)]
pub struct SearchParams {
    /// Hare steps folded into the product accumulator between GCD checks.
    pub batch: u64,
    /// Total applications of the iteration function one call may spend,
    /// shared across restarts. Bounds the otherwise-unbounded loop that a
    /// prime modulus would cause.
    pub max_steps: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { batch: 100, max_steps: 1 << 24 }
    }
}

/// Why a search ended without a divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The step budget ran out before any GCD exceeded 1. The expected
    /// outcome for prime input, which has no nontrivial divisor at all.
    BudgetExhausted,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetExhausted => write!(f, "no divisor found within the step budget"),
        }
    }
}

impl std::error::Error for SearchError {}

/// `(a * b) mod n` through a 128-bit intermediate.
fn mul_mod(a: u64, b: u64, n: u64) -> u64 {
    ((a as u128 * b as u128) % n as u128) as u64
}

/// The iteration function `f(v) = v² + c (mod n)`.
fn advance(v: u64, c: u64, n: u64) -> u64 {
    ((v as u128 * v as u128 + c as u128) % n as u128) as u64
}

/// Take up to `want` steps from the budget; returns how many were granted.
fn take(remaining: &mut u64, want: u64) -> u64 {
    let granted = want.min(*remaining);
    *remaining -= granted;
    granted
}

/// One Brent walk from starting point `y0` with additive constant `c`.
///
/// Returns a nontrivial divisor of `n`, or `None` when the walk collapsed
/// (every difference in the offending batch shared all of `n`'s factors)
/// or the budget ran dry mid-walk.
fn attempt(n: u64, y0: u64, c: u64, batch: u64, remaining: &mut u64) -> Option<u64> {
    let mut y = y0;
    let mut x = y;
    let mut ys = y;
    let mut g = 1u64;
    let mut r = 1u64;
    let mut q = 1u64;

    while g == 1 {
        // New tortoise checkpoint, r steps ahead of the previous one.
        x = y;
        let granted = take(remaining, r);
        for _ in 0..granted {
            y = advance(y, c, n);
        }
        if granted < r {
            return None;
        }

        let mut k = 0;
        while k < r && g == 1 {
            ys = y;
            let m = batch.min(r - k);
            let granted = take(remaining, m);
            for _ in 0..granted {
                y = advance(y, c, n);
                q = mul_mod(q, x.abs_diff(y), n);
            }
            if granted < m {
                return None;
            }
            g = gcd(q, n);
            k += batch;
        }
        r *= 2;
    }

    if g == n {
        // The batched product swallowed several factors at once, hiding
        // which step triggered it. That step lies inside the last batch,
        // so re-walk from the snapshot one GCD at a time.
        loop {
            ys = advance(ys, c, n);
            g = gcd(x.abs_diff(ys), n);
            if g > 1 {
                break;
            }
        }
    }

    (g < n).then_some(g)
}

/// Find one nontrivial divisor of composite `n`.
///
/// Each attempt draws a fresh starting point and additive constant from
/// `entropy`; an attempt whose batched GCD collapses to `n` and whose
/// backtrack lands on `n` as well is abandoned and retried with new draws.
/// The step budget in `params` is shared across all attempts and bounds
/// the whole call.
///
/// `n` must be greater than 4. It should also be composite: a prime `n`
/// drains the budget and reports [`SearchError::BudgetExhausted`].
pub fn search_with<E: EntropySource>(
    n: u64,
    entropy: &mut E,
    params: &SearchParams,
) -> Result<u64, SearchError> {
    debug_assert!(n > 4, "trivial moduli belong to the caller");
    let batch = params.batch.max(1);
    let mut remaining = params.max_steps;
    loop {
        let y0 = entropy.draw(n);
        let c = entropy.draw(n);
        if let Some(g) = attempt(n, y0, c, batch, &mut remaining) {
            return Ok(g);
        }
        if remaining == 0 {
            return Err(SearchError::BudgetExhausted);
        }
    }
}

/// [`search_with`] using OS entropy and default parameters.
pub fn search(n: u64) -> Result<u64, SearchError> {
    search_with(n, &mut SystemEntropy, &SearchParams::default())
}
