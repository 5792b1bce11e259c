//! C ABI boundary for the divisor search.
//!
//! A host process hands over one decimal string and receives one signed
//! 64-bit integer:
//!
//! | Return        | Meaning                                             |
//! |---------------|-----------------------------------------------------|
//! | `-1`          | input did not parse as an unsigned integer > 1      |
//! | `0`           | no nontrivial divisor was located                   |
//! | `d > 1`       | a divisor of the input (`input % d == 0`)           |
//!
//! Inputs 2 and 3 return themselves. The search itself (entropy injection,
//! step budgets, error kinds) is the business of [`pqfactor_core`]; this
//! crate only parses, short-circuits the smallest primes, and maps outcomes
//! onto the sentinel contract.

#![warn(missing_docs)]

use std::ffi::{CStr, c_char};
use std::fmt;

use pqfactor_core::{SearchError, search};

/// Sentinel for input that failed to parse or validate.
pub const PARSE_ERROR: i64 = -1;
/// Sentinel for a search that produced no nontrivial divisor.
pub const NO_DIVISOR: i64 = 0;

/// Why [`find_divisor`] returned no divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactorError {
    /// Input did not parse as an unsigned 64-bit integer greater than 1.
    InvalidInput,
    /// The search finished without a divisor (prime input, or the step
    /// budget ran out first).
    NoDivisor,
}

impl fmt::Display for FactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "not an unsigned integer greater than 1"),
            Self::NoDivisor => write!(f, "no nontrivial divisor found"),
        }
    }
}

impl std::error::Error for FactorError {}

/// Find one nontrivial divisor of the number written in `input`.
///
/// Surrounding ASCII whitespace is tolerated; anything else must be a
/// decimal `u64` greater than 1. Multiples of 2 and 3 are answered
/// without running the engine.
pub fn find_divisor(input: &str) -> Result<u64, FactorError> {
    let n: u64 = input.trim_ascii().parse().map_err(|_| FactorError::InvalidInput)?;
    if n <= 1 {
        return Err(FactorError::InvalidInput);
    }
    if n % 2 == 0 {
        return Ok(2);
    }
    if n % 3 == 0 {
        return Ok(3);
    }

    match search(n) {
        Ok(d) if d > 1 && d < n && n % d == 0 => Ok(d),
        Ok(d) => {
            log::warn!("search returned invalid divisor {d} for {n}");
            Err(FactorError::NoDivisor)
        }
        Err(SearchError::BudgetExhausted) => {
            log::debug!("no divisor of {n} within the step budget");
            Err(FactorError::NoDivisor)
        }
    }
}

// ─── C entry point ───────────────────────────────────────────────────────────

/// Map an outcome onto the numeric contract of [`pq_find_divisor`].
fn to_sentinel(outcome: Result<u64, FactorError>) -> i64 {
    match outcome {
        // After the 2/3 shortcuts the smallest factor is 5, so d <= n/5
        // and the cast cannot wrap.
        Ok(d) => d as i64,
        Err(FactorError::InvalidInput) => PARSE_ERROR,
        Err(FactorError::NoDivisor) => NO_DIVISOR,
    }
}

/// Foreign entry point: find one nontrivial divisor of `number`.
///
/// `number` is a NUL-terminated decimal string. Returns `-1` on parse or
/// validation failure (including a null pointer or non-UTF-8 bytes), `0`
/// when no divisor was located, or the divisor itself.
///
/// # Safety
///
/// `number` must be null or point to a NUL-terminated byte string that
/// stays valid for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pq_find_divisor(number: *const c_char) -> i64 {
    if number.is_null() {
        return PARSE_ERROR;
    }
    let text = match unsafe { CStr::from_ptr(number) }.to_str() {
        Ok(text) => text,
        Err(_) => return PARSE_ERROR,
    };
    to_sentinel(find_divisor(text))
}
