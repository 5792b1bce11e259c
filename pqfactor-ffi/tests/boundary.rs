use std::ffi::CString;

use pqfactor_ffi::{FactorError, NO_DIVISOR, PARSE_ERROR, find_divisor, pq_find_divisor};

fn ffi(input: &str) -> i64 {
    let c = CString::new(input).unwrap();
    unsafe { pq_find_divisor(c.as_ptr()) }
}

#[test]
fn small_inputs() {
    assert_eq!(find_divisor("2"), Ok(2));
    assert_eq!(find_divisor("3"), Ok(3));
    assert_eq!(find_divisor("4"), Ok(2));
    assert_eq!(find_divisor("9"), Ok(3));
    let d = find_divisor("15").unwrap();
    assert!(d == 3 || d == 5, "15 must split as 3 or 5, got {d}");
}

#[test]
fn large_semiprimes() {
    for input in ["1470626929934143021", "2363612107535801713"] {
        let n: u64 = input.parse().unwrap();
        let d = find_divisor(input).unwrap();
        assert!(d > 1 && d < n && n % d == 0, "bad divisor {d} of {n}");
    }
}

#[test]
fn rejects_unparseable_input() {
    for input in ["-5", "abc", "1", "0", "", "  ", "18446744073709551616", "12.5", "35 tail"] {
        assert_eq!(find_divisor(input), Err(FactorError::InvalidInput), "{input:?}");
    }
}

#[test]
fn tolerates_surrounding_whitespace() {
    let d = find_divisor(" 35\n").unwrap();
    assert!(d == 5 || d == 7);
}

#[test]
fn prime_input_yields_no_divisor() {
    // Runs the engine to budget exhaustion; must terminate, not hang.
    assert_eq!(find_divisor("999999937"), Err(FactorError::NoDivisor));
    assert_eq!(ffi("999999937"), NO_DIVISOR);
}

#[test]
fn sentinel_contract_over_the_c_abi() {
    assert_eq!(ffi("12"), 2);
    assert_eq!(ffi("abc"), PARSE_ERROR);
    assert_eq!(ffi("1"), PARSE_ERROR);
    let d = ffi("1000036000099"); // 1000003 × 1000033
    assert!(d > 1 && 1000036000099 % d == 0);
}

#[test]
fn null_and_invalid_utf8_are_parse_errors() {
    assert_eq!(unsafe { pq_find_divisor(std::ptr::null()) }, PARSE_ERROR);
    let bad = CString::new(vec![0xFFu8, 0xFE]).unwrap();
    assert_eq!(unsafe { pq_find_divisor(bad.as_ptr()) }, PARSE_ERROR);
}
