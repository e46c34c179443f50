//! Numeral-base conversion.
//!
//! Digits are always most-significant first. Digit counting is done with
//! integer division, so exact powers of the base and zero are well defined:
//! `0` has one digit, `base^k` has `k + 1`.

use crate::{Error, Result};

/// Number of base-`base` digits needed to write `n` (at least 1).
pub fn digit_count(n: u64, base: u64) -> Result<usize> {
    check_base(base)?;

    let mut count = 1;
    let mut q = n / base;
    while q > 0 {
        count += 1;
        q /= base;
    }
    Ok(count)
}

/// Convert `n` to base `base`.
///
/// With `digit_count = None` the minimal representation is returned
/// (`[0]` for zero). With `Some(k)` exactly `k` digits are returned,
/// left-padded with zeros; a value that needs more than `k` digits is an
/// error rather than being silently truncated.
///
/// # Example
///
/// ```
/// use what3chords_core::to_base_x;
///
/// assert_eq!(to_base_x(10, 2, None).unwrap(), vec![1, 0, 1, 0]);
/// assert_eq!(to_base_x(5, 10, Some(3)).unwrap(), vec![0, 0, 5]);
/// assert_eq!(to_base_x(0, 7, None).unwrap(), vec![0]);
/// ```
pub fn to_base_x(n: u64, base: u64, digit_count: Option<usize>) -> Result<Vec<u64>> {
    let needed = self::digit_count(n, base)?;

    let width = match digit_count {
        None => needed,
        Some(0) => return Err(Error::InvalidDigitCount(0)),
        Some(k) if k < needed => {
            return Err(Error::DigitOverflow {
                value: n,
                base,
                digits: k,
            })
        }
        Some(k) => k,
    };

    let mut digits = vec![0; width];
    let mut q = n;
    for slot in digits.iter_mut().rev() {
        *slot = q % base;
        q /= base;
    }
    Ok(digits)
}

/// Minimal base-`base` representation of `n`, with each digit mapped
/// through `alphabet` and concatenated.
///
/// ```
/// use what3chords_core::radix::to_base_x_with_alphabet;
///
/// assert_eq!(to_base_x_with_alphabet(255, 16, "0123456789abcdef").unwrap(), "ff");
/// ```
pub fn to_base_x_with_alphabet(n: u64, base: u64, alphabet: &str) -> Result<String> {
    let symbols: Vec<char> = alphabet.chars().collect();
    if (symbols.len() as u64) < base {
        return Err(Error::AlphabetTooShort {
            len: symbols.len(),
            base,
        });
    }

    Ok(to_base_x(n, base, None)?
        .into_iter()
        .map(|digit| symbols[digit as usize])
        .collect())
}

/// Recompose a value from its most-significant-first digits.
pub fn from_base_x(digits: &[u64], base: u64) -> Result<u64> {
    check_base(base)?;

    digits.iter().try_fold(0u64, |acc, &digit| {
        if digit >= base {
            return Err(Error::InvalidDigit { digit, base });
        }
        acc.checked_mul(base)
            .and_then(|v| v.checked_add(digit))
            .ok_or(Error::ValueOverflow {
                base,
                digits: digits.len(),
            })
    })
}

fn check_base(base: u64) -> Result<()> {
    if base < 2 {
        return Err(Error::InvalidBase(base));
    }
    Ok(())
}
