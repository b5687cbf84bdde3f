use num::{BigInt, Integer, One, Signed, ToPrimitive, Zero};

use crate::error::ArithmeticFault;

/// Converts an exponent to the machine-sized form `BigInt::pow` takes.
///
/// ## Errors
/// - `ArithmeticFault::NegativeExponent` if `exponent < 0`.
/// - `ArithmeticFault::ExponentTooLarge` if it does not fit in a `u32`.
///
/// ## Example
/// ```
/// use intcalc::{error::ArithmeticFault, util::num::exponent_checked};
/// use num::BigInt;
///
/// assert_eq!(exponent_checked(&BigInt::from(10)), Ok(10));
/// assert!(matches!(exponent_checked(&BigInt::from(-1)),
///                  Err(ArithmeticFault::NegativeExponent { .. })));
/// assert!(matches!(exponent_checked(&BigInt::from(u64::MAX)),
///                  Err(ArithmeticFault::ExponentTooLarge { .. })));
/// ```
pub fn exponent_checked(exponent: &BigInt) -> Result<u32, ArithmeticFault> {
    if exponent.is_negative() {
        return Err(ArithmeticFault::NegativeExponent { exponent: exponent.to_string() });
    }

    exponent.to_u32()
            .ok_or_else(|| ArithmeticFault::ExponentTooLarge { exponent: exponent.to_string() })
}

/// The largest bit length a power may produce.
pub const MAX_RESULT_BITS: u64 = (1 << 31) - 1;

/// Raises `base` to `exponent`, refusing results too large to build.
///
/// Bases `0`, `1` and `-1` accept any non-negative exponent. For every other
/// base the exponent must fit in a `u32` and the result must stay within
/// [`MAX_RESULT_BITS`].
///
/// ## Errors
/// - `ArithmeticFault::NegativeExponent` if `exponent < 0`.
/// - `ArithmeticFault::ExponentTooLarge` if it does not fit in a `u32`.
/// - `ArithmeticFault::ResultTooLarge` if the result would exceed
///   [`MAX_RESULT_BITS`].
///
/// ## Example
/// ```
/// use intcalc::{error::ArithmeticFault, util::num::checked_pow};
/// use num::BigInt;
///
/// assert_eq!(checked_pow(&BigInt::from(3), &BigInt::from(4)), Ok(BigInt::from(81)));
/// assert_eq!(checked_pow(&BigInt::from(-1), &BigInt::from(u64::MAX)), Ok(BigInt::from(-1)));
/// assert!(matches!(checked_pow(&BigInt::from(10), &BigInt::from(4_000_000_000u32)),
///                  Err(ArithmeticFault::ResultTooLarge { .. })));
/// ```
pub fn checked_pow(base: &BigInt, exponent: &BigInt) -> Result<BigInt, ArithmeticFault> {
    if exponent.is_negative() {
        return Err(ArithmeticFault::NegativeExponent { exponent: exponent.to_string() });
    }

    if base.is_zero() {
        return Ok(if exponent.is_zero() { BigInt::one() } else { BigInt::zero() });
    }
    if base.magnitude().is_one() {
        if base.is_negative() && exponent.is_odd() {
            return Ok(-BigInt::one());
        }
        return Ok(BigInt::one());
    }

    let exp = exponent_checked(exponent)?;
    let bits = base.bits();
    // |base| >= 2, so the result has at least (bits - 1) * exp bits.
    if (bits - 1).saturating_mul(u64::from(exp)) > MAX_RESULT_BITS {
        return Err(ArithmeticFault::ResultTooLarge { bits,
                                                     exponent: exponent.to_string() });
    }

    Ok(base.pow(exp))
}

/// Whether `repr` is a non-empty run of ASCII decimal digits.
#[must_use]
pub fn is_decimal_literal(repr: &str) -> bool {
    !repr.is_empty() && repr.bytes().all(|b| b.is_ascii_digit())
}
