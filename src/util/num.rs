use crate::interpreter::value::core::Value;

/// Negates an integer, promoting to `Float` when the result is not
/// representable.
///
/// ## Example
/// ```
/// use fieldenum::{interpreter::value::core::Value, util::num::neg_i64};
///
/// assert_eq!(neg_i64(5), Value::Int(-5));
/// assert_eq!(neg_i64(i64::MIN), Value::Float(9.223372036854775808e18));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn neg_i64(x: i64) -> Value {
    x.checked_neg().map_or(Value::Float(-(x as f64)), Value::Int)
}

/// Adds two integers, re-running the addition in `f64` on overflow.
///
/// ## Example
/// ```
/// use fieldenum::{interpreter::value::core::Value, util::num::add_i64};
///
/// assert_eq!(add_i64(2, 3), Value::Int(5));
/// assert!(matches!(add_i64(i64::MAX, 1), Value::Float(_)));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn add_i64(x: i64, y: i64) -> Value {
    x.checked_add(y).map_or(Value::Float(x as f64 + y as f64), Value::Int)
}

/// Subtracts two integers, re-running the subtraction in `f64` on overflow.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sub_i64(x: i64, y: i64) -> Value {
    x.checked_sub(y).map_or(Value::Float(x as f64 - y as f64), Value::Int)
}

/// Multiplies two integers, re-running the multiplication in `f64` on
/// overflow.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mul_i64(x: i64, y: i64) -> Value {
    x.checked_mul(y).map_or(Value::Float(x as f64 * y as f64), Value::Int)
}

/// Divides two integers, truncating toward zero.
///
/// Division by zero yields `NaN` for `0 / 0` and an infinity carrying the sign
/// of `x` otherwise. `i64::MIN / -1` is promoted to `Float`.
///
/// ## Example
/// ```
/// use fieldenum::{interpreter::value::core::Value, util::num::div_i64};
///
/// assert_eq!(div_i64(7, 2), Value::Int(3));
/// assert_eq!(div_i64(-7, 2), Value::Int(-3));
/// assert_eq!(div_i64(-1, 0), Value::Float(f64::NEG_INFINITY));
/// assert!(div_i64(0, 0).is_nan());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn div_i64(x: i64, y: i64) -> Value {
    if y == 0 {
        return Value::Float(match x.signum() {
                                0 => f64::NAN,
                                1 => f64::INFINITY,
                                _ => f64::NEG_INFINITY,
                            });
    }
    x.checked_div(y).map_or(Value::Float(-(x as f64)), Value::Int)
}

/// Computes the truncated remainder of two integers.
///
/// `x % 0` yields `NaN`; `i64::MIN % -1` yields `0`.
#[must_use]
pub fn rem_i64(x: i64, y: i64) -> Value {
    if y == 0 {
        return Value::Float(f64::NAN);
    }
    Value::Int(x.wrapping_rem(y))
}

/// Returns the absolute value, promoting `i64::MIN` to `Float`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn abs_i64(x: i64) -> Value {
    x.checked_abs().map_or(Value::Float(-(x as f64)), Value::Int)
}

/// Raises an integer to an integer power.
///
/// The result stays an `Int` while it fits; negative exponents, an
/// `i64::MIN` base and overflowing products fall back to `f64::powf`.
///
/// ## Example
/// ```
/// use fieldenum::{interpreter::value::core::Value, util::num::pow_i64};
///
/// assert_eq!(pow_i64(3, 4), Value::Int(81));
/// assert_eq!(pow_i64(-2, 3), Value::Int(-8));
/// assert_eq!(pow_i64(-1, 7), Value::Int(-1));
/// assert_eq!(pow_i64(2, -1), Value::Float(0.5));
/// assert_eq!(pow_i64(0, -2), Value::Float(f64::INFINITY));
/// assert_eq!(pow_i64(2, 64), Value::Float(18446744073709551616.0));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pow_i64(x: i64, y: i64) -> Value {
    let float_pow = || Value::Float((x as f64).powf(y as f64));
    match (x, y) {
        (_, 0) => Value::Int(1),
        (_, 1) | (1, _) => Value::Int(x),
        (0, _) if y > 0 => Value::Int(0),
        (0, _) => Value::Float(f64::INFINITY),
        (-1, _) => Value::Int(if y % 2 == 0 { 1 } else { -1 }),
        _ if y < 0 || x == i64::MIN => float_pow(),
        _ => {
            let negative = x < 0 && y % 2 == 1;
            let limit = u128::from(i64::MAX.unsigned_abs());
            let mut base = u128::from(x.unsigned_abs());
            let mut exp = y.unsigned_abs();
            let mut result: u128 = 1;
            while exp > 0 {
                if exp & 1 == 1 {
                    result *= base;
                    if result > limit {
                        return float_pow();
                    }
                }
                exp >>= 1;
                if exp > 0 {
                    base *= base;
                    if base > limit {
                        return float_pow();
                    }
                }
            }
            match i64::try_from(result) {
                Ok(r) if negative => Value::Int(-r),
                Ok(r) => Value::Int(r),
                Err(_) => float_pow(),
            }
        },
    }
}

/// Shifts `x` left by `amount` bits.
///
/// Amounts of 64 or more shift every bit out and yield `0`.
#[must_use]
pub fn shl_i64(x: i64, amount: u64) -> i64 {
    u32::try_from(amount).ok()
                         .and_then(|n| x.checked_shl(n))
                         .unwrap_or(0)
}

/// Arithmetic right shift of `x` by `amount` bits.
///
/// Amounts of 64 or more yield `0` for non-negative `x` and `-1` otherwise.
///
/// ## Example
/// ```
/// use fieldenum::util::num::shr_i64;
///
/// assert_eq!(shr_i64(-16, 2), -4);
/// assert_eq!(shr_i64(-16, 200), -1);
/// assert_eq!(shr_i64(16, 64), 0);
/// ```
#[must_use]
pub fn shr_i64(x: i64, amount: u64) -> i64 {
    u32::try_from(amount).ok()
                         .and_then(|n| x.checked_shr(n))
                         .unwrap_or(if x < 0 { -1 } else { 0 })
}

/// Converts a float to an integer, truncating toward zero.
///
/// Out-of-range values saturate at the `i64` bounds and `NaN` becomes `0`.
///
/// ## Example
/// ```
/// use fieldenum::util::num::f64_to_i64_saturating;
///
/// assert_eq!(f64_to_i64_saturating(-2.9), -2);
/// assert_eq!(f64_to_i64_saturating(f64::INFINITY), i64::MAX);
/// assert_eq!(f64_to_i64_saturating(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_saturating(x: f64) -> i64 {
    x as i64
}

/// Converts a non-negative float to an unsigned integer, truncating toward
/// zero.
///
/// Returns `None` at or above `2^64`. `NaN` becomes `0`.
///
/// ## Example
/// ```
/// use fieldenum::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(1e19), Some(10_000_000_000_000_000_000));
/// assert_eq!(f64_to_u64_checked(18_446_744_073_709_551_616.0), None);
/// assert_eq!(f64_to_u64_checked(f64::NAN), Some(0));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(x: f64) -> Option<u64> {
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;

    if x >= LIMIT { None } else { Some(x as u64) }
}
