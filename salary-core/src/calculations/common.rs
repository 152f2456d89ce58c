//! Common utility functions for salary calculations.
//!
//! Saturating helpers used wherever a schedule floors or caps a value
//! instead of rejecting it.

use rust_decimal::Decimal;

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::min;
///
/// assert_eq!(min(dec!(925000), dec!(740000)), dec!(740000));
/// ```
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Restricts `value` to `[lower, upper]`.
///
/// The lower bound is applied first, so if `lower > upper` the result is
/// `upper`. Callers validate the bounds beforehand.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::clamp;
///
/// assert_eq!(clamp(dec!(100), dec!(390000), dec!(5900000)), dec!(390000));
/// assert_eq!(clamp(dec!(9000000), dec!(390000), dec!(5900000)), dec!(5900000));
/// ```
pub fn clamp(
    value: Decimal,
    lower: Decimal,
    upper: Decimal,
) -> Decimal {
    min(max(value, lower), upper)
}
