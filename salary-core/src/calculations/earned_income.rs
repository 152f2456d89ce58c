//! Earned-income deduction and earned-income tax credit schedules.
//!
//! Both schedules are piecewise linear in the annual total salary (taxable
//! base × 12) or in the computed income tax. Each tier's base constant is the
//! value of the previous tier at its boundary, so the schedules are
//! continuous.
//!
//! # Earned-income deduction
//!
//! | Total salary (inclusive)  | Deduction |
//! |---------------------------|-----------|
//! | ≤ 5,000,000               | salary × 70% |
//! | ≤ 15,000,000              | 3,500,000 + excess over 5M × 40% |
//! | ≤ 45,000,000              | 7,500,000 + excess over 15M × 15% |
//! | ≤ 100,000,000             | 12,000,000 + excess over 45M × 5% |
//! | above                     | 14,750,000 + excess over 100M × 2% |
//!
//! # Tax credit limit
//!
//! | Total salary (inclusive)  | Limit | Floor |
//! |---------------------------|-------|-------|
//! | ≤ 33,000,000              | 740,000 | |
//! | ≤ 70,000,000              | 740,000 − excess over 33M × 0.8% | 660,000 |
//! | ≤ 120,000,000             | 660,000 − excess over 70M × 50% | 500,000 |
//! | above                     | 500,000 − excess over 120M × 50% | 200,000 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{max, min};

/// Deduction tiers as (inclusive upper bound, base deduction, marginal rate).
const DEDUCTION_TIERS: [(Decimal, Decimal, Decimal); 4] = [
    (dec!(5000000), dec!(0), dec!(0.70)),
    (dec!(15000000), dec!(3500000), dec!(0.40)),
    (dec!(45000000), dec!(7500000), dec!(0.15)),
    (dec!(100000000), dec!(12000000), dec!(0.05)),
];
const DEDUCTION_TOP_BASE: Decimal = dec!(14750000);
const DEDUCTION_TOP_RATE: Decimal = dec!(0.02);

const CREDIT_BREAKPOINT: Decimal = dec!(1300000);
const CREDIT_LOW_RATE: Decimal = dec!(0.55);
const CREDIT_AT_BREAKPOINT: Decimal = dec!(715000);
const CREDIT_HIGH_RATE: Decimal = dec!(0.30);

/// Computes the earned-income deduction for an annual total salary.
///
/// Negative input is not rejected; callers pass a non-negative salary.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::earned_income_deduction;
///
/// // 7,500,000 + (33,800,000 - 15,000,000) × 15%
/// assert_eq!(earned_income_deduction(dec!(33800000)), dec!(10320000));
/// ```
pub fn earned_income_deduction(total_salary: Decimal) -> Decimal {
    let mut lower = Decimal::ZERO;
    for (upper, base, rate) in DEDUCTION_TIERS {
        if total_salary <= upper {
            return base + (total_salary - lower) * rate;
        }
        lower = upper;
    }
    DEDUCTION_TOP_BASE + (total_salary - lower) * DEDUCTION_TOP_RATE
}

/// Computes the ceiling on the earned-income tax credit for an annual total
/// salary.
///
/// Each tier's linear formula is clamped up to the tier floor, so the limit
/// never drops below 200,000 however large the salary.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::tax_credit_limit;
///
/// assert_eq!(tax_credit_limit(dec!(30000000)), dec!(740000));
/// assert_eq!(tax_credit_limit(dec!(150000000)), dec!(200000));
/// ```
pub fn tax_credit_limit(total_salary: Decimal) -> Decimal {
    if total_salary <= dec!(33000000) {
        return dec!(740000);
    }

    if total_salary <= dec!(70000000) {
        let limit = dec!(740000) - (total_salary - dec!(33000000)) * dec!(0.008);
        return max(dec!(660000), limit);
    }

    if total_salary <= dec!(120000000) {
        let limit = dec!(660000) - (total_salary - dec!(70000000)) * dec!(0.5);
        return max(dec!(500000), limit);
    }

    let limit = dec!(500000) - (total_salary - dec!(120000000)) * dec!(0.5);
    max(dec!(200000), limit)
}

/// Computes the earned-income tax credit before the salary-based cap.
///
/// 55% of the tax up to 1,300,000, then 715,000 plus 30% of the excess.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::tax_credit;
///
/// assert_eq!(tax_credit(dec!(1000000)), dec!(550000));
/// assert_eq!(tax_credit(dec!(2000000)), dec!(925000));
/// ```
pub fn tax_credit(calculated_tax: Decimal) -> Decimal {
    if calculated_tax <= CREDIT_BREAKPOINT {
        return calculated_tax * CREDIT_LOW_RATE;
    }

    CREDIT_AT_BREAKPOINT + (calculated_tax - CREDIT_BREAKPOINT) * CREDIT_HIGH_RATE
}

/// Returns the earned-income tax credit actually applied: the lesser of
/// [`tax_credit`] and [`tax_credit_limit`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::apply_tax_credit;
///
/// // Raw credit 925,000 is capped at the 740,000 limit.
/// assert_eq!(apply_tax_credit(dec!(2000000), dec!(30000000)), dec!(740000));
/// ```
pub fn apply_tax_credit(
    calculated_tax: Decimal,
    total_salary: Decimal,
) -> Decimal {
    min(tax_credit(calculated_tax), tax_credit_limit(total_salary))
}
