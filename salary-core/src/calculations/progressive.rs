//! Progressive income tax by the quick-deduction method.
//!
//! Each [`TaxBracket`] stores the cumulative tax owed at the previous
//! bracket's upper bound, so the tax for a base is one multiplication
//! instead of a tier-by-tier sum.

use rust_decimal::Decimal;

use crate::TaxBracket;
use crate::calculations::common::max;

/// Computes income tax on an annual taxable base.
///
/// The first bracket whose `up_to` is at or above `annual_tax_base` is used
/// (upper bounds are inclusive). The result is
/// `(base - previous up_to) * rate + deduction`, floored at zero, so zero and
/// negative bases owe nothing. If no bracket matches, the tax is zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::PolicyConfig;
/// use salary_core::calculations::progressive_tax;
///
/// let policy = PolicyConfig::kr_2025();
///
/// // 840,000 + (20,000,000 - 14,000,000) × 15%
/// assert_eq!(
///     progressive_tax(&policy.tax.brackets, dec!(20000000)),
///     dec!(1740000)
/// );
/// ```
pub fn progressive_tax(
    brackets: &[TaxBracket],
    annual_tax_base: Decimal,
) -> Decimal {
    let Some(index) = brackets.iter().position(|b| b.contains(annual_tax_base)) else {
        return Decimal::ZERO;
    };

    let bracket = &brackets[index];
    let previous_bound = index
        .checked_sub(1)
        .and_then(|prev| brackets[prev].up_to)
        .unwrap_or(Decimal::ZERO);

    max(
        Decimal::ZERO,
        (annual_tax_base - previous_bound) * bracket.rate + bracket.deduction,
    )
}
