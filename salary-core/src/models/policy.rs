//! Withholding policy for a salary calculation.
//!
//! A [`PolicyConfig`] gathers every rate, threshold and table the calculator
//! reads. It is plain data: a later year's tables can be swapped in (for
//! example from a TOML document) without touching the calculation code.
//!
//! # Example
//!
//! ```
//! use salary_core::{PolicyConfig, PolicyError};
//!
//! let mut policy = PolicyConfig::kr_2025();
//! assert!(policy.validate().is_ok());
//!
//! policy.dependents = 0;
//! assert_eq!(policy.validate(), Err(PolicyError::InvalidDependents(0)));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{RoundingMode, TaxBracket};

/// Number of pay periods the calculation model supports.
pub const PERIODS_PER_YEAR: u32 = 12;

/// Errors raised when a policy configuration is internally inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The currency code is empty.
    #[error("currency must not be blank")]
    BlankCurrency,

    /// Only monthly payroll is modelled.
    #[error("periods per year must be 12, got {0}")]
    InvalidPeriods(u32),

    /// The earner always counts as one dependent.
    #[error("dependent count must be at least 1, got {0}")]
    InvalidDependents(u32),

    /// A rate lies outside [0, 1].
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    /// A fixed amount is negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeAmount { name: &'static str, value: Decimal },

    /// The pension base floor is above its ceiling.
    #[error("pension minimum base {min} exceeds maximum base {max}")]
    InvalidPensionBase { min: Decimal, max: Decimal },

    /// No tax brackets were provided.
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// Bracket upper bounds must strictly increase.
    #[error("tax bracket {index} upper bound {up_to} does not exceed the previous bound")]
    UnsortedBrackets { index: usize, up_to: Decimal },

    /// Only the last bracket may be open-ended.
    #[error("tax bracket {0} is unbounded but is not the last bracket")]
    UnboundedBracketNotLast(usize),

    /// The last bracket must be open-ended so every base finds a bracket.
    #[error("the last tax bracket must be unbounded")]
    TopBracketBounded,
}

/// National pension contribution parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalPensionConfig {
    pub label: String,
    pub rate: Decimal,
    /// Monthly base floor; lower earnings are charged as if they were this.
    pub monthly_min_base: Decimal,
    /// Monthly base ceiling.
    pub monthly_max_base: Decimal,
}

/// Long-term care premium, charged as a share of the health premium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongTermCareConfig {
    pub label: String,
    pub rate_on_health: Decimal,
}

/// Health insurance contribution parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsuranceConfig {
    pub label: String,
    pub rate: Decimal,
    pub long_term_care: LongTermCareConfig,
}

/// Employment insurance contribution parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentInsuranceConfig {
    pub label: String,
    pub rate: Decimal,
}

/// Employee-side social insurance withheld from the monthly taxable base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInsuranceConfig {
    pub national_pension: NationalPensionConfig,
    pub health_insurance: HealthInsuranceConfig,
    pub employment_insurance: EmploymentInsuranceConfig,
}

/// Progressive income tax table and the local surtax on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxConfig {
    /// Brackets ascending by `up_to`, the last one unbounded.
    pub brackets: Vec<TaxBracket>,
    /// Local income tax as a share of the final income tax.
    pub local_tax_rate: Decimal,
}

/// Complete policy read by [`SalaryCalculator`](crate::SalaryCalculator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// ISO currency code of every amount in the policy.
    pub currency: String,
    pub periods_per_year: u32,
    pub rounding: RoundingMode,
    /// Monthly allowance exempt from tax and social insurance (meal allowance).
    pub non_taxable_allowance: Decimal,
    /// People covered by the basic personal deduction, the earner included.
    pub dependents: u32,
    pub basic_deduction_per_dependent: Decimal,
    pub social: SocialInsuranceConfig,
    pub tax: IncomeTaxConfig,
}

impl PolicyConfig {
    /// Approximate 2025 Korean payroll policy for a single earner.
    ///
    /// Brackets follow the 2023-2024 income tax schedule; health insurance is
    /// 3.545% with long-term care at 12.95% of the health premium.
    pub fn kr_2025() -> Self {
        Self {
            currency: "KRW".to_string(),
            periods_per_year: PERIODS_PER_YEAR,
            rounding: RoundingMode::Floor,
            non_taxable_allowance: dec!(200000),
            dependents: 1,
            basic_deduction_per_dependent: dec!(1500000),
            social: SocialInsuranceConfig {
                national_pension: NationalPensionConfig {
                    label: "국민연금".to_string(),
                    rate: dec!(0.045),
                    monthly_min_base: dec!(390000),
                    monthly_max_base: dec!(5900000),
                },
                health_insurance: HealthInsuranceConfig {
                    label: "건강보험".to_string(),
                    rate: dec!(0.03545),
                    long_term_care: LongTermCareConfig {
                        label: "장기요양".to_string(),
                        rate_on_health: dec!(0.1295),
                    },
                },
                employment_insurance: EmploymentInsuranceConfig {
                    label: "고용보험".to_string(),
                    rate: dec!(0.009),
                },
            },
            tax: IncomeTaxConfig {
                brackets: vec![
                    bracket(Some(dec!(14000000)), dec!(0.06), dec!(0)),
                    bracket(Some(dec!(50000000)), dec!(0.15), dec!(840000)),
                    bracket(Some(dec!(88000000)), dec!(0.24), dec!(6240000)),
                    bracket(Some(dec!(150000000)), dec!(0.35), dec!(15360000)),
                    bracket(Some(dec!(300000000)), dec!(0.38), dec!(37060000)),
                    bracket(Some(dec!(500000000)), dec!(0.40), dec!(94060000)),
                    bracket(Some(dec!(1000000000)), dec!(0.42), dec!(174060000)),
                    bracket(None, dec!(0.45), dec!(384060000)),
                ],
                local_tax_rate: dec!(0.10),
            },
        }
    }

    /// Basic personal deduction for the configured household.
    pub fn basic_personal_deduction(&self) -> Decimal {
        self.basic_deduction_per_dependent * Decimal::from(self.dependents)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first [`PolicyError`] found. Rates must lie in [0, 1],
    /// amounts must be non-negative, the pension floor must not exceed its
    /// ceiling, and the bracket table must satisfy
    /// [`validate_brackets`](Self::validate_brackets).
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.currency.trim().is_empty() {
            return Err(PolicyError::BlankCurrency);
        }
        if self.periods_per_year != PERIODS_PER_YEAR {
            return Err(PolicyError::InvalidPeriods(self.periods_per_year));
        }
        if self.dependents < 1 {
            return Err(PolicyError::InvalidDependents(self.dependents));
        }
        check_amount("non-taxable allowance", self.non_taxable_allowance)?;
        check_amount(
            "basic deduction per dependent",
            self.basic_deduction_per_dependent,
        )?;

        let pension = &self.social.national_pension;
        check_rate("pension rate", pension.rate)?;
        check_amount("pension minimum base", pension.monthly_min_base)?;
        if pension.monthly_min_base > pension.monthly_max_base {
            return Err(PolicyError::InvalidPensionBase {
                min: pension.monthly_min_base,
                max: pension.monthly_max_base,
            });
        }

        let health = &self.social.health_insurance;
        check_rate("health insurance rate", health.rate)?;
        check_rate(
            "long-term care rate",
            health.long_term_care.rate_on_health,
        )?;
        check_rate(
            "employment insurance rate",
            self.social.employment_insurance.rate,
        )?;
        check_rate("local tax rate", self.tax.local_tax_rate)?;

        Self::validate_brackets(&self.tax.brackets)
    }

    /// Checks that a bracket table is usable by
    /// [`progressive_tax`](crate::calculations::progressive_tax).
    ///
    /// The table must be non-empty, strictly ascending by `up_to`, end in a
    /// single unbounded bracket, and carry valid rates and non-negative
    /// deductions.
    pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), PolicyError> {
        let Some(last) = brackets.last() else {
            return Err(PolicyError::NoTaxBrackets);
        };
        if last.up_to.is_some() {
            return Err(PolicyError::TopBracketBounded);
        }

        let mut previous: Option<Decimal> = None;
        for (index, bracket) in brackets.iter().enumerate() {
            check_rate("tax bracket rate", bracket.rate)?;
            check_amount("tax bracket deduction", bracket.deduction)?;

            match bracket.up_to {
                Some(up_to) => {
                    if previous.is_some_and(|prev| up_to <= prev) || up_to < Decimal::ZERO {
                        return Err(PolicyError::UnsortedBrackets { index, up_to });
                    }
                    previous = Some(up_to);
                }
                None if index + 1 != brackets.len() => {
                    return Err(PolicyError::UnboundedBracketNotLast(index));
                }
                None => {}
            }
        }
        Ok(())
    }
}

fn bracket(
    up_to: Option<Decimal>,
    rate: Decimal,
    deduction: Decimal,
) -> TaxBracket {
    TaxBracket {
        up_to,
        rate,
        deduction,
    }
}

fn check_rate(
    name: &'static str,
    value: Decimal,
) -> Result<(), PolicyError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(PolicyError::InvalidRate { name, value });
    }
    Ok(())
}

fn check_amount(
    name: &'static str,
    value: Decimal,
) -> Result<(), PolicyError> {
    if value < Decimal::ZERO {
        return Err(PolicyError::NegativeAmount { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert_eq!(PolicyConfig::kr_2025().validate(), Ok(()));
    }

    #[test]
    fn default_policy_has_eight_brackets_ending_unbounded() {
        let policy = PolicyConfig::kr_2025();

        assert_eq!(policy.tax.brackets.len(), 8);
        assert_eq!(policy.tax.brackets[7].up_to, None);
        assert_eq!(policy.tax.brackets[7].deduction, dec!(384060000));
    }

    #[test]
    fn basic_personal_deduction_scales_with_dependents() {
        let mut policy = PolicyConfig::kr_2025();
        assert_eq!(policy.basic_personal_deduction(), dec!(1500000));

        policy.dependents = 3;
        assert_eq!(policy.basic_personal_deduction(), dec!(4500000));
    }

    #[test]
    fn rejects_blank_currency() {
        let mut policy = PolicyConfig::kr_2025();
        policy.currency = "  ".to_string();

        assert_eq!(policy.validate(), Err(PolicyError::BlankCurrency));
    }

    #[test]
    fn rejects_non_monthly_periods() {
        let mut policy = PolicyConfig::kr_2025();
        policy.periods_per_year = 26;

        assert_eq!(policy.validate(), Err(PolicyError::InvalidPeriods(26)));
    }

    #[test]
    fn rejects_zero_dependents() {
        let mut policy = PolicyConfig::kr_2025();
        policy.dependents = 0;

        assert_eq!(policy.validate(), Err(PolicyError::InvalidDependents(0)));
    }

    #[test]
    fn rejects_rate_above_one() {
        let mut policy = PolicyConfig::kr_2025();
        policy.social.health_insurance.rate = dec!(1.5);

        assert_eq!(
            policy.validate(),
            Err(PolicyError::InvalidRate {
                name: "health insurance rate",
                value: dec!(1.5),
            })
        );
    }

    #[test]
    fn rejects_negative_local_tax_rate() {
        let mut policy = PolicyConfig::kr_2025();
        policy.tax.local_tax_rate = dec!(-0.1);

        assert_eq!(
            policy.validate(),
            Err(PolicyError::InvalidRate {
                name: "local tax rate",
                value: dec!(-0.1),
            })
        );
    }

    #[test]
    fn rejects_negative_allowance() {
        let mut policy = PolicyConfig::kr_2025();
        policy.non_taxable_allowance = dec!(-1);

        assert_eq!(
            policy.validate(),
            Err(PolicyError::NegativeAmount {
                name: "non-taxable allowance",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn rejects_inverted_pension_base() {
        let mut policy = PolicyConfig::kr_2025();
        policy.social.national_pension.monthly_min_base = dec!(6000000);

        assert_eq!(
            policy.validate(),
            Err(PolicyError::InvalidPensionBase {
                min: dec!(6000000),
                max: dec!(5900000),
            })
        );
    }

    #[test]
    fn rejects_empty_brackets() {
        assert_eq!(
            PolicyConfig::validate_brackets(&[]),
            Err(PolicyError::NoTaxBrackets)
        );
    }

    #[test]
    fn rejects_bounded_top_bracket() {
        let brackets = vec![bracket(Some(dec!(14000000)), dec!(0.06), dec!(0))];

        assert_eq!(
            PolicyConfig::validate_brackets(&brackets),
            Err(PolicyError::TopBracketBounded)
        );
    }

    #[test]
    fn rejects_unsorted_brackets() {
        let brackets = vec![
            bracket(Some(dec!(50000000)), dec!(0.15), dec!(840000)),
            bracket(Some(dec!(14000000)), dec!(0.06), dec!(0)),
            bracket(None, dec!(0.45), dec!(0)),
        ];

        assert_eq!(
            PolicyConfig::validate_brackets(&brackets),
            Err(PolicyError::UnsortedBrackets {
                index: 1,
                up_to: dec!(14000000),
            })
        );
    }

    #[test]
    fn rejects_duplicate_bounds() {
        let brackets = vec![
            bracket(Some(dec!(14000000)), dec!(0.06), dec!(0)),
            bracket(Some(dec!(14000000)), dec!(0.15), dec!(840000)),
            bracket(None, dec!(0.45), dec!(0)),
        ];

        assert!(matches!(
            PolicyConfig::validate_brackets(&brackets),
            Err(PolicyError::UnsortedBrackets { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_unbounded_bracket_in_the_middle() {
        let brackets = vec![
            bracket(Some(dec!(14000000)), dec!(0.06), dec!(0)),
            bracket(None, dec!(0.15), dec!(840000)),
            bracket(None, dec!(0.45), dec!(0)),
        ];

        assert_eq!(
            PolicyConfig::validate_brackets(&brackets),
            Err(PolicyError::UnboundedBracketNotLast(1))
        );
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = PolicyError::InvalidRate {
            name: "pension rate",
            value: dec!(2),
        };

        assert_eq!(err.to_string(), "pension rate must be between 0 and 1, got 2");
    }
}
