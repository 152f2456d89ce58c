//! End-to-end take-home pay calculation.
//!
//! # Calculation Order
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Monthly gross = annual gross ÷ 12 |
//! | 2    | Monthly taxable base = monthly gross − non-taxable allowance (minimum 0) |
//! | 3    | Monthly social insurance on the taxable base (pension base clamped) |
//! | 4    | Annual total salary = monthly taxable base × 12 |
//! | 5    | Earned income = total salary − earned-income deduction (minimum 0) |
//! | 6    | Basic personal deduction = per-dependent amount × dependents |
//! | 7    | Annual taxable = earned income − personal deduction − annual social insurance (minimum 0) |
//! | 8    | Income tax from the progressive brackets |
//! | 9    | Final income tax = income tax − capped earned-income tax credit (minimum 0) |
//! | 10   | Final local tax = floor(final income tax × local rate) |
//! | 11   | Monthly net = monthly gross − monthly social − (income + local tax) ÷ 12 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{PolicyConfig, SalaryCalculator};
//!
//! let policy = PolicyConfig::kr_2025();
//! let calculator = SalaryCalculator::new(&policy).unwrap();
//!
//! let breakdown = calculator.calculate(dec!(36000000));
//!
//! assert_eq!(breakdown.taxable_base.monthly, dec!(2800000));
//! assert_eq!(breakdown.net.monthly, dec!(2663138));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::max;
use crate::models::settle;
use crate::calculations::{
    SocialInsurance, apply_tax_credit, earned_income_deduction, progressive_tax,
};
use crate::{
    CalculationTrace, DeductionLine, Deductions, GrossAmount, InsuranceKind, NetAmount,
    NonTaxableAmount, PolicyConfig, PolicyError, SalaryBreakdown, TaxableBase,
};

/// Turns an annual gross salary into a [`SalaryBreakdown`] under one policy.
///
/// The policy is validated once in [`new`](Self::new); after that every
/// calculation is infallible and free of side effects, so one calculator can
/// be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct SalaryCalculator<'a> {
    policy: &'a PolicyConfig,
}

impl<'a> SalaryCalculator<'a> {
    /// Creates a calculator after validating `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if the policy fails
    /// [`PolicyConfig::validate`].
    pub fn new(policy: &'a PolicyConfig) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Calculates the full withholding breakdown for `annual_gross`.
    ///
    /// `annual_gross` is expected to be non-negative; callers validate input
    /// before it reaches the calculator.
    pub fn calculate(
        &self,
        annual_gross: Decimal,
    ) -> SalaryBreakdown {
        let policy = self.policy;
        let periods = Decimal::from(policy.periods_per_year);

        let monthly_gross = annual_gross / periods;
        let monthly_taxable_base = self.monthly_taxable_base(monthly_gross);

        let social = SocialInsurance::monthly(&policy.social, monthly_taxable_base);
        let monthly_social = social.total();
        let annual_social = settle(monthly_social * periods);

        let annual_total_salary = settle(monthly_taxable_base * periods);
        let earned_deduction = earned_income_deduction(annual_total_salary);
        let earned_income = max(Decimal::ZERO, annual_total_salary - earned_deduction);
        let basic_personal_deduction = policy.basic_personal_deduction();
        let annual_taxable = max(
            Decimal::ZERO,
            earned_income - basic_personal_deduction - annual_social,
        );
        debug!(%annual_total_salary, %earned_income, %annual_taxable, "taxable income");

        let income_tax = progressive_tax(&policy.tax.brackets, annual_taxable);
        let local_tax = self.local_tax(income_tax);

        let tax_credit = apply_tax_credit(income_tax, annual_total_salary);
        let final_income_tax = max(Decimal::ZERO, income_tax - tax_credit);
        let final_local_tax = self.local_tax(final_income_tax);
        debug!(%income_tax, %tax_credit, %final_income_tax, %final_local_tax, "income tax");

        let annual_taxes = final_income_tax + final_local_tax;
        let monthly_taxes = annual_taxes / periods;

        let monthly_net = monthly_gross - monthly_social - monthly_taxes;
        let annual_net = monthly_net * periods;

        let round = |value: Decimal| policy.rounding.apply(value);
        let social_insurance = &policy.social;

        SalaryBreakdown {
            currency: policy.currency.clone(),
            gross: GrossAmount {
                monthly_total: round(monthly_gross),
                annual: round(annual_gross),
            },
            non_taxable: NonTaxableAmount {
                monthly: round(policy.non_taxable_allowance),
                annual: round(policy.non_taxable_allowance * periods),
            },
            taxable_base: TaxableBase {
                monthly: round(monthly_taxable_base),
            },
            deductions: Deductions {
                monthly: vec![
                    DeductionLine {
                        kind: InsuranceKind::NationalPension,
                        label: social_insurance.national_pension.label.clone(),
                        amount: round(social.national_pension),
                    },
                    DeductionLine {
                        kind: InsuranceKind::HealthInsurance,
                        label: social_insurance.health_insurance.label.clone(),
                        amount: round(social.health_insurance),
                    },
                    DeductionLine {
                        kind: InsuranceKind::LongTermCare,
                        label: social_insurance.health_insurance.long_term_care.label.clone(),
                        amount: round(social.long_term_care),
                    },
                    DeductionLine {
                        kind: InsuranceKind::EmploymentInsurance,
                        label: social_insurance.employment_insurance.label.clone(),
                        amount: round(social.employment_insurance),
                    },
                ],
                monthly_social: round(monthly_social),
                monthly_taxes: round(monthly_taxes),
                monthly_total: round(monthly_social + monthly_taxes),
                annual_social: round(annual_social),
                annual_taxes: round(annual_taxes),
            },
            net: NetAmount {
                monthly: round(monthly_net),
                annual: round(annual_net),
            },
            trace: CalculationTrace {
                annual_total_salary: round(annual_total_salary),
                earned_deduction: round(earned_deduction),
                earned_income: round(earned_income),
                basic_personal_deduction: round(basic_personal_deduction),
                annual_taxable: round(annual_taxable),
                annual_income_tax: round(income_tax),
                annual_local_tax: round(local_tax),
                tax_credit: round(tax_credit),
                final_income_tax: round(final_income_tax),
                final_local_tax: round(final_local_tax),
            },
        }
    }

    /// Monthly pay left after the non-taxable allowance, never negative.
    fn monthly_taxable_base(
        &self,
        monthly_gross: Decimal,
    ) -> Decimal {
        max(
            Decimal::ZERO,
            monthly_gross - self.policy.non_taxable_allowance,
        )
    }

    /// Local income tax, always truncated to whole units.
    fn local_tax(
        &self,
        income_tax: Decimal,
    ) -> Decimal {
        settle(income_tax * self.policy.tax.local_tax_rate).floor()
    }
}
