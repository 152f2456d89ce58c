use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gross pay before anything is withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossAmount {
    pub monthly_total: Decimal,
    pub annual: Decimal,
}

/// The allowance excluded from tax and social insurance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonTaxableAmount {
    pub monthly: Decimal,
    pub annual: Decimal,
}

/// Monthly pay subject to tax and social insurance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableBase {
    pub monthly: Decimal,
}

/// Social insurance categories, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceKind {
    NationalPension,
    HealthInsurance,
    LongTermCare,
    EmploymentInsurance,
}

/// One itemized monthly social insurance deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    pub kind: InsuranceKind,
    /// Display label taken from the policy.
    pub label: String,
    pub amount: Decimal,
}

/// Everything withheld from gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Itemized monthly social insurance deductions.
    pub monthly: Vec<DeductionLine>,
    pub monthly_social: Decimal,
    /// Income tax plus local tax, per month.
    pub monthly_taxes: Decimal,
    pub monthly_total: Decimal,
    pub annual_social: Decimal,
    pub annual_taxes: Decimal,
}

#[cfg(test)]
impl Deductions {
    /// Looks up an itemized deduction by category.
    pub fn monthly_amount(
        &self,
        kind: InsuranceKind,
    ) -> Option<Decimal> {
        self.monthly
            .iter()
            .find(|line| line.kind == kind)
            .map(|line| line.amount)
    }
}

/// Take-home pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetAmount {
    pub monthly: Decimal,
    pub annual: Decimal,
}

/// Every intermediate annual figure of the tax computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationTrace {
    /// Taxable base × 12, the salary figure the statutory schedules use.
    pub annual_total_salary: Decimal,
    pub earned_deduction: Decimal,
    pub earned_income: Decimal,
    pub basic_personal_deduction: Decimal,
    pub annual_taxable: Decimal,
    /// Income tax before the earned-income tax credit.
    pub annual_income_tax: Decimal,
    /// Local tax on the pre-credit income tax. Informational only.
    pub annual_local_tax: Decimal,
    pub tax_credit: Decimal,
    pub final_income_tax: Decimal,
    pub final_local_tax: Decimal,
}

/// Result of [`SalaryCalculator::calculate`](crate::SalaryCalculator::calculate).
///
/// All amounts are rounded to whole currency units with the policy's
/// [`RoundingMode`](crate::RoundingMode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub currency: String,
    pub gross: GrossAmount,
    pub non_taxable: NonTaxableAmount,
    pub taxable_base: TaxableBase,
    pub deductions: Deductions,
    pub net: NetAmount,
    pub trace: CalculationTrace,
}
