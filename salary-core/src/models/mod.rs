mod breakdown;
mod policy;
mod rounding;
mod tax_bracket;

pub use breakdown::{
    CalculationTrace, DeductionLine, Deductions, GrossAmount, InsuranceKind, NetAmount,
    NonTaxableAmount, SalaryBreakdown, TaxableBase,
};
pub use policy::{
    EmploymentInsuranceConfig, HealthInsuranceConfig, IncomeTaxConfig, LongTermCareConfig,
    NationalPensionConfig, PERIODS_PER_YEAR, PolicyConfig, PolicyError, SocialInsuranceConfig,
};
pub use rounding::RoundingMode;
pub(crate) use rounding::settle;
pub use tax_bracket::TaxBracket;
