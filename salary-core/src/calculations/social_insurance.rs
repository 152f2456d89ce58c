//! Monthly employee social insurance contributions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::SocialInsuranceConfig;
use crate::calculations::common::clamp;

/// Unrounded monthly social insurance contributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInsurance {
    pub national_pension: Decimal,
    pub health_insurance: Decimal,
    pub long_term_care: Decimal,
    pub employment_insurance: Decimal,
}

impl SocialInsurance {
    /// Computes contributions on a monthly taxable base.
    ///
    /// Only the pension is clamped, to `[monthly_min_base, monthly_max_base]`,
    /// and the clamp is applied to the already zero-floored taxable base.
    /// Long-term care is a share of the health premium.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::PolicyConfig;
    /// use salary_core::calculations::SocialInsurance;
    ///
    /// let policy = PolicyConfig::kr_2025();
    /// let social = SocialInsurance::monthly(&policy.social, dec!(2800000));
    ///
    /// assert_eq!(social.national_pension, dec!(126000));
    /// assert_eq!(social.total(), dec!(263314.17));
    /// ```
    pub fn monthly(
        config: &SocialInsuranceConfig,
        taxable_base: Decimal,
    ) -> Self {
        let pension = &config.national_pension;
        let pension_base = clamp(
            taxable_base,
            pension.monthly_min_base,
            pension.monthly_max_base,
        );

        let health_insurance = taxable_base * config.health_insurance.rate;
        let long_term_care = health_insurance * config.health_insurance.long_term_care.rate_on_health;

        Self {
            national_pension: pension_base * pension.rate,
            health_insurance,
            long_term_care,
            employment_insurance: taxable_base * config.employment_insurance.rate,
        }
    }

    /// Sum of all four contributions.
    pub fn total(&self) -> Decimal {
        self.national_pension + self.health_insurance + self.long_term_care + self.employment_insurance
    }
}
