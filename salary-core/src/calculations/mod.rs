//! Salary withholding calculations.
//!
//! The statutory schedules (earned-income deduction, progressive tax,
//! earned-income tax credit) are pure functions over [`Decimal`](rust_decimal::Decimal)
//! amounts. [`SalaryCalculator`] chains them together with social insurance
//! to turn an annual gross salary into a [`SalaryBreakdown`](crate::SalaryBreakdown).

pub mod calculator;
pub mod common;
pub mod earned_income;
pub mod progressive;
pub mod social_insurance;

pub use calculator::SalaryCalculator;
pub use earned_income::{
    apply_tax_credit, earned_income_deduction, tax_credit, tax_credit_limit,
};
pub use progressive::progressive_tax;
pub use social_insurance::SocialInsurance;
