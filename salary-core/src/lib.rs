pub mod calculations;
pub mod models;

pub use calculations::SalaryCalculator;
pub use models::*;
