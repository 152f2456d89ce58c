use std::fs;
use std::path::Path;

use salary_core::{PolicyConfig, PolicyError};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading a policy document.
#[derive(Debug, Error)]
pub enum PolicyLoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid policy: {0}")]
    Invalid(#[from] PolicyError),
}

/// Loader for complete [`PolicyConfig`] documents written in TOML.
///
/// Field names match [`PolicyConfig`]; the top bracket omits `up_to`.
///
/// ```
/// use salary_data::PolicyLoader;
///
/// let policy = PolicyLoader::from_toml_str(r#"
///     currency = "KRW"
///     periods_per_year = 12
///     rounding = "floor"
///     non_taxable_allowance = 200000
///     dependents = 2
///     basic_deduction_per_dependent = 1500000
///
///     [social.national_pension]
///     label = "국민연금"
///     rate = 0.045
///     monthly_min_base = 390000
///     monthly_max_base = 5900000
///
///     [social.health_insurance]
///     label = "건강보험"
///     rate = 0.03545
///
///     [social.health_insurance.long_term_care]
///     label = "장기요양"
///     rate_on_health = 0.1295
///
///     [social.employment_insurance]
///     label = "고용보험"
///     rate = 0.009
///
///     [tax]
///     local_tax_rate = 0.1
///
///     [[tax.brackets]]
///     up_to = 14000000
///     rate = 0.06
///     deduction = 0
///
///     [[tax.brackets]]
///     rate = 0.15
///     deduction = 840000
/// "#).unwrap();
///
/// assert_eq!(policy.dependents, 2);
/// assert_eq!(policy.tax.brackets.len(), 2);
/// ```
pub struct PolicyLoader;

impl PolicyLoader {
    /// Parse and validate a policy from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<PolicyConfig, PolicyLoaderError> {
        let policy: PolicyConfig = toml::from_str(source)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Read, parse and validate a policy from a TOML file.
    pub fn from_path(path: &Path) -> Result<PolicyConfig, PolicyLoaderError> {
        let source = fs::read_to_string(path).map_err(|source| PolicyLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let policy = Self::from_toml_str(&source)?;
        info!(
            path = %path.display(),
            currency = %policy.currency,
            brackets = policy.tax.brackets.len(),
            "loaded policy"
        );
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use salary_core::RoundingMode;

    use super::*;

    fn minimal_policy(rounding: &str, dependents: u32) -> String {
        format!(
            r#"
currency = "KRW"
periods_per_year = 12
rounding = "{rounding}"
non_taxable_allowance = 200000
dependents = {dependents}
basic_deduction_per_dependent = 1500000

[social.national_pension]
label = "국민연금"
rate = 0.045
monthly_min_base = 390000
monthly_max_base = 5900000

[social.health_insurance]
label = "건강보험"
rate = 0.03545

[social.health_insurance.long_term_care]
label = "장기요양"
rate_on_health = 0.1295

[social.employment_insurance]
label = "고용보험"
rate = 0.009

[tax]
local_tax_rate = 0.1

[[tax.brackets]]
up_to = 14000000
rate = 0.06
deduction = 0

[[tax.brackets]]
rate = 0.15
deduction = 840000
"#
        )
    }

    #[test]
    fn parses_rates_exactly() {
        let policy = PolicyLoader::from_toml_str(&minimal_policy("floor", 1)).unwrap();

        assert_eq!(policy.social.health_insurance.rate, dec!(0.03545));
        assert_eq!(
            policy.social.health_insurance.long_term_care.rate_on_health,
            dec!(0.1295)
        );
        assert_eq!(policy.tax.brackets[0].up_to, Some(dec!(14000000)));
        assert_eq!(policy.tax.brackets[1].up_to, None);
    }

    #[test]
    fn accepts_rounding_aliases() {
        let round = PolicyLoader::from_toml_str(&minimal_policy("round", 1)).unwrap();
        let ceil = PolicyLoader::from_toml_str(&minimal_policy("ceil", 1)).unwrap();
        let nearest = PolicyLoader::from_toml_str(&minimal_policy("nearest", 1)).unwrap();

        assert_eq!(round.rounding, RoundingMode::Nearest);
        assert_eq!(ceil.rounding, RoundingMode::Ceiling);
        assert_eq!(nearest.rounding, RoundingMode::Nearest);
    }

    #[test]
    fn rejects_unknown_rounding_mode() {
        let result = PolicyLoader::from_toml_str(&minimal_policy("truncate", 1));

        assert!(matches!(result, Err(PolicyLoaderError::TomlParse(_))));
    }

    #[test]
    fn rejects_invalid_policy_values() {
        let result = PolicyLoader::from_toml_str(&minimal_policy("floor", 0));

        assert!(matches!(
            result,
            Err(PolicyLoaderError::Invalid(PolicyError::InvalidDependents(0)))
        ));
    }

    #[test]
    fn rejects_missing_section() {
        let result = PolicyLoader::from_toml_str("currency = \"KRW\"\n");

        assert!(matches!(result, Err(PolicyLoaderError::TomlParse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PolicyLoader::from_path(Path::new("no/such/policy.toml")).unwrap_err();

        assert!(err.to_string().contains("no/such/policy.toml"));
    }
}
