use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use salary_core::{PolicyConfig, PolicyError, TaxBracket};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading tax bracket data.
#[derive(Debug, Error)]
pub enum TaxBracketLoaderError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid bracket table: {0}")]
    Invalid(#[from] PolicyError),
}

impl From<csv::Error> for TaxBracketLoaderError {
    fn from(err: csv::Error) -> Self {
        TaxBracketLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a tax brackets CSV file.
///
/// - `up_to`: inclusive upper bound of the bracket (empty for unbounded)
/// - `rate`: marginal rate as a decimal (e.g. 0.15 for 15%)
/// - `deduction`: cumulative tax at the previous bracket's upper bound
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub up_to: Option<Decimal>,
    pub rate: Decimal,
    pub deduction: Decimal,
}

impl From<TaxBracketRecord> for TaxBracket {
    fn from(record: TaxBracketRecord) -> Self {
        TaxBracket {
            up_to: record.up_to,
            rate: record.rate,
            deduction: record.deduction,
        }
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .replace(',', "")
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for progressive tax bracket tables stored as CSV.
///
/// ```csv
/// up_to,rate,deduction
/// 14000000,0.06,0
/// 50000000,0.15,840000
/// ,0.45,384060000
/// ```
pub struct TaxBracketLoader;

impl TaxBracketLoader {
    /// Parse raw bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice. Records are returned in file order and not validated.
    pub fn parse_records<R: Read>(reader: R) -> Result<Vec<TaxBracketRecord>, TaxBracketLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse and validate a bracket table from a CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`TaxBracketLoaderError::Invalid`] if the table is empty,
    /// unsorted, or does not end in an unbounded bracket.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracket>, TaxBracketLoaderError> {
        let brackets: Vec<TaxBracket> = Self::parse_records(reader)?
            .into_iter()
            .map(TaxBracket::from)
            .collect();

        PolicyConfig::validate_brackets(&brackets)?;
        Ok(brackets)
    }

    /// Read and validate a bracket table from a CSV file.
    pub fn from_path(path: &Path) -> Result<Vec<TaxBracket>, TaxBracketLoaderError> {
        let file = File::open(path).map_err(|source| TaxBracketLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let brackets = Self::parse(file)?;
        info!(path = %path.display(), count = brackets.len(), "loaded tax brackets");
        Ok(brackets)
    }
}
