use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    #[diagnostic(code(meteo::load::not_found), help("check the path to the csv file"))]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not read {}: {source}", path.display())]
    #[diagnostic(code(meteo::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Bad csv in {}: {source}", path.display())]
    #[diagnostic(code(meteo::load::csv))]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Malformed row at line {line}: {reason}")]
    #[diagnostic(
        code(meteo::load::malformed_row),
        help("rows must look like `date,min_temp,max_temp` with integer temperatures")
    )]
    MalformedRow { line: u64, reason: String },
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
#[error("Invalid ISO 8601 date: `{input}`")]
#[diagnostic(
    code(meteo::invalid_date),
    help("expected something like `2021-07-06` or `2021-07-06T07:00:00+08:00`")
)]
pub struct InvalidDate {
    pub input: String,
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
#[error("Not a number: `{input}`")]
#[diagnostic(code(meteo::invalid_number))]
pub struct InvalidNumber {
    pub input: String,
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
#[error("Cannot compute {what} of an empty input")]
#[diagnostic(code(meteo::empty_input))]
pub struct EmptyInput {
    pub what: &'static str,
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum StatsError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    EmptyInput(#[from] EmptyInput),
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidNumber(#[from] InvalidNumber),
}

#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidDate(#[from] InvalidDate),
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidNumber(#[from] InvalidNumber),
    #[error(transparent)]
    #[diagnostic(transparent)]
    EmptyInput(#[from] EmptyInput),
}

impl From<StatsError> for ReportError {
    fn from(e: StatsError) -> Self {
        match e {
            StatsError::EmptyInput(e) => Self::EmptyInput(e),
            StatsError::InvalidNumber(e) => Self::InvalidNumber(e),
        }
    }
}
