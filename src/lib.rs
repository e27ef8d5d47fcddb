//! Daily weather readings in, human readable reports out.
//!
//! ```no_run
//! let table = meteo_report::load_data_from_csv("week.csv")?;
//! print!("{}", meteo_report::generate_summary(&table)?);
//! print!("{}", meteo_report::generate_daily_summary(&table)?);
//! # Ok::<(), meteo_report::ReportError>(())
//! ```

mod convert;
mod error;
mod format;
mod load;
mod report;
mod stats;

pub use convert::{convert_f_to_c, Numeric};
pub use error::{EmptyInput, InvalidDate, InvalidNumber, LoadError, ReportError, StatsError};
pub use format::{convert_date, format_temperature, DEGREE_SYMBOL};
pub use load::load_data_from_csv;
pub use report::{generate_daily_summary, generate_summary};
pub use stats::{calculate_mean, find_max, find_min, Extreme};

/// One day of readings, temperatures in Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRow {
    // ISO 8601, validated only when a report formats it
    pub date: String,
    pub min_temp: i32,
    pub max_temp: i32,
    /// Columns after the maximum temperature, kept verbatim.
    pub extra: Vec<String>,
}

/// Rows in file order. Duplicates are kept.
pub type WeatherTable = Vec<WeatherRow>;
