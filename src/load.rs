use std::{fs, io, path::Path};

use csv::StringRecord;
use tracing::{debug, trace};

use crate::{error::LoadError, WeatherRow, WeatherTable};

/// Reads a weather csv into memory.
///
/// The first line is a header and is dropped whatever it contains, even when
/// it is blank. Other blank lines are skipped. Every other line must have an
/// integer minimum and maximum temperature in its second and third columns.
/// The date column is kept as-is and only checked when a report formats it.
pub fn load_data_from_csv(path: impl AsRef<Path>) -> Result<WeatherTable, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading weather data");

    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    // The csv reader skips blank lines, so a blank first line would let the
    // real header through as the header. It stands for the header itself.
    let blank_header = text
        .lines()
        .next()
        .is_some_and(str::is_empty);
    if blank_header {
        debug!("first line is blank, every record is data");
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(!blank_header)
        .flexible(true)
        .from_reader(text.as_bytes());
    if !blank_header {
        trace!(header = ?reader.headers().ok(), "dropping header");
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map_or(0, |position| position.line());
        trace!(line, fields = record.len(), "read row");
        rows.push(parse_row(&record, line)?);
    }

    debug!(path = %path.display(), rows = rows.len(), "loaded weather data");
    Ok(rows)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<WeatherRow, LoadError> {
    let field = |column: usize, name: &str| {
        record.get(column).ok_or_else(|| LoadError::MalformedRow {
            line,
            reason: format!("missing {name} in column {}", column + 1),
        })
    };
    let temperature = |column: usize, name: &str| -> Result<i32, LoadError> {
        let raw = field(column, name)?;
        raw.trim().parse().map_err(|_| LoadError::MalformedRow {
            line,
            reason: format!("{name} `{raw}` is not an integer"),
        })
    };

    Ok(WeatherRow {
        date: field(0, "date")?.to_string(),
        min_temp: temperature(1, "minimum temperature")?,
        max_temp: temperature(2, "maximum temperature")?,
        extra: record.iter().skip(3).map(String::from).collect(),
    })
}
