use tracing::debug;

use crate::{
    calculate_mean, convert_date, convert_f_to_c, error::EmptyInput, find_max, find_min,
    format_temperature, ReportError, WeatherRow,
};

fn celsius(fahrenheit: f64) -> Result<String, ReportError> {
    Ok(format_temperature(convert_f_to_c(fahrenheit)?))
}

/// Overview of the whole period: the coldest low, the warmest high and the
/// average of each column.
///
/// The lowest temperature is searched among the minimums and the highest
/// among the maximums. When a value repeats, the last day holding it is the
/// one reported.
pub fn generate_summary(weather_data: &[WeatherRow]) -> Result<String, ReportError> {
    if weather_data.is_empty() {
        return Err(EmptyInput { what: "a summary" }.into());
    }

    let lows: Vec<i32> = weather_data.iter().map(|row| row.min_temp).collect();
    let highs: Vec<i32> = weather_data.iter().map(|row| row.max_temp).collect();

    let empty = || EmptyInput { what: "a summary" };
    let lowest = find_min(&lows).ok_or_else(empty)?;
    let highest = find_max(&highs).ok_or_else(empty)?;
    debug!(
        days = weather_data.len(),
        lowest = lowest.value,
        lowest_index = lowest.index,
        highest = highest.value,
        highest_index = highest.index,
        "computed weather extremes"
    );

    Ok(format!(
        "{days} Day Overview
  The lowest temperature will be {lowest_c}, and will occur on {lowest_date}.
  The highest temperature will be {highest_c}, and will occur on {highest_date}.
  The average low this week is {mean_low}.
  The average high this week is {mean_high}.
",
        days = weather_data.len(),
        lowest_c = celsius(lowest.value)?,
        lowest_date = convert_date(&weather_data[lowest.index].date)?,
        highest_c = celsius(highest.value)?,
        highest_date = convert_date(&weather_data[highest.index].date)?,
        mean_low = celsius(calculate_mean(&lows)?)?,
        mean_high = celsius(calculate_mean(&highs)?)?,
    ))
}

/// One block per day, in file order. An empty table gives an empty string.
pub fn generate_daily_summary(weather_data: &[WeatherRow]) -> Result<String, ReportError> {
    weather_data
        .iter()
        .map(|day| -> Result<String, ReportError> {
            Ok(format!(
                "---- {} ----
  Minimum Temperature: {}
  Maximum Temperature: {}

",
                convert_date(&day.date)?,
                celsius(day.min_temp.into())?,
                celsius(day.max_temp.into())?,
            ))
        })
        .collect()
}
