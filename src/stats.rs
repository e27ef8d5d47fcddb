use crate::convert::Numeric;
use crate::error::{EmptyInput, StatsError};

/// An extreme value and the position where it was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme {
    pub value: f64,
    pub index: usize,
}

pub fn calculate_mean<T: Numeric>(values: &[T]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(EmptyInput { what: "the mean" }.into());
    }

    let mut total = 0.0;
    for value in values {
        total += value.to_f64()?;
    }
    Ok(total / values.len() as f64)
}

/// Smallest value and its index. On ties the *last* occurrence wins.
pub fn find_min<T>(values: &[T]) -> Option<Extreme>
where
    T: Copy + PartialOrd + Into<f64>,
{
    find_extreme(values, |candidate, current| candidate <= current)
}

/// Largest value and its index. On ties the *last* occurrence wins.
pub fn find_max<T>(values: &[T]) -> Option<Extreme>
where
    T: Copy + PartialOrd + Into<f64>,
{
    find_extreme(values, |candidate, current| candidate >= current)
}

fn find_extreme<T>(values: &[T], replaces: fn(&T, &T) -> bool) -> Option<Extreme>
where
    T: Copy + PartialOrd + Into<f64>,
{
    let (first, rest) = values.split_first()?;
    let mut best = *first;
    let mut index = 0;

    for (i, value) in rest.iter().enumerate() {
        if replaces(value, &best) {
            best = *value;
            index = i + 1;
        }
    }

    Some(Extreme {
        value: best.into(),
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidNumber;

    #[test]
    fn mean() {
        assert_eq!(calculate_mean(&[0; 18]).unwrap(), 0.0);
        assert_eq!(calculate_mean(&[1, 2, 3, 4]).unwrap(), 2.5);
        assert_eq!(calculate_mean(&[-1.5, 1.5, 3.0]).unwrap(), 1.0);
        assert_eq!(calculate_mean(&["51", "58", "59"]).unwrap(), 56.0);
    }

    #[test]
    fn mean_of_nothing_is_an_error() {
        let empty: [i32; 0] = [];
        assert_eq!(
            calculate_mean(&empty),
            Err(StatsError::EmptyInput(EmptyInput { what: "the mean" }))
        );
    }

    #[test]
    fn mean_rejects_bad_numbers() {
        assert_eq!(
            calculate_mean(&["51", "warm"]),
            Err(StatsError::InvalidNumber(InvalidNumber {
                input: String::from("warm")
            }))
        );
    }

    #[test]
    fn min_of_nothing() {
        let empty: [i32; 0] = [];
        assert_eq!(find_min(&empty), None);
        assert_eq!(find_max(&empty), None);
    }

    #[test]
    fn min() {
        assert_eq!(
            find_min(&[1, 2, 3, 4, -1, 1]),
            Some(Extreme {
                value: -1.0,
                index: 4
            })
        );
        assert_eq!(
            find_min(&[7.5]),
            Some(Extreme {
                value: 7.5,
                index: 0
            })
        );
    }

    #[test]
    fn max() {
        assert_eq!(
            find_max(&[1, 2, 3, 4, -1, 1]),
            Some(Extreme {
                value: 4.0,
                index: 3
            })
        );
    }

    #[test]
    fn last_tie_wins() {
        let lows = [49, 57, 56, 55, 57, 53, 49];
        assert_eq!(
            find_min(&lows),
            Some(Extreme {
                value: 49.0,
                index: 6
            })
        );
        assert_eq!(
            find_max(&lows),
            Some(Extreme {
                value: 57.0,
                index: 4
            })
        );
        assert_eq!(
            find_max(&[3, 3, 3]),
            Some(Extreme {
                value: 3.0,
                index: 2
            })
        );
    }
}
