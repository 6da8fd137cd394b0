//! Time-weighted gap filling.

use chrono::NaiveDate;

/// Fill missing values that lie between two known values, weighting by the
/// number of days to each neighbour. Leading and trailing gaps stay missing.
///
/// `dates` must be sorted and the same length as `values`.
pub fn interpolate_interior(dates: &[NaiveDate], values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut filled = values.to_vec();
    let mut previous: Option<usize> = None;

    for (i, value) in values.iter().enumerate() {
        let Some(right) = value else { continue };
        if let Some(left_index) = previous {
            if i > left_index + 1 {
                let left = values[left_index].unwrap_or(*right);
                let start = dates[left_index];
                let span = (dates[i] - start).num_days() as f64;
                for (k, slot) in filled.iter_mut().enumerate().take(i).skip(left_index + 1) {
                    let fraction = if span > 0.0 {
                        (dates[k] - start).num_days() as f64 / span
                    } else {
                        0.0
                    };
                    *slot = Some(left + (right - left) * fraction);
                }
            }
        }
        previous = Some(i);
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 4, d).unwrap()
    }

    #[test]
    fn test_fills_by_day_distance() {
        // Gap of uneven spacing: 1st -> 2nd (missing) -> 5th.
        let dates = [day(1), day(2), day(5)];
        let values = [Some(10.0), None, Some(50.0)];
        let filled = interpolate_interior(&dates, &values);
        assert_eq!(filled, vec![Some(10.0), Some(20.0), Some(50.0)]);
    }

    #[test]
    fn test_multiple_gaps() {
        let dates: Vec<NaiveDate> = (1..=7).map(day).collect();
        let values = [Some(0.0), None, None, Some(3.0), None, Some(5.0), None];
        let filled = interpolate_interior(&dates, &values);
        assert_eq!(
            filled,
            vec![
                Some(0.0),
                Some(1.0),
                Some(2.0),
                Some(3.0),
                Some(4.0),
                Some(5.0),
                None
            ]
        );
    }

    #[test]
    fn test_edges_are_not_extrapolated() {
        let dates: Vec<NaiveDate> = (1..=5).map(day).collect();
        let values = [None, None, Some(2.0), None, None];
        let filled = interpolate_interior(&dates, &values);
        assert_eq!(filled, values.to_vec());
    }

    #[test]
    fn test_all_missing_and_empty() {
        let dates = [day(1), day(2)];
        assert_eq!(interpolate_interior(&dates, &[None, None]), vec![None, None]);
        assert!(interpolate_interior(&[], &[]).is_empty());
    }
}
