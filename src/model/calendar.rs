use chrono::{Duration, NaiveDate};

/// Display format for one calendar day, e.g. `07-Aug`.
pub const DAY_LABEL_FORMAT: &str = "%d-%b";

/// Builds the shared day-label sequence for a history window.
///
/// Returns exactly `days` labels, oldest first, ending at `today`. All
/// outlets index their series by this sequence. "Today" is an explicit
/// argument rather than a wall-clock read so simulation runs are
/// reproducible; the binary and frontends pass the current local date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use outlet_sim::model::calendar::day_labels;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
/// let labels = day_labels(today, 3);
/// assert_eq!(labels, vec!["28-Feb", "01-Mar", "02-Mar"]);
/// ```
pub fn day_labels(today: NaiveDate, days: usize) -> Vec<String> {
    (0..days)
        .rev()
        .map(|age| {
            (today - Duration::days(age as i64))
                .format(DAY_LABEL_FORMAT)
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn window_has_requested_length_and_ends_today() {
        let labels = day_labels(date(2025, 3, 15), 30);
        assert_eq!(labels.len(), 30);
        assert_eq!(labels.last().map(String::as_str), Some("15-Mar"));
        assert_eq!(labels.first().map(String::as_str), Some("14-Feb"));
    }

    #[test]
    fn labels_cross_month_boundaries() {
        let labels = day_labels(date(2025, 3, 2), 4);
        assert_eq!(labels, vec!["27-Feb", "28-Feb", "01-Mar", "02-Mar"]);
    }

    #[test]
    fn single_day_window() {
        let labels = day_labels(date(2025, 12, 31), 1);
        assert_eq!(labels, vec!["31-Dec"]);
    }
}
