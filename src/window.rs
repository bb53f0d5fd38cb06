use crate::error::NexradFetchErr;
use chrono::{naive::NaiveDate, naive::NaiveDateTime, Duration};

/// The requested range of scan times, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    /// Build a window, rejecting ranges where the end comes before the start.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, NexradFetchErr> {
        if end < start {
            log::error!("end before start: start - {} end - {}", start, end);
            return Err(NexradFetchErr::InvalidTimeRange(start, end));
        }

        Ok(TimeWindow { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// The calendar days whose store directories must be listed, in
    /// chronological order.
    ///
    /// Always runs one day past the end date. Scans near midnight land in the
    /// next day's directory on the remote, so the listing must reach past the
    /// nominal end of the window.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.start.date();
        let last = self.end.date() + Duration::days(1);

        (0..)
            .map(move |i| first + Duration::days(i))
            .take_while(move |day| *day <= last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn rejects_reversed_range() {
        let res = TimeWindow::new(t(2020, 5, 24, 0, 0), t(2020, 5, 23, 0, 0));
        assert!(matches!(res, Err(NexradFetchErr::InvalidTimeRange(..))));
    }

    #[test]
    fn zero_length_range_is_valid() {
        assert!(TimeWindow::new(t(2020, 5, 23, 12, 0), t(2020, 5, 23, 12, 0)).is_ok());
    }

    #[test]
    fn days_cover_window_plus_trailing_day() {
        let window = TimeWindow::new(t(2020, 5, 23, 12, 0), t(2020, 5, 23, 12, 5)).unwrap();
        let days: Vec<_> = window.days().collect();

        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2020, 5, 23).unwrap(),
                NaiveDate::from_ymd_opt(2020, 5, 24).unwrap(),
            ]
        );
    }

    #[test]
    fn days_span_multiple_dates() {
        let window = TimeWindow::new(t(2020, 5, 23, 12, 0), t(2020, 5, 25, 3, 5)).unwrap();
        let days: Vec<_> = window.days().collect();

        assert_eq!(days.len(), 4);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2020, 5, 23).unwrap());
        assert_eq!(days[3], NaiveDate::from_ymd_opt(2020, 5, 26).unwrap());
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let window = TimeWindow::new(t(2020, 5, 23, 12, 0), t(2020, 5, 23, 12, 5)).unwrap();

        assert!(window.contains(t(2020, 5, 23, 12, 0)));
        assert!(window.contains(t(2020, 5, 23, 12, 5)));
        assert!(!window.contains(t(2020, 5, 23, 11, 59)));
        assert!(!window.contains(t(2020, 5, 23, 12, 6)));
    }
}
