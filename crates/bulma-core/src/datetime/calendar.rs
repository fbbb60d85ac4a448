//! Calendar grids for the date/time popout.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::classes::ClassList;

/// Number of cells in the day grid (six weeks).
pub const GRID_DAYS: usize = 42;

/// Days in `month` of `year`, or `None` for an invalid month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// `date` rolled back to the closest `weekday` on or before it.
#[must_use]
pub fn previous_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_sunday() - weekday.num_days_from_sunday()) % 7;
    date.checked_sub_days(Days::new(u64::from(back)))
        .unwrap_or(date)
}

/// The 42 days shown for the month containing `anchor`.
///
/// The grid starts on the last `start_of_week` on or before the day preceding
/// the first of the month, so the first row always shows part of the previous month.
#[must_use]
pub fn calendar_dates(anchor: NaiveDate, start_of_week: Weekday) -> Vec<NaiveDate> {
    let Some(first) = anchor
        .with_day(1)
        .and_then(|day| day.pred_opt())
    else {
        return Vec::new();
    };
    let start = previous_weekday(first, start_of_week);
    start
        .iter_days()
        .take(GRID_DAYS)
        .collect()
}

/// First day of each month of `year`.
#[must_use]
pub fn calendar_months(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .collect()
}

/// Years offered by the year picker: `center - range ..= center + range`.
#[must_use]
pub fn calendar_years(center: i32, range: u32) -> Vec<i32> {
    let range = i32::try_from(range).unwrap_or(i32::MAX / 2);
    (center.saturating_sub(range)..=center.saturating_add(range)).collect()
}

/// Weekday column headers starting at `start_of_week`.
#[must_use]
pub fn weekday_headers(start_of_week: Weekday) -> [Weekday; 7] {
    let mut headers = [start_of_week; 7];
    for index in 1..7 {
        headers[index] = headers[index - 1].succ();
    }
    headers
}

/// Three letter English month name.
#[must_use]
pub const fn month_abbreviation(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

/// Class of one grid cell.
#[must_use]
pub fn day_class(day: NaiveDate, selected: NaiveDate, today: NaiveDate) -> String {
    ClassList::new("calendar-date")
        .with_if(day.month() != selected.month(), "is-disabled")
        .with_if(day == today, "is-today")
        .with_if(day == selected, "is-active")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn month_lengths_cover_leap_years() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn grid_starts_before_the_first() {
        // 1 Feb 2024 is a Thursday; the day before is Wednesday 31 Jan.
        let grid = calendar_dates(date(2024, 2, 14), Weekday::Sun);
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0], date(2024, 1, 28));
        assert_eq!(grid[41], date(2024, 3, 9));

        let monday = calendar_dates(date(2024, 2, 14), Weekday::Mon);
        assert_eq!(monday[0], date(2024, 1, 29));
    }

    #[test]
    fn grid_starts_on_the_eve_when_it_is_start_of_week() {
        // 1 Sep 2024 is a Sunday; the eve is Saturday 31 Aug.
        let grid = calendar_dates(date(2024, 9, 1), Weekday::Sat);
        assert_eq!(grid[0], date(2024, 8, 31));
    }

    #[test]
    fn months_years_and_headers() {
        let months = calendar_months(2024);
        assert_eq!(months.len(), 12);
        assert_eq!(months[11], date(2024, 12, 1));

        let years = calendar_years(2024, 2);
        assert_eq!(years, vec![2022, 2023, 2024, 2025, 2026]);

        let headers = weekday_headers(Weekday::Mon);
        assert_eq!(headers[0], Weekday::Mon);
        assert_eq!(headers[6], Weekday::Sun);
        assert_eq!(month_abbreviation(9), "Sep");
    }

    #[test]
    fn day_classes_mark_state() {
        let selected = date(2024, 2, 14);
        assert_eq!(
            day_class(date(2024, 1, 31), selected, selected),
            "calendar-date is-disabled"
        );
        assert_eq!(
            day_class(selected, selected, selected),
            "calendar-date is-today is-active"
        );
    }
}
