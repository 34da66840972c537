//! Year-independent birthday windows.
//!
//! A window is a run of calendar days starting at some `today`, reduced to
//! `MM-DD` keys so it can be compared against birthdays from any year. When
//! the run crosses December 31 the end key sorts before the start key; such a
//! window *wraps* and matches keys on either side of the new year.

use chrono::{Datelike, Days, NaiveDate};

/// Longest window accepted by [`BirthdayWindow::starting`].
///
/// A 365-day run would end on the start key again and collapse to one day.
pub const MAX_WINDOW_DAYS: u32 = 364;

/// Default window length used by the upcoming-birthdays endpoint.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Inclusive `[start, end]` range of month-day keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayWindow {
  start: String,
  end:   String,
}

impl BirthdayWindow {
  /// The window covering `today` and the following `days` days.
  ///
  /// `days` is clamped to [`MAX_WINDOW_DAYS`].
  pub fn starting(today: NaiveDate, days: u32) -> Self {
    let days = days.min(MAX_WINDOW_DAYS);
    let last = today
      .checked_add_days(Days::new(u64::from(days)))
      .unwrap_or(NaiveDate::MAX);
    Self { start: month_day(today), end: month_day(last) }
  }

  /// First key in the window, `MM-DD`.
  pub fn start(&self) -> &str { &self.start }

  /// Last key in the window, `MM-DD`.
  pub fn end(&self) -> &str { &self.end }

  /// Whether the window crosses from December into January.
  pub fn wraps(&self) -> bool { self.start > self.end }

  /// Whether a birthday on `date` (any year) falls in the window.
  pub fn contains(&self, date: NaiveDate) -> bool {
    let key = month_day(date);
    let key = key.as_str();
    if self.wraps() {
      key >= self.start() || key <= self.end()
    } else {
      key >= self.start() && key <= self.end()
    }
  }
}

/// Zero-padded `MM-DD` key for `date`; sorts in calendar order.
pub fn month_day(date: NaiveDate) -> String {
  format!("{:02}-{:02}", date.month(), date.day())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
  }

  #[test]
  fn mid_year_window_is_inclusive() {
    let w = BirthdayWindow::starting(d(2024, 6, 10), 7);
    assert_eq!((w.start(), w.end()), ("06-10", "06-17"));
    assert!(!w.wraps());

    assert!(w.contains(d(1990, 6, 10)));
    assert!(w.contains(d(1985, 6, 17)));
    assert!(!w.contains(d(1985, 6, 18)));
    assert!(!w.contains(d(1985, 6, 9)));
  }

  #[test]
  fn year_end_window_wraps_into_january() {
    let w = BirthdayWindow::starting(d(2024, 12, 28), 7);
    assert_eq!((w.start(), w.end()), ("12-28", "01-04"));
    assert!(w.wraps());

    assert!(w.contains(d(1970, 12, 30)));
    assert!(w.contains(d(1970, 1, 2)));
    assert!(w.contains(d(1970, 1, 4)));
    assert!(!w.contains(d(1970, 1, 5)));
    assert!(!w.contains(d(1970, 12, 27)));
    assert!(!w.contains(d(1970, 6, 1)));
  }

  #[test]
  fn leap_day_birthday_is_seen_in_non_leap_years() {
    let w = BirthdayWindow::starting(d(2023, 2, 26), 7);
    assert_eq!(w.end(), "03-05");
    assert!(w.contains(d(2000, 2, 29)));
  }

  #[test]
  fn zero_days_is_just_today() {
    let w = BirthdayWindow::starting(d(2024, 3, 1), 0);
    assert_eq!(w.start(), w.end());
    assert!(w.contains(d(1999, 3, 1)));
    assert!(!w.contains(d(1999, 3, 2)));
  }

  #[test]
  fn oversized_window_is_clamped() {
    let w = BirthdayWindow::starting(d(2023, 3, 1), 10_000);
    assert_eq!(w, BirthdayWindow::starting(d(2023, 3, 1), MAX_WINDOW_DAYS));
    assert!(w.wraps());
    assert!(w.contains(d(1980, 2, 28)));
  }
}
