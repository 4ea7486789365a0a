//! Period presets and date-range helpers.
//!
//! Every preset resolves deterministically to a concrete inclusive range
//! given an explicit reference date; nothing here reads the system clock.

use time::{Date, Month};

/// An inclusive range of whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first day of the range.
    pub start: Date,
    /// The last day of the range.
    pub end: Date,
}

/// The selectable reporting periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodPreset {
    /// The current month and the two before it, up to the reference date.
    LastThreeMonths,
    /// The current month and the five before it, up to the reference date.
    LastSixMonths,
    /// The current month and the eleven before it, up to the reference date.
    LastTwelveMonths,
    /// January 1st of the reference year up to the reference date.
    ThisYear,
    /// The full calendar year before the reference year.
    LastYear,
    /// A specific full calendar year.
    Year(i32),
    /// A specific quarter (1-4) of a specific year.
    Quarter(i32, u8),
    /// From the earliest recorded transaction up to the reference date.
    AllTime,
    /// An arbitrary inclusive range.
    Custom(Date, Date),
}

impl PeriodPreset {
    /// Resolve the preset to a concrete range.
    ///
    /// `reference_date` stands in for "now". `earliest_transaction` anchors
    /// [PeriodPreset::AllTime]; an empty ledger falls back to five years
    /// before the reference date.
    pub fn resolve(&self, reference_date: Date, earliest_transaction: Option<Date>) -> DateRange {
        match *self {
            Self::LastThreeMonths => trailing_months(reference_date, 3),
            Self::LastSixMonths => trailing_months(reference_date, 6),
            Self::LastTwelveMonths => trailing_months(reference_date, 12),
            Self::ThisYear => DateRange {
                start: Date::from_calendar_date(reference_date.year(), Month::January, 1)
                    .expect("invalid year start date"),
                end: reference_date,
            },
            Self::LastYear => year_bounds(reference_date.year() - 1),
            Self::Year(year) => year_bounds(year),
            Self::Quarter(year, quarter) => quarter_bounds(year, quarter),
            Self::AllTime => DateRange {
                start: earliest_transaction
                    .unwrap_or_else(|| years_before(reference_date, 5)),
                end: reference_date,
            },
            Self::Custom(start, end) => DateRange { start, end },
        }
    }
}

/// The range covering the reference month and the `months - 1` months before
/// it, ending on the reference date.
fn trailing_months(reference_date: Date, months: u8) -> DateRange {
    let mut year = reference_date.year();
    let mut month = reference_date.month();

    for _ in 1..months {
        (year, month) = previous_month(year, month);
    }

    DateRange {
        start: Date::from_calendar_date(year, month, 1).expect("invalid trailing start date"),
        end: reference_date,
    }
}

/// The first and last day of a calendar month.
pub fn month_bounds(year: i32, month: Month) -> DateRange {
    let start = Date::from_calendar_date(year, month, 1).expect("invalid month start date");
    let end = Date::from_calendar_date(year, month, last_day_of_month(year, month))
        .expect("invalid month end date");

    DateRange { start, end }
}

fn year_bounds(year: i32) -> DateRange {
    DateRange {
        start: Date::from_calendar_date(year, Month::January, 1).expect("invalid year start date"),
        end: Date::from_calendar_date(year, Month::December, 31).expect("invalid year end date"),
    }
}

fn quarter_bounds(year: i32, quarter: u8) -> DateRange {
    let quarter = quarter.clamp(1, 4);
    let start_month = month_from_number((quarter - 1) * 3 + 1);
    let end_month = month_from_number(quarter * 3);

    DateRange {
        start: Date::from_calendar_date(year, start_month, 1).expect("invalid quarter start date"),
        end: Date::from_calendar_date(year, end_month, last_day_of_month(year, end_month))
            .expect("invalid quarter end date"),
    }
}

fn years_before(date: Date, years: i32) -> Date {
    let year = date.year() - years;
    let day = date.day().min(last_day_of_month(year, date.month()));

    Date::from_calendar_date(year, date.month(), day).expect("invalid shifted date")
}

pub(crate) fn previous_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::January => (year - 1, Month::December),
        _ => (year, month.previous()),
    }
}

pub(crate) fn next_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::December => (year + 1, Month::January),
        _ => (year, month.next()),
    }
}

pub(crate) fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn month_from_number(number: u8) -> Month {
    match number {
        1 => Month::January,
        2 => Month::February,
        3 => Month::March,
        4 => Month::April,
        5 => Month::May,
        6 => Month::June,
        7 => Month::July,
        8 => Month::August,
        9 => Month::September,
        10 => Month::October,
        11 => Month::November,
        _ => Month::December,
    }
}
