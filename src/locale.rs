//! Ukrainian date labels for day grouping and chart axes.

use time::{Date, Month};

/// The genitive month name used in day labels, e.g. "березня".
pub fn month_name_genitive(month: Month) -> &'static str {
    match month {
        Month::January => "січня",
        Month::February => "лютого",
        Month::March => "березня",
        Month::April => "квітня",
        Month::May => "травня",
        Month::June => "червня",
        Month::July => "липня",
        Month::August => "серпня",
        Month::September => "вересня",
        Month::October => "жовтня",
        Month::November => "листопада",
        Month::December => "грудня",
    }
}

/// The capitalized abbreviated month name used as a chart label, e.g. "Бер".
pub fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Січ",
        Month::February => "Лют",
        Month::March => "Бер",
        Month::April => "Кві",
        Month::May => "Тра",
        Month::June => "Чер",
        Month::July => "Лип",
        Month::August => "Сер",
        Month::September => "Вер",
        Month::October => "Жов",
        Month::November => "Лис",
        Month::December => "Гру",
    }
}

/// Render a date as the day label transactions are grouped under,
/// e.g. "5 березня, 2025".
pub fn day_label(date: Date) -> String {
    format!(
        "{} {}, {}",
        date.day(),
        month_name_genitive(date.month()),
        date.year()
    )
}
