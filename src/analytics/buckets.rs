//! Time bucketing: fixed weekly day-ranges within a month and per-month
//! buckets across a multi-month range.

use time::{Date, Month};

use crate::{
    analytics::period::{last_day_of_month, next_month},
    locale,
    models::Transaction,
};

/// A labelled, summed group of transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// The axis label, e.g. "8-14" or "Бер".
    pub label: String,
    /// The sum of transaction amounts assigned to the bucket.
    pub total: f64,
}

/// Partition one month's transactions into the fixed four day-range buckets:
/// days 1-7, 8-14, 15-21 and 22 to the end of the month.
///
/// Labels carry the numeric day range with the upper bound clamped to the
/// month's actual day count, e.g. `"22-28"` in February. The last bucket
/// absorbs all remaining days regardless of month length. Callers pass the
/// transactions already filtered to the month.
pub fn weekly_buckets(transactions: &[&Transaction], year: i32, month: Month) -> Vec<Bucket> {
    let days_in_month = last_day_of_month(year, month);

    let mut buckets = vec![
        Bucket {
            label: format!("1-{}", days_in_month.min(7)),
            total: 0.0,
        },
        Bucket {
            label: format!("8-{}", days_in_month.clamp(8, 14)),
            total: 0.0,
        },
        Bucket {
            label: format!("15-{}", days_in_month.clamp(15, 21)),
            total: 0.0,
        },
        Bucket {
            label: format!("22-{}", days_in_month.max(22)),
            total: 0.0,
        },
    ];

    for transaction in transactions {
        let index = match transaction.date().day() {
            1..=7 => 0,
            8..=14 => 1,
            15..=21 => 2,
            _ => 3,
        };
        buckets[index].total += transaction.amount();
    }

    buckets
}

/// Build one bucket per calendar month in `[start, end]` inclusive, labelled
/// with the abbreviated month name.
///
/// Each transaction lands in the bucket at index
/// `(year - start_year) * 12 + (month - start_month)`; transactions outside
/// the range are dropped silently. An end before the start yields no buckets.
pub fn monthly_buckets(transactions: &[&Transaction], start: Date, end: Date) -> Vec<Bucket> {
    let bucket_count = (end.year() - start.year()) * 12
        + (end.month() as i32 - start.month() as i32)
        + 1;
    if bucket_count <= 0 {
        return Vec::new();
    }

    let mut buckets = Vec::with_capacity(bucket_count as usize);
    let (mut year, mut month) = (start.year(), start.month());
    for _ in 0..bucket_count {
        buckets.push(Bucket {
            label: locale::month_abbrev(month).to_owned(),
            total: 0.0,
        });
        (year, month) = next_month(year, month);
    }

    for transaction in transactions {
        let index = (transaction.date().year() - start.year()) * 12
            + (transaction.date().month() as i32 - start.month() as i32);
        if (0..bucket_count).contains(&index) {
            buckets[index as usize].total += transaction.amount();
        }
    }

    buckets
}

#[cfg(test)]
mod bucket_tests {
    use time::{Month, macros::date};

    use super::{monthly_buckets, weekly_buckets};
    use crate::models::{Category, NewTransaction, Transaction, UserId};

    fn transaction(amount: f64, date: time::Date) -> Transaction {
        Transaction::from_new(
            NewTransaction {
                title: "test".to_owned(),
                amount,
                date: Some(date),
                is_income: false,
                category: Category::new("Їжа", "🍔", "#FF5252"),
                note: None,
                user_id: UserId::new("a"),
            },
            date,
        )
    }

    fn labels(buckets: &[super::Bucket]) -> Vec<&str> {
        buckets.iter().map(|bucket| bucket.label.as_str()).collect()
    }

    #[test]
    fn weekly_labels_clamp_to_a_30_day_month() {
        let buckets = weekly_buckets(&[], 2024, Month::April);

        assert_eq!(labels(&buckets), vec!["1-7", "8-14", "15-21", "22-30"]);
    }

    #[test]
    fn weekly_labels_clamp_to_a_28_day_month() {
        let buckets = weekly_buckets(&[], 2025, Month::February);

        assert_eq!(labels(&buckets), vec!["1-7", "8-14", "15-21", "22-28"]);
    }

    #[test]
    fn weekly_labels_cover_a_31_day_month() {
        let buckets = weekly_buckets(&[], 2025, Month::January);

        assert_eq!(labels(&buckets), vec!["1-7", "8-14", "15-21", "22-31"]);
    }

    #[test]
    fn weekly_buckets_sum_to_the_month_total() {
        let transactions = vec![
            transaction(10.0, date!(2025 - 01 - 01)),
            transaction(20.0, date!(2025 - 01 - 07)),
            transaction(30.0, date!(2025 - 01 - 14)),
            transaction(40.0, date!(2025 - 01 - 21)),
            transaction(50.0, date!(2025 - 01 - 31)),
        ];
        let refs: Vec<&Transaction> = transactions.iter().collect();

        let buckets = weekly_buckets(&refs, 2025, Month::January);

        assert_eq!(buckets[0].total, 30.0);
        assert_eq!(buckets[1].total, 30.0);
        assert_eq!(buckets[2].total, 40.0);
        assert_eq!(buckets[3].total, 50.0);

        let total: f64 = buckets.iter().map(|bucket| bucket.total).sum();
        assert_eq!(total, 150.0);
    }

    #[test]
    fn monthly_buckets_span_the_range_in_order() {
        let transactions = vec![
            transaction(100.0, date!(2025 - 01 - 15)),
            transaction(200.0, date!(2025 - 02 - 10)),
        ];
        let refs: Vec<&Transaction> = transactions.iter().collect();

        let buckets = monthly_buckets(&refs, date!(2025 - 01 - 01), date!(2025 - 03 - 31));

        assert_eq!(labels(&buckets), vec!["Січ", "Лют", "Бер"]);
        assert_eq!(buckets[0].total, 100.0);
        assert_eq!(buckets[1].total, 200.0);
        assert_eq!(buckets[2].total, 0.0);
    }

    #[test]
    fn monthly_buckets_drop_out_of_range_transactions() {
        let transactions = vec![
            transaction(100.0, date!(2024 - 12 - 31)),
            transaction(200.0, date!(2025 - 04 - 01)),
            transaction(50.0, date!(2025 - 02 - 01)),
        ];
        let refs: Vec<&Transaction> = transactions.iter().collect();

        let buckets = monthly_buckets(&refs, date!(2025 - 01 - 01), date!(2025 - 03 - 31));

        let total: f64 = buckets.iter().map(|bucket| bucket.total).sum();
        assert_eq!(total, 50.0);
    }

    #[test]
    fn monthly_buckets_cross_year_boundaries() {
        let transactions = vec![transaction(75.0, date!(2025 - 01 - 05))];
        let refs: Vec<&Transaction> = transactions.iter().collect();

        let buckets = monthly_buckets(&refs, date!(2024 - 11 - 01), date!(2025 - 01 - 31));

        assert_eq!(labels(&buckets), vec!["Лис", "Гру", "Січ"]);
        assert_eq!(buckets[2].total, 75.0);
    }

    #[test]
    fn monthly_buckets_with_inverted_range_are_empty() {
        let buckets = monthly_buckets(&[], date!(2025 - 03 - 01), date!(2025 - 01 - 31));

        assert!(buckets.is_empty());
    }
}
