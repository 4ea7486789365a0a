//! Category breakdowns and donut-chart angle computation.

use std::collections::HashMap;

use crate::{
    models::{Rgb, Transaction},
    registry::CategoryRegistry,
    store::BlobStore,
};

/// A category's share of a transaction list: summed amount plus display
/// color.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// The category name the transactions were grouped under.
    pub name: String,
    /// The summed amount for the name.
    pub total: f64,
    /// The display color resolved through the registry.
    pub color: Rgb,
}

/// One segment of the donut chart, spanning `[start, end]` as fractions of a
/// full circle.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    /// The category name of the segment.
    pub name: String,
    /// The display color of the segment.
    pub color: Rgb,
    /// Where the segment starts, in `[0, 1]` of a full turn.
    pub start: f64,
    /// Where the segment ends, in `[0, 1]` of a full turn.
    pub end: f64,
}

/// Group transactions by category name, sum their amounts and sort the
/// result descending by sum.
///
/// Grouping is by name, not category ID, so two categories sharing a name
/// collapse into one slice. Colors come from the registry, falling back to
/// its fixed table for names no longer registered. Ties sort by name so the
/// output is deterministic.
pub fn category_breakdown<S: BlobStore>(
    transactions: &[&Transaction],
    registry: &CategoryRegistry<S>,
) -> Vec<CategorySlice> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions {
        *totals.entry(transaction.category().name()).or_insert(0.0) += transaction.amount();
    }

    let mut slices: Vec<CategorySlice> = totals
        .into_iter()
        .map(|(name, total)| CategorySlice {
            name: name.to_owned(),
            total,
            color: registry.color_for_name(name),
        })
        .collect();

    slices.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    slices
}

/// Compute the donut segments for an ordered list of category slices.
///
/// Segment `i` spans `[sum_before / total, sum_through / total]`. A zero
/// total draws no segments.
pub fn donut_segments(slices: &[CategorySlice]) -> Vec<DonutSegment> {
    let total: f64 = slices.iter().map(|slice| slice.total).sum();
    if total == 0.0 {
        return Vec::new();
    }

    let mut cumulative = 0.0;
    slices
        .iter()
        .map(|slice| {
            let start = cumulative / total;
            cumulative += slice.total;
            DonutSegment {
                name: slice.name.clone(),
                color: slice.color,
                start,
                end: cumulative / total,
            }
        })
        .collect()
}

#[cfg(test)]
mod category_breakdown_tests {
    use time::macros::date;

    use super::{CategorySlice, category_breakdown, donut_segments};
    use crate::{
        CategoryRegistry,
        models::{Category, NewTransaction, Rgb, Transaction, UserId},
        store::MemoryBlobStore,
    };

    fn transaction(category_name: &str, amount: f64) -> Transaction {
        Transaction::from_new(
            NewTransaction {
                title: "test".to_owned(),
                amount,
                date: Some(date!(2025 - 03 - 05)),
                is_income: false,
                category: Category::new(category_name, "❓", "gray"),
                note: None,
                user_id: UserId::new("a"),
            },
            date!(2025 - 03 - 05),
        )
    }

    fn empty_registry() -> CategoryRegistry<MemoryBlobStore> {
        CategoryRegistry::new(MemoryBlobStore::new()).unwrap()
    }

    #[test]
    fn breakdown_merges_names_and_sorts_descending() {
        let transactions = vec![
            transaction("Food", 100.0),
            transaction("Food", 50.0),
            transaction("Rent", 200.0),
        ];
        let refs: Vec<&Transaction> = transactions.iter().collect();

        let slices = category_breakdown(&refs, &empty_registry());

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].name, "Rent");
        assert_eq!(slices[0].total, 200.0);
        assert_eq!(slices[1].name, "Food");
        assert_eq!(slices[1].total, 150.0);
    }

    #[test]
    fn breakdown_resolves_colors_through_the_registry() {
        let mut registry = empty_registry();
        registry.add("Кава", "☕", "#795548").unwrap();
        let transactions = vec![transaction("Кава", 40.0), transaction("Їжа", 10.0)];
        let refs: Vec<&Transaction> = transactions.iter().collect();

        let slices = category_breakdown(&refs, &registry);

        assert_eq!(slices[0].color, Rgb::new(121, 85, 72));
        // "Їжа" is not registered, so the fallback table applies.
        assert_eq!(slices[1].color, Rgb::RED);
    }

    #[test]
    fn donut_segments_split_the_circle_proportionally() {
        let slices = vec![
            CategorySlice {
                name: "A".to_owned(),
                total: 25.0,
                color: Rgb::RED,
            },
            CategorySlice {
                name: "B".to_owned(),
                total: 75.0,
                color: Rgb::BLUE,
            },
        ];

        let segments = donut_segments(&slices);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].end, 0.25);
        assert_eq!(segments[1].start, 0.25);
        assert_eq!(segments[1].end, 1.0);
    }

    #[test]
    fn donut_segments_draw_nothing_for_a_zero_total() {
        let slices = vec![CategorySlice {
            name: "A".to_owned(),
            total: 0.0,
            color: Rgb::RED,
        }];

        assert!(donut_segments(&slices).is_empty());
    }

    #[test]
    fn donut_segments_of_an_empty_breakdown_are_empty() {
        assert!(donut_segments(&[]).is_empty());
    }
}
