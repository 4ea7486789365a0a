//! Pure aggregation functions that turn transaction lists into chart-ready
//! series: time buckets, category breakdowns and donut-chart angles.
//!
//! Nothing in this module holds state; every function re-derives its output
//! from the slices it is given.

pub mod buckets;
pub mod categories;
pub mod period;

pub use buckets::{Bucket, monthly_buckets, weekly_buckets};
pub use categories::{CategorySlice, DonutSegment, category_breakdown, donut_segments};
pub use period::{DateRange, PeriodPreset};
