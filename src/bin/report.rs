use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::OffsetDateTime;
use tracing_subscriber::{
    Layer,
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use oblik::{
    AuthService, CategoryRegistry, SqliteBlobStore, TransactionLedger,
    analytics::{PeriodPreset, category_breakdown, donut_segments, monthly_buckets, weekly_buckets},
    store::initialize,
};

/// Print a finance report for a registered user.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// Email of the user to report on.
    email: String,

    /// Report on a full year instead of the current month.
    #[arg(long)]
    year: Option<i32>,

    /// Report on everything the ledger holds for the user.
    #[arg(long, default_value_t = false)]
    all_time: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let args = Args::parse();
    let today = OffsetDateTime::now_utc().date();

    let connection = Connection::open(&args.db_path)?;
    initialize(&connection)?;
    let store = SqliteBlobStore::new(Arc::new(Mutex::new(connection)));

    let auth = AuthService::new(store.clone())?;
    let mut registry = CategoryRegistry::new(store.clone())?;
    registry.seed_defaults()?;
    let ledger = TransactionLedger::new(store)?;

    let Some(user) = auth.find_by_email(&args.email)? else {
        tracing::error!(email = %args.email, "no registered user with this email");
        std::process::exit(1);
    };

    println!("Звіт для {} <{}>", user.name(), user.email());
    println!(
        "Дохід: {:.2}  Витрати: {:.2}  Баланс: {:.2}",
        ledger.total_income(user.id()),
        ledger.total_expense(user.id()),
        ledger.balance(user.id()),
    );

    let preset = if args.all_time {
        PeriodPreset::AllTime
    } else if let Some(year) = args.year {
        PeriodPreset::Year(year)
    } else {
        PeriodPreset::Custom(today.replace_day(1)?, today)
    };
    let range = preset.resolve(today, ledger.earliest_date(user.id()));
    let transactions = ledger.by_user_for_range(user.id(), range.start, range.end);

    println!("\nПеріод: {} — {}", range.start, range.end);
    let buckets = if range.start.year() == range.end.year()
        && range.start.month() == range.end.month()
    {
        weekly_buckets(&transactions, range.start.year(), range.start.month())
    } else {
        monthly_buckets(&transactions, range.start, range.end)
    };
    for bucket in &buckets {
        println!("  {:>8}  {:.2}", bucket.label, bucket.total);
    }

    let expenses: Vec<_> = transactions
        .iter()
        .copied()
        .filter(|transaction| !transaction.is_income())
        .collect();
    let slices = category_breakdown(&expenses, &registry);

    println!("\nКатегорії витрат:");
    if slices.is_empty() {
        println!("  немає даних за обраний період");
    }
    for (slice, segment) in slices.iter().zip(donut_segments(&slices)) {
        println!(
            "  {}  {:.2}  ({:.0}% кола, {})",
            slice.name,
            slice.total,
            (segment.end - segment.start) * 100.0,
            slice.color,
        );
    }

    Ok(())
}

/// Log at INFO by default; `RUST_LOG` overrides the level.
fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().pretty().with_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            ),
        )
        .init();
}
