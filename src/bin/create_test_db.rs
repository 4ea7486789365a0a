use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::macros::date;

use oblik::{
    AuthService, CategoryRegistry, SqliteBlobStore, TransactionLedger,
    models::NewTransaction,
    store::initialize,
};

/// A utility for creating a database with demo data for the report CLI.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);
    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;
    initialize(&conn)?;
    let store = SqliteBlobStore::new(Arc::new(Mutex::new(conn)));

    println!("Creating test user...");
    let mut auth = AuthService::new(store.clone())?;
    let user = auth.sign_up("Олександр Шевченко", "test@example.com", "password", None)?;

    let mut registry = CategoryRegistry::new(store.clone())?;
    registry.seed_defaults()?;
    let category = |name: &str| {
        registry
            .list()
            .iter()
            .find(|category| category.name() == name)
            .expect("default category is seeded")
            .clone()
    };

    println!("Recording demo transactions...");
    let mut ledger = TransactionLedger::new(store)?;
    let today = date!(2025 - 08 - 29);
    let entries = [
        ("Оплата за проєкт", 25_000.0, date!(2025 - 08 - 05), true, "Розробка"),
        ("Консультація", 4_500.0, date!(2025 - 08 - 12), true, "Консультація"),
        ("Оренда офісу", 8_000.0, date!(2025 - 08 - 01), false, "Житло"),
        ("Продукти", 1_250.5, date!(2025 - 08 - 14), false, "Їжа"),
        ("Таксі", 320.0, date!(2025 - 08 - 23), false, "Транспорт"),
        ("Єдиний податок", 1_760.0, date!(2025 - 07 - 18), false, "Податки"),
    ];
    for (title, amount, date, is_income, category_name) in entries {
        ledger.add(
            NewTransaction {
                title: title.to_owned(),
                amount,
                date: Some(date),
                is_income,
                category: category(category_name),
                note: None,
                user_id: user.id().clone(),
            },
            today,
        )?;
    }

    println!("Success!");

    Ok(())
}
