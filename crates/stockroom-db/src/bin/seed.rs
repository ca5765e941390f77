//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 500
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/inventory.db
//! ```
//!
//! Each product gets a name from [`CATALOG`], a size suffix, a quantity in
//! 0..=100 and a price in 0.99..=24.98. Values are derived from the row
//! index, so two runs produce the same data.

use std::env;
use stockroom_core::ProductInput;
use stockroom_db::{Database, DbConfig, ProductStore};

/// Base product names with a short description each.
const CATALOG: &[(&str, &str)] = &[
    ("Hex Bolt", "Zinc-plated steel hex bolt"),
    ("Wing Nut", "Stainless wing nut"),
    ("Wood Screw", "Countersunk wood screw"),
    ("Washer", "Flat steel washer"),
    ("Wall Anchor", "Nylon wall anchor"),
    ("Hinge", "Brass butt hinge"),
    ("Cable Tie", "UV-resistant cable tie"),
    ("Hose Clamp", "Worm-drive hose clamp"),
    ("Shelf Bracket", "Powder-coated shelf bracket"),
    ("Drawer Slide", "Ball-bearing drawer slide"),
];

/// Size suffixes and the price each adds, in cents.
const SIZES: &[(&str, i64)] = &[("S", 0), ("M", 150), ("L", 300), ("XL", 500), ("Bulk", 1200)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./inventory_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = parse_count(&args[i + 1])?;
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./inventory_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let products = db.products();

    println!("✓ Connected to database");
    println!("✓ Products table ready");

    let existing = products.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let input = generate_product(seed);

        if let Err(e) = products.create(&input).await {
            eprintln!("Failed to insert {}: {}", input.name, e);
            continue;
        }

        generated += 1;
    }

    println!();
    println!("✓ Generated {} products in {:?}", generated, start.elapsed());

    db.close().await;
    Ok(())
}

/// Parses the `--count` value. Anything but a whole number is rejected.
fn parse_count(value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid --count value '{}': expected a whole number", value))
}

/// Builds the product for row `seed`.
fn generate_product(seed: usize) -> ProductInput {
    let (name, description) = CATALOG[seed % CATALOG.len()];
    let (size, price_addon) = SIZES[(seed / CATALOG.len()) % SIZES.len()];
    let batch = seed / (CATALOG.len() * SIZES.len());

    // Base price $0.99 - $12.98 plus size addon
    let base_cents = 99 + ((seed * 37) % 1200) as i64;
    let price = (base_cents + price_addon) as f64 / 100.0;

    let name = if batch == 0 {
        format!("{} {}", name, size)
    } else {
        format!("{} {} #{}", name, size, batch + 1)
    };

    ProductInput {
        name,
        description: description.to_string(),
        quantity: (seed % 101) as i64,
        price,
    }
}
