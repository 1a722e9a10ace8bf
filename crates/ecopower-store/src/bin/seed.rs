//! # Seed Data Generator
//!
//! Populates the store with development data.
//!
//! ## Usage
//! ```bash
//! # Seed with defaults (25 customers, 60 products)
//! cargo run -p ecopower-store --bin seed
//!
//! # Custom amounts
//! cargo run -p ecopower-store --bin seed -- --customers 100 --products 500
//!
//! # Specify database path
//! cargo run -p ecopower-store --bin seed -- --db ./data/ecopower.db
//! ```
//!
//! ## Generated Data
//! - Customers with rotating South African names
//! - Products across the solar hardware catalogue
//! - A small fixed service catalogue
//! - One order per customer with one or two product lines

use chrono::{Duration, Utc};
use std::env;

use ecopower_core::{Customer, Order, OrderDetail, Product, Service};
use ecopower_store::{Store, StoreConfig};

/// Name pools for customer generation
const FIRST_NAMES: &[&str] = &[
    "Thandi", "Sipho", "Anna", "Pieter", "Lerato", "Johan", "Naledi", "Kobus", "Zanele", "Daniel",
];
const SURNAMES: &[&str] = &[
    "Nkosi", "Dlamini", "van der Merwe", "Botha", "Mokoena", "Pillay", "Khumalo", "Smit",
];

/// Product families for catalogue generation
const PRODUCT_FAMILIES: &[(&str, i64)] = &[
    ("Solar Panel 330W", 89_99),
    ("Solar Panel 450W", 129_99),
    ("Solar Panel 550W", 159_99),
    ("Inverter 3kW", 649_00),
    ("Inverter 5kW", 899_00),
    ("Battery 5kWh", 1_499_00),
    ("Battery 10kWh", 2_799_00),
    ("Mounting Rail 2m", 24_50),
    ("MC4 Connector Pair", 3_95),
    ("DC Cable 10m", 18_75),
];

/// Fixed service catalogue
const SERVICES: &[(&str, i64)] = &[
    ("Site Assessment", 85_00),
    ("Panel Installation", 450_00),
    ("Panel Cleaning", 65_00),
    ("Inverter Commissioning", 120_00),
    ("Battery Health Check", 95_00),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Repository logs go through tracing; progress goes to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut customers: usize = 25;
    let mut products: usize = 60;
    let mut db_path = String::from("./ecopower_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--customers" | "-c" => {
                if i + 1 < args.len() {
                    customers = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--products" | "-p" => {
                if i + 1 < args.len() {
                    products = args[i + 1].parse().unwrap_or(60);
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
                println!("EcoPower Logistics Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --customers <N>  Number of customers to generate (default: 25)");
                println!("  -p, --products <N>   Number of products to generate (default: 60)");
                println!("  -d, --db <PATH>      Database file path (default: ./ecopower_dev.db)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("EcoPower Logistics Seed Data Generator");
    println!("======================================");
    println!("Database:  {}", db_path);
    println!("Customers: {}", customers);
    println!("Products:  {}", products);
    println!();

    // Connect to the store
    let store = Store::new(StoreConfig::new(&db_path)).await?;
    let ctx = store.context();

    println!("Connected, migrations applied");

    // Skip seeding a non-empty database
    let existing = ctx.customers().count().await?;
    if existing > 0 {
        println!("Database already has {} customers", existing);
        println!("Skipping seed to avoid duplicates.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();

    // Customers
    let customer_batch: Vec<Customer> = (0..customers)
        .map(|n| generate_customer(n as i64 + 1, n))
        .collect();
    ctx.customers().add_range(&customer_batch)?;

    // Products
    let product_batch: Vec<Product> = (0..products)
        .map(|n| generate_product(n as i64 + 1, n))
        .collect();
    ctx.products().add_range(&product_batch)?;

    // Services (fixed catalogue)
    let service_batch: Vec<Service> = SERVICES
        .iter()
        .enumerate()
        .map(|(n, (name, rate_cents))| Service {
            id: n as i64 + 1,
            name: (*name).to_string(),
            description: None,
            rate_cents: *rate_cents,
        })
        .collect();
    ctx.services().add_range(&service_batch)?;

    // One order per customer, with one or two lines
    let mut line_id = 1i64;
    for customer in &customer_batch {
        let order = generate_order(customer.id, customer.id);
        ctx.orders().add(&order)?;

        let lines = order_lines(order.id, customer.id, line_id, product_batch.len() as i64);
        line_id += lines.len() as i64;
        for line in &lines {
            ctx.order_details().add(line)?;
        }
    }

    println!("Staged {} changes, committing...", ctx.pending_changes());

    let rows = ctx.save_changes().await?;
    let elapsed = start.elapsed();

    println!();
    println!("Committed {} rows in {:?}", rows, elapsed);

    // Quick smoke queries
    let panels = ctx.products().search("panel", 10).await?;
    println!("Search 'panel': {} results", panels.len());
    let recent = ctx.orders().recent(5).await?;
    println!("Recent orders:  {} results", recent.len());

    println!();
    println!("Seed complete!");

    Ok(())
}

/// Generates a single customer with rotating name-pool data.
fn generate_customer(id: i64, seed: usize) -> Customer {
    Customer {
        id,
        title: None,
        first_name: FIRST_NAMES[seed % FIRST_NAMES.len()].to_string(),
        surname: SURNAMES[seed % SURNAMES.len()].to_string(),
        cell_phone: Some(format!("+27 82 555 {:04}", seed % 10_000)),
    }
}

/// Generates a single product from the family table, with a batch suffix to
/// keep names distinguishable past one pass of the table.
fn generate_product(id: i64, seed: usize) -> Product {
    let (family, base_price) = PRODUCT_FAMILIES[seed % PRODUCT_FAMILIES.len()];
    let batch = seed / PRODUCT_FAMILIES.len() + 1;

    Product {
        id,
        name: format!("{family} (batch {batch})"),
        description: None,
        unit_price_cents: base_price + (seed as i64 % 7) * 25,
        units_in_stock: (seed as i64 * 13) % 101,
    }
}

/// Generates an order dated a few days back from now.
fn generate_order(id: i64, customer_id: i64) -> Order {
    Order {
        id,
        customer_id,
        order_date: Utc::now() - Duration::days(id % 30),
        delivery_address: format!("{} Baobab Road, Midrand", 10 + id),
    }
}

/// Builds the lines for one order, spreading product picks across the
/// catalogue. An empty catalogue yields an order with no lines.
fn order_lines(
    order_id: i64,
    customer_id: i64,
    first_line_id: i64,
    product_count: i64,
) -> Vec<OrderDetail> {
    if product_count == 0 {
        return Vec::new();
    }

    let count = 1 + (customer_id % 2);
    (0..count)
        .map(|l| {
            let line_id = first_line_id + l;
            OrderDetail {
                id: line_id,
                order_id,
                product_id: 1 + ((customer_id + l) % product_count),
                quantity: 1 + (line_id % 5),
                discount_bps: if line_id % 4 == 0 { 500 } else { 0 },
            }
        })
        .collect()
}
