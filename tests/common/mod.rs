#![allow(dead_code)]

use payment_contracts::domain::order::OrderSnapshot;
use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const ORDERS_HEADER: [&str; 6] = [
    "order_number",
    "amount_minor",
    "currency",
    "customer_email",
    "success_url",
    "cancel_url",
];

pub fn sample_order(order_number: &str) -> OrderSnapshot {
    OrderSnapshot::new(
        order_number,
        1299,
        "GBP",
        "test@example.com",
        "https://site/success",
        "https://site/cancel",
    )
}

/// Writes `rows` orders with random amounts; returns the amounts in row order.
pub fn generate_orders_csv(path: &Path, rows: usize) -> Result<Vec<i64>, Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();
    let mut amounts = Vec::with_capacity(rows);

    wtr.write_record(ORDERS_HEADER)?;

    for i in 1..=rows {
        let amount: i64 = rng.gen_range(0..=i64::MAX);
        amounts.push(amount);
        wtr.write_record([
            format!("ORD-{i:05}"),
            amount.to_string(),
            "GBP".to_string(),
            format!("customer{i}@example.com"),
            "https://site/success".to_string(),
            "https://site/cancel".to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(amounts)
}
