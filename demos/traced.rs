//! Traced Filtering Example
//!
//! Demonstrates the `tracing` feature: each filter pass emits a debug event
//! recording how many entities were scanned and how many matched.
//!
//! Run with: cargo run --example traced --features tracing

use millrace::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let catalog: Catalog = vec![
        Product::new("Shirt", Color::Green, Size::Small),
        Product::new("Pants", Color::Blue, Size::Large),
        Product::new("Pants", Color::Green, Size::Large),
        Product::new("Shirt", Color::Blue, Size::Medium),
    ]
    .into();

    let green = catalog.select(&color_is(Color::Green));
    println!("green products: {}", green.len());

    let large_green_pants = size_is(Size::Large)
        .and(kind_is("Pants"))
        .and(color_is(Color::Green));
    let matches = catalog.select(&large_green_pants);
    println!("large green pants: {}", matches.len());
}
