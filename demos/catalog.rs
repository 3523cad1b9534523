//! Product Catalog Example
//!
//! This example builds a small in-memory catalog and runs a few filtering
//! scenarios, from a single-criterion specification up to a three-way
//! conjunction.
//!
//! Run with: cargo run --example catalog

use millrace::prelude::*;

fn main() {
    let catalog: Catalog = vec![
        Product::new("Shirt", Color::Green, Size::Small),
        Product::new("Shirt", Color::Green, Size::Medium),
        Product::new("Shirt", Color::Green, Size::Large),
        Product::new("Pants", Color::Blue, Size::Large),
        Product::new("Pants", Color::Blue, Size::XtraLarge),
        Product::new("Pants", Color::Green, Size::Large),
        Product::new("Shirt", Color::Blue, Size::Medium),
        Product::new("Shirt", Color::Blue, Size::Large),
    ]
    .into();

    show(&catalog, "Green products", &color_is(Color::Green));
    show(&catalog, "Pants", &kind_is("Pants"));
    show(
        &catalog,
        "Large green pants",
        &size_is(Size::Large)
            .and(kind_is("Pants"))
            .and(color_is(Color::Green)),
    );

    // Closures work anywhere a specification does.
    show(&catalog, "Roomier than medium", &|p: &Product| {
        p.size() > Size::Medium
    });
}

fn show(catalog: &Catalog, title: &str, spec: &dyn Spec<Product>) {
    println!("{}:", title);
    for product in catalog.select(spec) {
        println!(
            "  {} ({}, {})",
            product.kind(),
            product.size().label(),
            product.color().label()
        );
    }
    println!();
}
