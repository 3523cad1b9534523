//! Custom Specifications Example
//!
//! This example shows the two ways to extend the built-in vocabulary:
//! closures, and hand-rolled types implementing `Spec`. It also makes the
//! flattening behavior of conjunctions observable.
//!
//! Run with: cargo run --example custom_specs

use millrace::prelude::*;

/// Matches products whose kind label starts with a given prefix.
struct KindStartsWith(&'static str);

impl Spec<Product> for KindStartsWith {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.kind().starts_with(self.0)
    }
}

fn main() {
    let catalog: Catalog = vec![
        Product::new("Shirt", Color::Green, Size::Small),
        Product::new("Shorts", Color::Blue, Size::Medium),
        Product::new("Pants", Color::Green, Size::Large),
        Product::new("Shoes", Color::Red, Size::Medium),
    ]
    .into();

    println!("--- Hand-rolled Spec impl ---\n");
    let sh_kinds = KindStartsWith("Sh");
    for product in catalog.select(&sh_kinds) {
        println!("  {}", product);
    }
    println!();

    println!("--- Closure specification ---\n");
    let warm = |p: &Product| p.color() == Color::Red || p.color() == Color::Green;
    for product in catalog.select(&warm) {
        println!("  {}", product);
    }
    println!();

    println!("--- Flattening ---\n");
    let left = all(KindStartsWith("Sh"), color_is(Color::Blue));
    let right = all(size_is(Size::Medium), |p: &Product| p.kind() != "Shoes");
    let combined = all(left, right);
    println!("combined clause count: {}", combined.clauses());
    for product in catalog.select(&combined) {
        println!("  {}", product);
    }
}
