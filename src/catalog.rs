//! Catalog entities: products and the collection that owns them
//!
//! A [`Product`] is an immutable value carrying a kind label, a [`Color`],
//! and a [`Size`]. A [`Catalog`] owns an ordered sequence of products and is
//! read-only during filtering; selections borrow from it rather than copying
//! entity data.
//!
//! # Example
//!
//! ```rust
//! use millrace::catalog::{Catalog, Color, Product, Size};
//! use millrace::spec::color_is;
//!
//! let catalog: Catalog = vec![
//!     Product::new("Shirt", Color::Green, Size::Small),
//!     Product::new("Pants", Color::Blue, Size::Large),
//! ]
//! .into();
//!
//! let green = catalog.select(&color_is(Color::Green));
//! assert_eq!(green.len(), 1);
//! assert_eq!(green[0].kind(), "Shirt");
//! ```

use std::fmt;

use crate::filter::filter;
use crate::spec::Spec;

/// Product color, drawn from a closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Red products.
    Red,
    /// Green products.
    Green,
    /// Blue products.
    Blue,
}

impl Color {
    /// Human-readable label for this color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::catalog::Color;
    ///
    /// assert_eq!(Color::Green.label(), "Green");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product size, drawn from a closed set ordered from smallest to largest.
///
/// The `Ord` derive follows declaration order, so
/// `Size::Small < Size::Medium < Size::Large < Size::XtraLarge`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Size {
    /// Small.
    Small,
    /// Medium.
    Medium,
    /// Large.
    Large,
    /// Extra large.
    XtraLarge,
}

impl Size {
    /// Human-readable label for this size.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::catalog::Size;
    ///
    /// assert_eq!(Size::XtraLarge.label(), "Xtra Large");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::XtraLarge => "Xtra Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable catalog entry: a kind label plus a color and a size.
///
/// Fields are private and there are no setters; a product never changes after
/// construction.
///
/// # Example
///
/// ```rust
/// use millrace::catalog::{Color, Product, Size};
///
/// let shirt = Product::new("Shirt", Color::Blue, Size::Medium);
/// assert_eq!(shirt.kind(), "Shirt");
/// assert_eq!(shirt.color(), Color::Blue);
/// assert_eq!(shirt.size(), Size::Medium);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    kind: String,
    color: Color,
    size: Size,
}

impl Product {
    /// Create a product from a kind label, color, and size.
    pub fn new(kind: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            kind: kind.into(),
            color,
            size,
        }
    }

    /// The kind label, e.g. `"Shirt"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The product color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The product size.
    pub fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.kind, self.size, self.color)
    }
}

/// An ordered collection of products.
///
/// The catalog owns its entities and is read-only during filtering:
/// [`Catalog::select`] borrows the catalog and returns references into it, in
/// the same relative order.
///
/// # Example
///
/// ```rust
/// use millrace::catalog::{Catalog, Color, Product, Size};
/// use millrace::spec::{kind_is, SpecExt};
///
/// let catalog: Catalog = vec![
///     Product::new("Shirt", Color::Green, Size::Small),
///     Product::new("Pants", Color::Green, Size::Large),
/// ]
/// .into();
///
/// let green_pants = catalog.select(&kind_is("Pants").and(|p: &Product| {
///     p.color() == Color::Green
/// }));
/// assert_eq!(green_pants.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog contains no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Select the products satisfying `spec`, preserving catalog order.
    ///
    /// Accepts any specification, simple or composite, through the
    /// [`Spec`] capability. The result borrows from the catalog.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::catalog::{Catalog, Color, Product, Size};
    /// use millrace::spec::size_is;
    ///
    /// let catalog: Catalog = vec![
    ///     Product::new("Shirt", Color::Green, Size::Large),
    ///     Product::new("Pants", Color::Blue, Size::Small),
    /// ]
    /// .into();
    ///
    /// let large = catalog.select(&size_is(Size::Large));
    /// assert_eq!(large.len(), 1);
    /// ```
    pub fn select<S>(&self, spec: &S) -> Vec<&Product>
    where
        S: Spec<Product> + ?Sized,
    {
        filter(&self.products, spec)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_labels() {
        assert_eq!(Color::Red.label(), "Red");
        assert_eq!(Color::Green.label(), "Green");
        assert_eq!(Color::Blue.label(), "Blue");
    }

    #[test]
    fn test_size_labels() {
        assert_eq!(Size::Small.label(), "Small");
        assert_eq!(Size::Medium.label(), "Medium");
        assert_eq!(Size::Large.label(), "Large");
        assert_eq!(Size::XtraLarge.label(), "Xtra Large");
    }

    #[test]
    fn test_size_ordering() {
        assert!(Size::Small < Size::Medium);
        assert!(Size::Medium < Size::Large);
        assert!(Size::Large < Size::XtraLarge);
    }

    #[test]
    fn test_product_accessors() {
        let p = Product::new("Hat", Color::Red, Size::Small);
        assert_eq!(p.kind(), "Hat");
        assert_eq!(p.color(), Color::Red);
        assert_eq!(p.size(), Size::Small);
    }

    #[test]
    fn test_product_display() {
        let p = Product::new("Pants", Color::Blue, Size::XtraLarge);
        assert_eq!(p.to_string(), "Pants (Xtra Large, Blue)");
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog: Catalog = vec![
            Product::new("Shirt", Color::Green, Size::Small),
            Product::new("Pants", Color::Blue, Size::Large),
            Product::new("Hat", Color::Red, Size::Medium),
        ]
        .into();

        let kinds: Vec<&str> = catalog.iter().map(Product::kind).collect();
        assert_eq!(kinds, vec!["Shirt", "Pants", "Hat"]);
    }

    #[test]
    fn test_catalog_from_iterator() {
        let catalog: Catalog = ["Shirt", "Pants"]
            .iter()
            .map(|kind| Product::new(*kind, Color::Green, Size::Medium))
            .collect();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_select_borrows_in_order() {
        use crate::spec::color_is;

        let catalog: Catalog = vec![
            Product::new("Shirt", Color::Green, Size::Small),
            Product::new("Pants", Color::Blue, Size::Large),
            Product::new("Socks", Color::Green, Size::Medium),
        ]
        .into();

        let green = catalog.select(&color_is(Color::Green));
        let kinds: Vec<&str> = green.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, vec!["Shirt", "Socks"]);
        assert!(std::ptr::eq(green[0], &catalog.products()[0]));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_product_round_trip() {
        let product = Product::new("Shirt", Color::Green, Size::Small);
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_catalog_round_trip() {
        let catalog: Catalog = vec![
            Product::new("Shirt", Color::Green, Size::Small),
            Product::new("Pants", Color::Blue, Size::XtraLarge),
        ]
        .into();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
