//! Product specifications
//!
//! This module provides the leaf specifications for catalog products: match
//! by kind label, by color, or by size. Each stores its expected value at
//! construction and never changes afterwards.

use super::combinators::Spec;
use crate::catalog::{Color, Product, Size};

/// Specification matching products with a given kind label.
#[derive(Clone, Debug)]
pub struct KindIs {
    expected: String,
}

impl Spec<Product> for KindIs {
    #[inline]
    fn is_satisfied(&self, item: &Product) -> bool {
        item.kind() == self.expected
    }
}

/// Create a specification that matches products by kind label.
///
/// # Example
///
/// ```rust
/// use millrace::catalog::{Color, Product, Size};
/// use millrace::spec::{kind_is, Spec};
///
/// let pants = kind_is("Pants");
/// assert!(pants.is_satisfied(&Product::new("Pants", Color::Blue, Size::Large)));
/// assert!(!pants.is_satisfied(&Product::new("Shirt", Color::Blue, Size::Large)));
/// ```
pub fn kind_is(expected: impl Into<String>) -> KindIs {
    KindIs {
        expected: expected.into(),
    }
}

/// Specification matching products of a given color.
#[derive(Clone, Copy, Debug)]
pub struct ColorIs {
    expected: Color,
}

impl Spec<Product> for ColorIs {
    #[inline]
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color() == self.expected
    }
}

/// Create a specification that matches products by color.
///
/// # Example
///
/// ```rust
/// use millrace::catalog::{Color, Product, Size};
/// use millrace::spec::{color_is, Spec};
///
/// let green = color_is(Color::Green);
/// assert!(green.is_satisfied(&Product::new("Shirt", Color::Green, Size::Small)));
/// assert!(!green.is_satisfied(&Product::new("Shirt", Color::Red, Size::Small)));
/// ```
pub fn color_is(expected: Color) -> ColorIs {
    ColorIs { expected }
}

/// Specification matching products of a given size.
#[derive(Clone, Copy, Debug)]
pub struct SizeIs {
    expected: Size,
}

impl Spec<Product> for SizeIs {
    #[inline]
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size() == self.expected
    }
}

/// Create a specification that matches products by size.
///
/// # Example
///
/// ```rust
/// use millrace::catalog::{Color, Product, Size};
/// use millrace::spec::{size_is, Spec};
///
/// let large = size_is(Size::Large);
/// assert!(large.is_satisfied(&Product::new("Pants", Color::Blue, Size::Large)));
/// assert!(!large.is_satisfied(&Product::new("Pants", Color::Blue, Size::Small)));
/// ```
pub fn size_is(expected: Size) -> SizeIs {
    SizeIs { expected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SpecExt;

    fn sample() -> Product {
        Product::new("Pants", Color::Green, Size::Large)
    }

    #[test]
    fn test_kind_is() {
        assert!(kind_is("Pants").is_satisfied(&sample()));
        assert!(!kind_is("Shirt").is_satisfied(&sample()));
    }

    #[test]
    fn test_kind_is_accepts_owned_and_borrowed() {
        assert!(kind_is(String::from("Pants")).is_satisfied(&sample()));
        assert!(kind_is("Pants").is_satisfied(&sample()));
    }

    #[test]
    fn test_color_is() {
        assert!(color_is(Color::Green).is_satisfied(&sample()));
        assert!(!color_is(Color::Blue).is_satisfied(&sample()));
    }

    #[test]
    fn test_size_is() {
        assert!(size_is(Size::Large).is_satisfied(&sample()));
        assert!(!size_is(Size::Medium).is_satisfied(&sample()));
    }

    #[test]
    fn test_leaves_compose() {
        let large_green_pants = size_is(Size::Large)
            .and(kind_is("Pants"))
            .and(color_is(Color::Green));
        assert!(large_green_pants.is_satisfied(&sample()));
        assert!(!large_green_pants.is_satisfied(&Product::new(
            "Pants",
            Color::Blue,
            Size::Large
        )));
    }
}
