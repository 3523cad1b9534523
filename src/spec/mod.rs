//! Composable specifications for filtering logic
//!
//! This module provides the [`Spec`] capability trait, the product leaf
//! specifications, and the flat conjunction combinator. Specifications are
//! small immutable values that answer "does this item satisfy me?" and
//! compose with `and` to build richer criteria from reusable pieces.
//!
//! # Philosophy
//!
//! Instead of writing ad-hoc boolean expressions at every call site,
//! specifications let you:
//!
//! - Name a criterion once and reuse it anywhere
//! - Combine criteria with `and` without losing flatness: nested composites
//!   are spliced at construction time, so evaluation always walks one flat
//!   clause list
//! - Treat simple and composite specifications uniformly - the filter and
//!   the catalog never care which they were handed
//!
//! # Example
//!
//! ```rust
//! use millrace::catalog::{Color, Product, Size};
//! use millrace::spec::{color_is, kind_is, size_is, Spec, SpecExt};
//!
//! let large_green_pants = size_is(Size::Large)
//!     .and(kind_is("Pants"))
//!     .and(color_is(Color::Green));
//!
//! let hit = Product::new("Pants", Color::Green, Size::Large);
//! let miss = Product::new("Pants", Color::Blue, Size::Large);
//! assert!(large_green_pants.is_satisfied(&hit));
//! assert!(!large_green_pants.is_satisfied(&miss));
//! ```
//!
//! Closures work anywhere a specification does:
//!
//! ```rust
//! use millrace::catalog::{Color, Product, Size};
//! use millrace::spec::{kind_is, Spec, SpecExt};
//!
//! let roomy_pants = kind_is("Pants").and(|p: &Product| p.size() >= Size::Large);
//! assert!(roomy_pants.is_satisfied(&Product::new("Pants", Color::Blue, Size::XtraLarge)));
//! ```

mod combinators;
mod product;

pub mod prelude;

// Re-export core trait
pub use combinators::{Spec, SpecExt};

// Re-export the conjunction combinator
pub use combinators::{all, All};

// Re-export product specifications
pub use product::{color_is, kind_is, size_is, ColorIs, KindIs, SizeIs};
