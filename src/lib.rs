//! # Millrace
//!
//! > *The race carries everything; the wheel takes what fits.*
//!
//! A Rust library for composable specifications over in-memory catalogs.
//!
//! ## Philosophy
//!
//! **Millrace** keeps the specification pattern honest:
//! - **Specifications are pure** - a specification inspects an entity and
//!   answers yes or no, nothing else
//! - **Conjunctions stay flat** - combining composites splices their clauses,
//!   so evaluation always walks one flat list in construction order
//! - **Filtering borrows** - results are references into the catalog, in the
//!   catalog's order, with no entity data copied
//!
//! ## Quick Example
//!
//! ```rust
//! use millrace::prelude::*;
//!
//! let catalog: Catalog = vec![
//!     Product::new("Shirt", Color::Green, Size::Small),
//!     Product::new("Pants", Color::Blue, Size::Large),
//!     Product::new("Pants", Color::Green, Size::Large),
//! ]
//! .into();
//!
//! let large_green_pants = size_is(Size::Large)
//!     .and(kind_is("Pants"))
//!     .and(color_is(Color::Green));
//!
//! let matches = catalog.select(&large_green_pants);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].to_string(), "Pants (Large, Green)");
//! ```
//!
//! For runnable walkthroughs, see the demo programs under `demos/`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod filter;
pub mod spec;

// Re-exports
pub use catalog::{Catalog, Color, Product, Size};
pub use filter::{filter, matching};
pub use spec::{all, All, Spec, SpecExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::{Catalog, Color, Product, Size};
    pub use crate::filter::{filter, matching};
    pub use crate::spec::{all, color_is, kind_is, size_is, All, Spec, SpecExt};
}
