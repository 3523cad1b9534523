//! Specification prelude for convenient imports
//!
//! This module re-exports the most commonly used specification types and
//! functions.
//!
//! # Example
//!
//! ```rust
//! use millrace::catalog::{Color, Product, Size};
//! use millrace::spec::prelude::*;
//!
//! let spec = kind_is("Shirt").and(color_is(Color::Blue));
//! assert!(spec.is_satisfied(&Product::new("Shirt", Color::Blue, Size::Medium)));
//! ```

// Core trait
pub use super::combinators::{Spec, SpecExt};

// Conjunction combinator
pub use super::combinators::{all, All};

// Product specifications
pub use super::product::{color_is, kind_is, size_is};
